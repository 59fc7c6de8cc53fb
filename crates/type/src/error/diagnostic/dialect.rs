// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// A function call or subquery used as a select-list item
pub fn function_or_subquery_in_select(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("`{}` is not a plain column reference", fragment.text()));
	Diagnostic {
		code: "DIALECT_001".to_string(),
		statement: None,
		message: "function calls and subqueries are not allowed in the select list".to_string(),
		fragment,
		label,
		help: Some("select plain columns and move the computation into the WHERE clause".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A subquery anywhere in the statement
pub fn subquery_not_allowed(fragment: Fragment) -> Diagnostic {
	Diagnostic {
		code: "DIALECT_002".to_string(),
		statement: None,
		message: "subqueries are not allowed".to_string(),
		fragment,
		label: Some("nested SELECT starts here".to_string()),
		help: Some("rewrite the statement as a single flat SELECT, joining instead of nesting".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Missing or trivial WHERE clause
pub fn missing_where_clause() -> Diagnostic {
	Diagnostic {
		code: "DIALECT_003".to_string(),
		statement: None,
		message: "statement has no effective WHERE clause".to_string(),
		fragment: Fragment::None,
		label: None,
		help: Some("add a non-trivial WHERE predicate".to_string()),
		notes: vec!["a bare boolean literal does not count as a predicate".to_string()],
		cause: None,
	}
}
