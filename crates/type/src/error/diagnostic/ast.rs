// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{error::diagnostic::Diagnostic, fragment::Fragment};

/// Error for an empty or whitespace-only statement
pub fn empty_statement_error() -> Diagnostic {
	Diagnostic {
		code: "AST_001".to_string(),
		statement: None,
		message: "empty statement".to_string(),
		fragment: Fragment::None,
		label: None,
		help: Some("provide a single SELECT statement".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Unexpected end of input during parsing
pub fn unexpected_eof_error() -> Diagnostic {
	Diagnostic {
		code: "AST_002".to_string(),
		statement: None,
		message: "unexpected end of input".to_string(),
		fragment: Fragment::None,
		label: None,
		help: Some("complete the statement".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Error for when we expect an identifier token specifically
pub fn expected_identifier_error(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("found `{}`", fragment.text()));

	Diagnostic {
		code: "AST_003".to_string(),
		statement: None,
		message: "unexpected token: expected `identifier`".to_string(),
		fragment,
		label,
		help: Some("expected token of type `identifier`".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Error for unexpected tokens
pub fn unexpected_token_error(expected: &str, fragment: Fragment) -> Diagnostic {
	let message = format!("unexpected token: expected {}, got {}", expected, fragment.text());
	let label = Some(format!("found `{}`", fragment.text()));
	Diagnostic {
		code: "AST_005".to_string(),
		statement: None,
		message,
		fragment,
		label,
		help: Some(format!("use {} instead", expected)),
		notes: vec![],
		cause: None,
	}
}

/// Error for constructs outside the accepted subset, e.g. CTEs
pub fn unsupported_construct_error(construct: &str, fragment: Fragment) -> Diagnostic {
	Diagnostic {
		code: "AST_006".to_string(),
		statement: None,
		message: format!("unsupported construct: {}", construct),
		fragment,
		label: Some(format!("{} is not part of the accepted SQL subset", construct)),
		help: Some("rewrite the statement as a single plain SELECT".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Error for tokens left over after a complete statement
pub fn trailing_input_error(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("found `{}` after the statement end", fragment.text()));
	Diagnostic {
		code: "AST_007".to_string(),
		statement: None,
		message: "trailing input after statement".to_string(),
		fragment,
		label,
		help: Some("submit exactly one SELECT statement".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Error for characters the lexer could not recognize
pub fn invalid_character_error(fragment: Fragment) -> Diagnostic {
	let label = Some(format!("unrecognized character `{}`", fragment.text()));
	Diagnostic {
		code: "AST_008".to_string(),
		statement: None,
		message: "invalid character in statement".to_string(),
		fragment,
		label,
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Error for string literals missing their closing quote
pub fn unterminated_string_error(fragment: Fragment) -> Diagnostic {
	Diagnostic {
		code: "AST_009".to_string(),
		statement: None,
		message: "unterminated string literal".to_string(),
		fragment,
		label: Some("string starts here and never closes".to_string()),
		help: Some("add the closing `'`".to_string()),
		notes: vec!["escape a quote inside a string by doubling it: ''".to_string()],
		cause: None,
	}
}

/// Error for a statement without the mandatory WHERE clause
pub fn missing_where_clause_error(fragment: Fragment) -> Diagnostic {
	Diagnostic {
		code: "AST_010".to_string(),
		statement: None,
		message: "statement has no WHERE clause".to_string(),
		fragment,
		label: None,
		help: Some("the accepted subset requires an explicit WHERE clause".to_string()),
		notes: vec!["the remote platform appends its own filter to the WHERE clause".to_string()],
		cause: None,
	}
}
