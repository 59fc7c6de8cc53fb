// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

//! Dialect validation. Parsing accepts a slightly larger language than
//! the remote platform does; this pass walks the whole statement and
//! collects every violation instead of stopping at the first one.

use crate::{
	ast::{Expression, SelectStatement, SubSelect},
	error::ValidationError,
	token::Literal,
};

/// Check a parsed statement against the dialect rules. On success the
/// statement passes through unchanged; on failure every violation found
/// is returned, in statement order.
pub fn validate(statement: SelectStatement) -> Result<SelectStatement, Vec<ValidationError>> {
	let mut violations = Vec::new();

	for item in &statement.items {
		check_select_item(&item.expression, &mut violations);
	}

	for join in &statement.from.joins {
		collect_sub_queries(&join.condition, &mut violations);
	}

	if is_trivial_filter(&statement.filter) {
		violations.push(ValidationError::MissingWhereClause);
	}
	collect_sub_queries(&statement.filter, &mut violations);

	if let Some(order_by) = &statement.order_by {
		for key in &order_by.keys {
			collect_sub_queries(&key.expression, &mut violations);
		}
	}

	if violations.is_empty() {
		Ok(statement)
	} else {
		Err(violations)
	}
}

/// A select item must be a plain column or literal expression at its top
/// level. Parentheses do not hide a call or a sub-select.
fn check_select_item(expression: &Expression, violations: &mut Vec<ValidationError>) {
	let mut node = expression;
	while let Expression::Paren(paren) = node {
		node = &paren.node;
	}

	match node {
		Expression::Call(call) => {
			violations.push(ValidationError::FunctionOrSubqueryInSelect {
				fragment: call.token.fragment.clone(),
			});
			for argument in &call.arguments {
				collect_sub_queries(argument, violations);
			}
		}
		Expression::SubQuery(sub_query) => {
			// a sub-select as a select item breaks the item rule and the
			// no-subqueries rule; report both
			violations.push(ValidationError::FunctionOrSubqueryInSelect {
				fragment: sub_query.token.fragment.clone(),
			});
			collect_sub_queries(node, violations);
		}
		_ => collect_sub_queries(node, violations),
	}
}

/// A filter that is a bare boolean literal, however parenthesized, does
/// not restrict anything and counts as a missing WHERE clause.
fn is_trivial_filter(filter: &Expression) -> bool {
	let mut node = filter;
	while let Expression::Paren(paren) = node {
		node = &paren.node;
	}
	matches!(
		node,
		Expression::Literal(literal)
			if literal.0.is_literal(Literal::True) || literal.0.is_literal(Literal::False)
	)
}

fn collect_sub_queries(expression: &Expression, violations: &mut Vec<ValidationError>) {
	match expression {
		Expression::SubQuery(sub_query) => {
			violations.push(ValidationError::SubqueryNotAllowed {
				fragment: sub_query.token.fragment.clone(),
			});
			collect_from_sub_select(&sub_query.statement, violations);
		}
		Expression::Prefix(prefix) => collect_sub_queries(&prefix.node, violations),
		Expression::Infix(infix) => {
			collect_sub_queries(&infix.left, violations);
			collect_sub_queries(&infix.right, violations);
		}
		Expression::Between(between) => {
			collect_sub_queries(&between.value, violations);
			collect_sub_queries(&between.lower, violations);
			collect_sub_queries(&between.upper, violations);
		}
		Expression::IsNull(is_null) => collect_sub_queries(&is_null.node, violations),
		Expression::Call(call) => {
			for argument in &call.arguments {
				collect_sub_queries(argument, violations);
			}
		}
		Expression::Paren(paren) => collect_sub_queries(&paren.node, violations),
		Expression::Tuple(tuple) => {
			for node in &tuple.nodes {
				collect_sub_queries(node, violations);
			}
		}
		Expression::Column(_) | Expression::Literal(_) => {}
	}
}

/// Nested selects can nest further; report every level.
fn collect_from_sub_select(sub_select: &SubSelect, violations: &mut Vec<ValidationError>) {
	for item in &sub_select.items {
		collect_sub_queries(&item.expression, violations);
	}
	if let Some(from) = &sub_select.from {
		for join in &from.joins {
			collect_sub_queries(&join.condition, violations);
		}
	}
	if let Some(filter) = &sub_select.filter {
		collect_sub_queries(filter, violations);
	}
	if let Some(order_by) = &sub_select.order_by {
		for key in &order_by.keys {
			collect_sub_queries(&key.expression, violations);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{ast::parse_str, error::ValidationError};

	fn violations_of(statement: &str) -> Vec<ValidationError> {
		validate(parse_str(statement).unwrap()).unwrap_err()
	}

	#[test]
	fn test_plain_statement_passes() {
		let statement = parse_str("SELECT a, t.b FROM t WHERE a > 10 ORDER BY b DESC").unwrap();
		assert!(validate(statement).is_ok());
	}

	#[test]
	fn test_call_in_select_list_rejected() {
		let violations = violations_of("SELECT upper(a) FROM t WHERE a = 1");
		assert_eq!(violations.len(), 1);
		let ValidationError::FunctionOrSubqueryInSelect { fragment } = &violations[0] else {
			panic!("expected FunctionOrSubqueryInSelect");
		};
		assert_eq!(fragment.text(), "upper");
	}

	#[test]
	fn test_parenthesized_call_still_rejected() {
		let violations = violations_of("SELECT (upper(a)) FROM t WHERE a = 1");
		assert_eq!(violations.len(), 1);
		assert!(matches!(violations[0], ValidationError::FunctionOrSubqueryInSelect { .. }));
	}

	#[test]
	fn test_call_in_where_allowed() {
		let statement = parse_str("SELECT a FROM t WHERE upper(name) = 'X'").unwrap();
		assert!(validate(statement).is_ok());
	}

	#[test]
	fn test_call_in_join_condition_allowed() {
		let statement = parse_str("SELECT a FROM t JOIN u ON lower(t.k) = lower(u.k) WHERE a = 1").unwrap();
		assert!(validate(statement).is_ok());
	}

	#[test]
	fn test_sub_query_in_where_rejected() {
		let violations = violations_of("SELECT a FROM t WHERE a IN (SELECT b FROM u)");
		assert_eq!(violations.len(), 1);
		let ValidationError::SubqueryNotAllowed { fragment } = &violations[0] else {
			panic!("expected SubqueryNotAllowed");
		};
		assert_eq!(fragment.text(), "SELECT");
		// points at the inner SELECT, not the statement head
		assert!(fragment.offset() > 0);
	}

	#[test]
	fn test_nested_sub_queries_all_reported() {
		let violations = violations_of("SELECT a FROM t WHERE a IN (SELECT b FROM u WHERE b IN (SELECT c FROM v))");
		assert_eq!(violations.len(), 2);
	}

	#[test]
	fn test_trivial_filter_rejected() {
		let violations = violations_of("SELECT a FROM t WHERE TRUE");
		assert_eq!(violations, vec![ValidationError::MissingWhereClause]);
	}

	#[test]
	fn test_parenthesized_trivial_filter_rejected() {
		let violations = violations_of("SELECT a FROM t WHERE ((FALSE))");
		assert_eq!(violations, vec![ValidationError::MissingWhereClause]);
	}

	#[test]
	fn test_sub_query_select_item_breaks_both_rules() {
		let violations = violations_of("SELECT (SELECT b FROM u) FROM t WHERE a = 1");
		assert_eq!(violations.len(), 2);
		assert!(matches!(violations[0], ValidationError::FunctionOrSubqueryInSelect { .. }));
		assert!(matches!(violations[1], ValidationError::SubqueryNotAllowed { .. }));
	}

	#[test]
	fn test_all_violations_collected() {
		let violations = violations_of("SELECT count(a), (SELECT b FROM u) FROM t WHERE TRUE");
		assert_eq!(violations.len(), 4);
		assert!(matches!(violations[0], ValidationError::FunctionOrSubqueryInSelect { .. }));
		assert!(matches!(violations[1], ValidationError::FunctionOrSubqueryInSelect { .. }));
		assert!(matches!(violations[2], ValidationError::SubqueryNotAllowed { .. }));
		assert_eq!(violations[3], ValidationError::MissingWhereClause);
	}
}
