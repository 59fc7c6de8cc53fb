// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

//! Deterministic structure-preserving rendering. Keywords are uppercased,
//! separators are single spaces, and parentheses are emitted only where
//! operator precedence requires them. Target-notation peculiarities live
//! in [`RenderRules`], not in the walk itself.

use crate::ast::{
	AstColumn, Expression, FromClause, InfixOperator, PrefixOperator, SelectItem, SelectStatement, SubSelect,
	TableRef,
};

/// The pluggable rendering-rule table. Two rule sets ship: plain
/// canonical SQL and the NSQL notation the remote platform consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRules {
	select_items: SelectItemRule,
	filter_suffix: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectItemRule {
	Plain,
	/// `@SELECT:DIM:USER_DEF:IMPLIED:T:<table>.<column>:<alias>@` for the
	/// first item, `DIM_PROP` for the rest.
	Dimension,
}

impl RenderRules {
	/// Plain canonical SQL. Re-parsing the output yields an equal tree.
	pub fn canonical() -> Self {
		Self {
			select_items: SelectItemRule::Plain,
			filter_suffix: None,
		}
	}

	/// The NSQL notation: dimension-wrapped select items and the
	/// `AND @FILTER@` marker the remote content package requires after
	/// the WHERE clause.
	pub fn clarity() -> Self {
		Self {
			select_items: SelectItemRule::Dimension,
			filter_suffix: Some("AND @FILTER@"),
		}
	}
}

impl Default for RenderRules {
	fn default() -> Self {
		Self::canonical()
	}
}

pub fn render(statement: &SelectStatement, rules: &RenderRules) -> String {
	let mut out = String::with_capacity(128);

	out.push_str("SELECT ");
	for (index, item) in statement.items.iter().enumerate() {
		if index > 0 {
			out.push_str(", ");
		}
		match rules.select_items {
			SelectItemRule::Plain => render_select_item(&mut out, item),
			SelectItemRule::Dimension => render_dimension_item(&mut out, item, index == 0),
		}
	}

	out.push(' ');
	render_from(&mut out, &statement.from);

	out.push_str(" WHERE ");
	render_expression(&mut out, &statement.filter);
	if let Some(suffix) = rules.filter_suffix {
		out.push(' ');
		out.push_str(suffix);
	}

	if let Some(order_by) = &statement.order_by {
		out.push_str(" ORDER BY ");
		for (index, key) in order_by.keys.iter().enumerate() {
			if index > 0 {
				out.push_str(", ");
			}
			render_expression(&mut out, &key.expression);
			if let Some(direction) = key.direction {
				out.push(' ');
				out.push_str(direction.as_str());
			}
		}
	}

	out
}

fn render_select_item(out: &mut String, item: &SelectItem) {
	render_expression(out, &item.expression);
	if let Some(alias) = &item.alias {
		out.push_str(" AS ");
		out.push_str(alias.value());
	}
}

/// One NSQL dimension wrapper. A qualified column keeps its qualifier in
/// the `<table>.<column>` slot; a bare column stands in for its own table,
/// which is what the remote platform expects for single-table statements.
fn render_dimension_item(out: &mut String, item: &SelectItem, first: bool) {
	out.push_str(if first {
		"@SELECT:DIM:USER_DEF:IMPLIED:T:"
	} else {
		"@SELECT:DIM_PROP:USER_DEF:IMPLIED:T:"
	});

	match &item.expression {
		Expression::Column(column) => {
			render_column_path(out, column);
			out.push(':');
			match &item.alias {
				Some(alias) => out.push_str(alias.value()),
				None => out.push_str(column.name.value()),
			}
		}
		expression => {
			render_expression(out, expression);
			out.push(':');
			match &item.alias {
				Some(alias) => out.push_str(alias.value()),
				None => render_expression(out, expression),
			}
		}
	}
	out.push('@');
}

fn render_column_path(out: &mut String, column: &AstColumn) {
	match &column.table {
		Some(table) => {
			out.push_str(table.value());
			out.push('.');
			out.push_str(column.name.value());
		}
		None => {
			out.push_str(column.name.value());
			out.push('.');
			out.push_str(column.name.value());
		}
	}
}

fn render_from(out: &mut String, from: &FromClause) {
	out.push_str("FROM ");
	for (index, table) in from.tables.iter().enumerate() {
		if index > 0 {
			out.push_str(", ");
		}
		render_table_ref(out, table);
	}
	for join in &from.joins {
		out.push(' ');
		out.push_str(join.kind.as_str());
		out.push(' ');
		render_table_ref(out, &join.table);
		out.push_str(" ON ");
		render_expression(out, &join.condition);
	}
}

fn render_table_ref(out: &mut String, table: &TableRef) {
	out.push_str(table.name.value());
	if let Some(alias) = &table.alias {
		out.push(' ');
		out.push_str(alias.value());
	}
}

/// Binding strength used for minimal parenthesization. Higher binds
/// tighter.
fn binding(expression: &Expression) -> u8 {
	match expression {
		Expression::Infix(infix) => operator_binding(infix.operator),
		Expression::Between(_) | Expression::IsNull(_) => 4,
		Expression::Prefix(prefix) => prefix_binding(prefix.operator),
		Expression::Column(_)
		| Expression::Literal(_)
		| Expression::Call(_)
		| Expression::SubQuery(_)
		| Expression::Paren(_)
		| Expression::Tuple(_) => 8,
	}
}

fn operator_binding(operator: InfixOperator) -> u8 {
	use InfixOperator::*;
	match operator {
		Or => 1,
		And => 2,
		Equal | NotEqual | LessThan | LessThanEqual | GreaterThan | GreaterThanEqual | Like | NotLike | In
		| NotIn => 4,
		Add | Subtract => 5,
		Multiply | Divide | Remainder => 6,
	}
}

/// Logical NOT sits between AND and the comparisons; sign prefixes bind
/// tighter than any infix operator.
fn prefix_binding(operator: PrefixOperator) -> u8 {
	match operator {
		PrefixOperator::Not => 3,
		PrefixOperator::Minus | PrefixOperator::Plus => 7,
	}
}

fn is_associative(operator: InfixOperator) -> bool {
	matches!(
		operator,
		InfixOperator::And | InfixOperator::Or | InfixOperator::Add | InfixOperator::Multiply
	)
}

fn render_expression(out: &mut String, expression: &Expression) {
	match expression {
		Expression::Column(column) => match &column.table {
			Some(table) => {
				out.push_str(table.value());
				out.push('.');
				out.push_str(column.name.value());
			}
			None => out.push_str(column.name.value()),
		},
		Expression::Literal(literal) => {
			let text = literal.0.value();
			// word literals render in canonical casing, everything
			// else stays verbatim
			match text.to_ascii_uppercase().as_str() {
				"NULL" => out.push_str("NULL"),
				"TRUE" => out.push_str("TRUE"),
				"FALSE" => out.push_str("FALSE"),
				_ => out.push_str(text),
			}
		}
		Expression::Prefix(prefix) => {
			out.push_str(prefix.operator.as_str());
			if prefix.operator == PrefixOperator::Not {
				out.push(' ');
			}
			// a nested prefix is parenthesized so `- -a` never renders
			// as a `--` comment opener
			render_operand(out, &prefix.node, prefix_binding(prefix.operator), false);
		}
		Expression::Infix(infix) => {
			let level = operator_binding(infix.operator);
			render_operand(out, &infix.left, level, true);
			out.push(' ');
			out.push_str(infix.operator.as_str());
			out.push(' ');
			render_operand(out, &infix.right, level, is_associative(infix.operator));
		}
		Expression::Between(between) => {
			render_operand(out, &between.value, 4, true);
			if between.negated {
				out.push_str(" NOT");
			}
			out.push_str(" BETWEEN ");
			render_operand(out, &between.lower, 5, true);
			out.push_str(" AND ");
			render_operand(out, &between.upper, 5, true);
		}
		Expression::IsNull(is_null) => {
			render_operand(out, &is_null.node, 4, true);
			out.push_str(if is_null.negated {
				" IS NOT NULL"
			} else {
				" IS NULL"
			});
		}
		Expression::Call(call) => {
			out.push_str(call.token.value());
			out.push('(');
			for (index, argument) in call.arguments.iter().enumerate() {
				if index > 0 {
					out.push_str(", ");
				}
				render_expression(out, argument);
			}
			out.push(')');
		}
		Expression::SubQuery(sub_query) => {
			out.push('(');
			render_sub_select(out, &sub_query.statement);
			out.push(')');
		}
		Expression::Paren(paren) => {
			out.push('(');
			render_expression(out, &paren.node);
			out.push(')');
		}
		Expression::Tuple(tuple) => {
			out.push('(');
			for (index, node) in tuple.nodes.iter().enumerate() {
				if index > 0 {
					out.push_str(", ");
				}
				render_expression(out, node);
			}
			out.push(')');
		}
	}
}

/// Render a child of an operator, parenthesizing when the child binds
/// looser than the parent, or equally for non-associative positions.
fn render_operand(out: &mut String, operand: &Expression, parent: u8, allow_equal: bool) {
	let child = binding(operand);
	let needs_parens = child < parent || (child == parent && !allow_equal);
	if needs_parens {
		out.push('(');
		render_expression(out, operand);
		out.push(')');
	} else {
		render_expression(out, operand);
	}
}

/// Validated statements never contain sub-selects, but the renderer is
/// usable on any parsed tree, so render them faithfully.
fn render_sub_select(out: &mut String, sub_select: &SubSelect) {
	out.push_str("SELECT ");
	for (index, item) in sub_select.items.iter().enumerate() {
		if index > 0 {
			out.push_str(", ");
		}
		render_select_item(out, item);
	}
	if let Some(from) = &sub_select.from {
		out.push(' ');
		render_from(out, from);
	}
	if let Some(filter) = &sub_select.filter {
		out.push_str(" WHERE ");
		render_expression(out, filter);
	}
	if let Some(order_by) = &sub_select.order_by {
		out.push_str(" ORDER BY ");
		for (index, key) in order_by.keys.iter().enumerate() {
			if index > 0 {
				out.push_str(", ");
			}
			render_expression(out, &key.expression);
			if let Some(direction) = key.direction {
				out.push(' ');
				out.push_str(direction.as_str());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ast::parse_str;

	fn canonical(statement: &str) -> String {
		render(&parse_str(statement).unwrap(), &RenderRules::canonical())
	}

	fn clarity(statement: &str) -> String {
		render(&parse_str(statement).unwrap(), &RenderRules::clarity())
	}

	#[test]
	fn test_canonical_normalizes_casing_and_spacing() {
		assert_eq!(
			canonical("select  a ,b   from t\nwhere a>10"),
			"SELECT a, b FROM t WHERE a > 10"
		);
	}

	#[test]
	fn test_canonical_preserves_alias_casing() {
		assert_eq!(
			canonical("SELECT a AS TotalHours FROM t WHERE a > 0"),
			"SELECT a AS TotalHours FROM t WHERE a > 0"
		);
	}

	#[test]
	fn test_canonical_is_fixpoint() {
		let statements = [
			"SELECT a, b AS bb FROM t WHERE a > 10 ORDER BY b DESC",
			"SELECT p.a FROM projects p LEFT JOIN tasks k ON p.id = k.pid WHERE p.a IS NOT NULL",
			"SELECT a FROM t WHERE a NOT IN (1, 2, 3) AND b BETWEEN 1 AND 10",
			"SELECT a FROM t WHERE NOT (a = 1 OR b = 2)",
			"SELECT a FROM t WHERE NOT a = 1 AND b = 2",
			"SELECT a FROM t WHERE (a + b) * c = 1",
		];
		for statement in statements {
			let once = canonical(statement);
			let twice = canonical(&once);
			assert_eq!(once, twice, "render of {statement} is not stable");
		}
	}

	#[test]
	fn test_explicit_parens_kept_none_added() {
		assert_eq!(
			canonical("SELECT a FROM t WHERE ((a)) = ((1))"),
			"SELECT a FROM t WHERE ((a)) = ((1))"
		);
		assert_eq!(
			canonical("SELECT a FROM t WHERE a + b * c = 1"),
			"SELECT a FROM t WHERE a + b * c = 1"
		);
	}

	#[test]
	fn test_not_spans_a_whole_comparison_without_parens() {
		assert_eq!(canonical("SELECT a FROM t WHERE NOT a = 1"), "SELECT a FROM t WHERE NOT a = 1");
		assert_eq!(
			canonical("SELECT a FROM t WHERE NOT (a = 1 AND b = 2)"),
			"SELECT a FROM t WHERE NOT (a = 1 AND b = 2)"
		);
	}

	#[test]
	fn test_word_literals_uppercased() {
		assert_eq!(
			canonical("SELECT a FROM t WHERE a = null OR b = true"),
			"SELECT a FROM t WHERE a = NULL OR b = TRUE"
		);
	}

	#[test]
	fn test_string_literal_verbatim() {
		assert_eq!(
			canonical("SELECT a FROM t WHERE name LIKE '%It''s%'"),
			"SELECT a FROM t WHERE name LIKE '%It''s%'"
		);
	}

	#[test]
	fn test_bare_join_renders_inner() {
		assert_eq!(
			canonical("SELECT a FROM t JOIN u ON t.id = u.id WHERE a = 1"),
			"SELECT a FROM t INNER JOIN u ON t.id = u.id WHERE a = 1"
		);
	}

	#[test]
	fn test_clarity_first_item_is_dim() {
		assert_eq!(
			clarity("SELECT p.code, p.name label FROM projects p WHERE p.active = 1"),
			"SELECT @SELECT:DIM:USER_DEF:IMPLIED:T:p.code:code@, \
			 @SELECT:DIM_PROP:USER_DEF:IMPLIED:T:p.name:label@ \
			 FROM projects p WHERE p.active = 1 AND @FILTER@"
		);
	}

	#[test]
	fn test_clarity_bare_column() {
		assert_eq!(
			clarity("SELECT code FROM projects WHERE code IS NOT NULL"),
			"SELECT @SELECT:DIM:USER_DEF:IMPLIED:T:code.code:code@ \
			 FROM projects WHERE code IS NOT NULL AND @FILTER@"
		);
	}

	#[test]
	fn test_clarity_keeps_order_by_after_filter_marker() {
		let rendered = clarity("SELECT a FROM t WHERE a > 0 ORDER BY a DESC");
		assert!(rendered.ends_with("WHERE a > 0 AND @FILTER@ ORDER BY a DESC"));
	}
}
