// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::token::Token;

/// A fully parsed top-level SELECT. The filter is not optional: the
/// dialect requires every statement to carry a WHERE clause, and the
/// parser rejects statements without one.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
	pub token: Token,
	pub items: Vec<SelectItem>,
	pub from: FromClause,
	pub filter: Expression,
	pub order_by: Option<OrderByClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
	pub expression: Expression,
	pub alias: Option<Token>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
	pub token: Token,
	pub tables: Vec<TableRef>,
	pub joins: Vec<JoinClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
	pub name: Token,
	pub alias: Option<Token>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
	pub token: Token,
	pub kind: JoinKind,
	pub table: TableRef,
	pub condition: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
	Inner,
	Left,
	Right,
	Full,
}

impl JoinKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			JoinKind::Inner => "INNER JOIN",
			JoinKind::Left => "LEFT JOIN",
			JoinKind::Right => "RIGHT JOIN",
			JoinKind::Full => "FULL JOIN",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
	pub token: Token,
	pub keys: Vec<OrderKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderKey {
	pub expression: Expression,
	pub direction: Option<OrderDirection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
	Asc,
	Desc,
}

impl OrderDirection {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderDirection::Asc => "ASC",
			OrderDirection::Desc => "DESC",
		}
	}
}

/// A nested SELECT appearing inside an expression. Unlike the top level,
/// FROM and WHERE are optional here: sub-selects are parsed permissively
/// so that validation can point at them with their own span instead of
/// failing with an unrelated syntax error.
#[derive(Debug, Clone, PartialEq)]
pub struct SubSelect {
	pub token: Token,
	pub items: Vec<SelectItem>,
	pub from: Option<FromClause>,
	pub filter: Option<Expression>,
	pub order_by: Option<OrderByClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Column(AstColumn),
	Literal(AstLiteral),
	Prefix(AstPrefix),
	Infix(AstInfix),
	Between(AstBetween),
	IsNull(AstIsNull),
	Call(AstCall),
	SubQuery(AstSubQuery),
	Paren(AstParen),
	Tuple(AstTuple),
}

impl Expression {
	/// The token anchoring this expression, used for diagnostics.
	pub fn token(&self) -> &Token {
		match self {
			Expression::Column(node) => &node.name,
			Expression::Literal(node) => &node.0,
			Expression::Prefix(node) => &node.token,
			Expression::Infix(node) => &node.token,
			Expression::Between(node) => &node.token,
			Expression::IsNull(node) => &node.token,
			Expression::Call(node) => &node.token,
			Expression::SubQuery(node) => &node.token,
			Expression::Paren(node) => &node.token,
			Expression::Tuple(node) => &node.token,
		}
	}

	pub fn is_column(&self) -> bool {
		matches!(self, Expression::Column(_))
	}

	pub fn as_column(&self) -> &AstColumn {
		if let Expression::Column(result) = self {
			result
		} else {
			panic!("not column")
		}
	}

	pub fn as_literal(&self) -> &AstLiteral {
		if let Expression::Literal(result) = self {
			result
		} else {
			panic!("not literal")
		}
	}

	pub fn as_prefix(&self) -> &AstPrefix {
		if let Expression::Prefix(result) = self {
			result
		} else {
			panic!("not prefix")
		}
	}

	pub fn as_infix(&self) -> &AstInfix {
		if let Expression::Infix(result) = self {
			result
		} else {
			panic!("not infix")
		}
	}

	pub fn as_between(&self) -> &AstBetween {
		if let Expression::Between(result) = self {
			result
		} else {
			panic!("not between")
		}
	}

	pub fn as_is_null(&self) -> &AstIsNull {
		if let Expression::IsNull(result) = self {
			result
		} else {
			panic!("not is null")
		}
	}

	pub fn as_call(&self) -> &AstCall {
		if let Expression::Call(result) = self {
			result
		} else {
			panic!("not call")
		}
	}

	pub fn is_sub_query(&self) -> bool {
		matches!(self, Expression::SubQuery(_))
	}

	pub fn as_sub_query(&self) -> &AstSubQuery {
		if let Expression::SubQuery(result) = self {
			result
		} else {
			panic!("not sub query")
		}
	}

	pub fn as_tuple(&self) -> &AstTuple {
		if let Expression::Tuple(result) = self {
			result
		} else {
			panic!("not tuple")
		}
	}
}

/// A column reference, optionally table-qualified.
#[derive(Debug, Clone, PartialEq)]
pub struct AstColumn {
	pub table: Option<Token>,
	pub name: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstLiteral(pub Token);

#[derive(Debug, Clone, PartialEq)]
pub struct AstPrefix {
	pub token: Token,
	pub operator: PrefixOperator,
	pub node: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
	Not,
	Minus,
	Plus,
}

impl PrefixOperator {
	pub fn as_str(&self) -> &'static str {
		match self {
			PrefixOperator::Not => "NOT",
			PrefixOperator::Minus => "-",
			PrefixOperator::Plus => "+",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstInfix {
	pub left: Box<Expression>,
	pub operator: InfixOperator,
	pub token: Token,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
	And,
	Or,
	Equal,
	NotEqual,
	LessThan,
	LessThanEqual,
	GreaterThan,
	GreaterThanEqual,
	Add,
	Subtract,
	Multiply,
	Divide,
	Remainder,
	Like,
	NotLike,
	In,
	NotIn,
}

impl InfixOperator {
	pub fn as_str(&self) -> &'static str {
		match self {
			InfixOperator::And => "AND",
			InfixOperator::Or => "OR",
			InfixOperator::Equal => "=",
			InfixOperator::NotEqual => "<>",
			InfixOperator::LessThan => "<",
			InfixOperator::LessThanEqual => "<=",
			InfixOperator::GreaterThan => ">",
			InfixOperator::GreaterThanEqual => ">=",
			InfixOperator::Add => "+",
			InfixOperator::Subtract => "-",
			InfixOperator::Multiply => "*",
			InfixOperator::Divide => "/",
			InfixOperator::Remainder => "%",
			InfixOperator::Like => "LIKE",
			InfixOperator::NotLike => "NOT LIKE",
			InfixOperator::In => "IN",
			InfixOperator::NotIn => "NOT IN",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstBetween {
	pub token: Token,
	pub value: Box<Expression>,
	pub lower: Box<Expression>,
	pub upper: Box<Expression>,
	pub negated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstIsNull {
	pub token: Token,
	pub node: Box<Expression>,
	pub negated: bool,
}

/// A function call. Representable everywhere; the validator rejects
/// calls at the top level of a select item.
#[derive(Debug, Clone, PartialEq)]
pub struct AstCall {
	pub token: Token,
	pub arguments: Vec<Expression>,
}

/// A nested SELECT. The token is the inner SELECT keyword so that
/// validation errors point at the sub-select itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AstSubQuery {
	pub token: Token,
	pub statement: Box<SubSelect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstParen {
	pub token: Token,
	pub node: Box<Expression>,
}

/// A parenthesized list with more than one element, the right-hand side
/// of IN.
#[derive(Debug, Clone, PartialEq)]
pub struct AstTuple {
	pub token: Token,
	pub nodes: Vec<Expression>,
}
