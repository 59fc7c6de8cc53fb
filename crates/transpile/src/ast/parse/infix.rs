// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		AstBetween, AstInfix, AstIsNull, Expression, InfixOperator,
		parse::{Parser, Precedence, get_precedence_for_operator},
	},
	error::ParseError,
	token::{Keyword, Literal, Operator, TokenKind},
};

impl Parser {
	pub(crate) fn parse_infix(&mut self, left: Expression) -> Result<Expression, ParseError> {
		let token = self.advance()?;
		let (operator, precedence) = match token.kind {
			TokenKind::Operator(op) => {
				let operator = match op {
					Operator::And => InfixOperator::And,
					Operator::Or => InfixOperator::Or,
					Operator::Equal => InfixOperator::Equal,
					Operator::BangEqual | Operator::LeftAngleRightAngle => InfixOperator::NotEqual,
					Operator::LeftAngle => InfixOperator::LessThan,
					Operator::LeftAngleEqual => InfixOperator::LessThanEqual,
					Operator::RightAngle => InfixOperator::GreaterThan,
					Operator::RightAngleEqual => InfixOperator::GreaterThanEqual,
					Operator::Plus => InfixOperator::Add,
					Operator::Minus => InfixOperator::Subtract,
					Operator::Asterisk => InfixOperator::Multiply,
					Operator::Slash => InfixOperator::Divide,
					Operator::Percent => InfixOperator::Remainder,
					_ => {
						return Err(ParseError::UnexpectedToken {
							expected: "an infix operator".to_string(),
							fragment: token.fragment,
						});
					}
				};
				(operator, get_precedence_for_operator(op))
			}
			_ => {
				return Err(ParseError::UnexpectedToken {
					expected: "an infix operator".to_string(),
					fragment: token.fragment,
				});
			}
		};

		// left-associative: the right side binds at the operator's own level
		let right = self.parse_node(precedence)?;
		Ok(Expression::Infix(AstInfix {
			left: Box::new(left),
			operator,
			token,
			right: Box::new(right),
		}))
	}

	/// `value [NOT] BETWEEN lower AND upper`. The bounds are parsed at
	/// comparison precedence so the AND separating them is never taken
	/// for a logical conjunction.
	pub(crate) fn parse_between(&mut self, left: Expression, negated: bool) -> Result<Expression, ParseError> {
		let token = self.consume_keyword(Keyword::Between)?;
		let lower = self.parse_node(Precedence::Comparison)?;
		self.consume_operator(Operator::And)?;
		let upper = self.parse_node(Precedence::Comparison)?;

		Ok(Expression::Between(AstBetween {
			token,
			value: Box::new(left),
			lower: Box::new(lower),
			upper: Box::new(upper),
			negated,
		}))
	}

	pub(crate) fn parse_in(&mut self, left: Expression, negated: bool) -> Result<Expression, ParseError> {
		let token = self.consume_keyword(Keyword::In)?;
		let right = self.parse_node(Precedence::Comparison)?;

		Ok(Expression::Infix(AstInfix {
			left: Box::new(left),
			operator: if negated {
				InfixOperator::NotIn
			} else {
				InfixOperator::In
			},
			token,
			right: Box::new(right),
		}))
	}

	pub(crate) fn parse_like(&mut self, left: Expression, negated: bool) -> Result<Expression, ParseError> {
		let token = self.consume_keyword(Keyword::Like)?;
		let right = self.parse_node(Precedence::Comparison)?;

		Ok(Expression::Infix(AstInfix {
			left: Box::new(left),
			operator: if negated {
				InfixOperator::NotLike
			} else {
				InfixOperator::Like
			},
			token,
			right: Box::new(right),
		}))
	}

	/// `value IS [NOT] NULL`.
	pub(crate) fn parse_is(&mut self, left: Expression) -> Result<Expression, ParseError> {
		let token = self.consume_keyword(Keyword::Is)?;
		let negated = self.consume_if(TokenKind::Operator(Operator::Not)).is_some();

		let current = self.current()?;
		if !current.is_literal(Literal::Null) {
			return Err(ParseError::UnexpectedToken {
				expected: "`NULL`".to_string(),
				fragment: current.fragment.clone(),
			});
		}
		self.advance()?;

		Ok(Expression::IsNull(AstIsNull {
			token,
			node: Box::new(left),
			negated,
		}))
	}

	/// NOT after a complete left operand introduces the negated forms
	/// NOT IN, NOT LIKE and NOT BETWEEN.
	pub(crate) fn parse_negated(&mut self, left: Expression) -> Result<Expression, ParseError> {
		let not = self.consume_operator(Operator::Not)?;

		let current = self.current()?;
		match current.kind {
			TokenKind::Keyword(Keyword::In) => self.parse_in(left, true),
			TokenKind::Keyword(Keyword::Like) => self.parse_like(left, true),
			TokenKind::Keyword(Keyword::Between) => self.parse_between(left, true),
			_ => Err(ParseError::UnexpectedToken {
				expected: "`IN`, `LIKE` or `BETWEEN`".to_string(),
				fragment: not.fragment,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		ast::{Expression, InfixOperator, parse::parse},
		token::tokenize,
	};

	fn filter_of(statement: &str) -> Expression {
		parse(tokenize(statement)).unwrap().filter
	}

	#[test]
	fn test_and_binds_tighter_than_or() {
		// a = 1 OR b = 2 AND c = 3 parses as a = 1 OR (b = 2 AND c = 3)
		let filter = filter_of("SELECT x FROM t WHERE a = 1 OR b = 2 AND c = 3");
		let or = filter.as_infix();
		assert_eq!(or.operator, InfixOperator::Or);
		assert_eq!(or.right.as_infix().operator, InfixOperator::And);
	}

	#[test]
	fn test_multiplication_binds_tighter_than_addition() {
		let filter = filter_of("SELECT x FROM t WHERE a + b * c = 1");
		let sum = filter.as_infix().left.as_infix();
		assert_eq!(sum.operator, InfixOperator::Add);
		assert_eq!(sum.right.as_infix().operator, InfixOperator::Multiply);
	}

	#[test]
	fn test_subtraction_left_associative() {
		// a - b - c parses as (a - b) - c
		let filter = filter_of("SELECT x FROM t WHERE a - b - c = 1");
		let outer = filter.as_infix().left.as_infix();
		assert_eq!(outer.operator, InfixOperator::Subtract);
		assert!(matches!(*outer.left, Expression::Infix(_)));
	}

	#[test]
	fn test_between() {
		let filter = filter_of("SELECT x FROM t WHERE a BETWEEN 1 AND 10 AND b = 2");
		let and = filter.as_infix();
		assert_eq!(and.operator, InfixOperator::And);
		assert!(matches!(*and.left, Expression::Between(_)));
	}

	#[test]
	fn test_not_between() {
		let filter = filter_of("SELECT x FROM t WHERE a NOT BETWEEN 1 AND 10");
		assert!(filter.as_between().negated);
	}

	#[test]
	fn test_in_tuple() {
		let filter = filter_of("SELECT x FROM t WHERE a IN (1, 2, 3)");
		let infix = filter.as_infix();
		assert_eq!(infix.operator, InfixOperator::In);
		assert_eq!(infix.right.as_tuple().nodes.len(), 3);
	}

	#[test]
	fn test_not_in() {
		let filter = filter_of("SELECT x FROM t WHERE a NOT IN (1, 2)");
		assert_eq!(filter.as_infix().operator, InfixOperator::NotIn);
	}

	#[test]
	fn test_not_like() {
		let filter = filter_of("SELECT x FROM t WHERE name NOT LIKE '%test%'");
		assert_eq!(filter.as_infix().operator, InfixOperator::NotLike);
	}

	#[test]
	fn test_is_null() {
		let filter = filter_of("SELECT x FROM t WHERE a IS NULL");
		assert!(!filter.as_is_null().negated);
	}

	#[test]
	fn test_is_not_null() {
		let filter = filter_of("SELECT x FROM t WHERE a IS NOT NULL");
		assert!(filter.as_is_null().negated);
	}

	#[test]
	fn test_not_equal_spellings() {
		for statement in ["SELECT x FROM t WHERE a <> 1", "SELECT x FROM t WHERE a != 1"] {
			assert_eq!(filter_of(statement).as_infix().operator, InfixOperator::NotEqual);
		}
	}
}
