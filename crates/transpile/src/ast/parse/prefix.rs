// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		AstPrefix, Expression, PrefixOperator,
		parse::{Parser, Precedence},
	},
	error::ParseError,
	token::{Operator, TokenKind},
};

impl Parser {
	pub(crate) fn parse_prefix(&mut self) -> Result<Expression, ParseError> {
		let token = self.advance()?;
		let operator = match token.kind {
			TokenKind::Operator(Operator::Not) => PrefixOperator::Not,
			TokenKind::Operator(Operator::Minus) => PrefixOperator::Minus,
			TokenKind::Operator(Operator::Plus) => PrefixOperator::Plus,
			_ => {
				return Err(ParseError::UnexpectedToken {
					expected: "a prefix operator".to_string(),
					fragment: token.fragment,
				});
			}
		};

		// logical NOT binds looser than comparisons, so `NOT a = 1`
		// negates the whole comparison; sign prefixes bind tightest
		let node = match operator {
			PrefixOperator::Not => self.parse_node(Precedence::LogicNot)?,
			PrefixOperator::Minus | PrefixOperator::Plus => self.parse_node(Precedence::Prefix)?,
		};
		Ok(Expression::Prefix(AstPrefix {
			token,
			operator,
			node: Box::new(node),
		}))
	}
}
