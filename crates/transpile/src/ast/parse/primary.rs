// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		AstCall, AstColumn, AstLiteral, AstParen, AstTuple, Expression,
		parse::{Parser, Precedence},
	},
	error::ParseError,
	token::{Keyword, Operator, Separator, TokenKind},
};

impl Parser {
	pub(crate) fn parse_primary(&mut self) -> Result<Expression, ParseError> {
		let current = self.current()?;
		match current.kind {
			TokenKind::Identifier => self.parse_column_or_call(),
			TokenKind::Literal(_) => Ok(Expression::Literal(AstLiteral(self.advance()?))),
			TokenKind::Operator(Operator::Not)
			| TokenKind::Operator(Operator::Minus)
			| TokenKind::Operator(Operator::Plus) => self.parse_prefix(),
			TokenKind::Operator(Operator::OpenParen) => self.parse_paren(),
			_ => Err(ParseError::UnexpectedToken {
				expected: "an expression".to_string(),
				fragment: current.fragment.clone(),
			}),
		}
	}

	/// `name`, `table.name` or `name(args)`.
	fn parse_column_or_call(&mut self) -> Result<Expression, ParseError> {
		let name = self.advance()?;

		if self.consume_if(TokenKind::Operator(Operator::Dot)).is_some() {
			let column = self.consume_identifier()?;
			return Ok(Expression::Column(AstColumn {
				table: Some(name),
				name: column,
			}));
		}

		if self.consume_if(TokenKind::Operator(Operator::OpenParen)).is_some() {
			let mut arguments = Vec::new();
			if !self.current()?.is_operator(Operator::CloseParen) {
				loop {
					arguments.push(self.parse_node(Precedence::None)?);
					if self.consume_if(TokenKind::Separator(Separator::Comma)).is_none() {
						break;
					}
				}
			}
			self.consume_operator(Operator::CloseParen)?;
			return Ok(Expression::Call(AstCall {
				token: name,
				arguments,
			}));
		}

		Ok(Expression::Column(AstColumn {
			table: None,
			name,
		}))
	}

	/// A parenthesized expression, a tuple, or a sub-select.
	fn parse_paren(&mut self) -> Result<Expression, ParseError> {
		let token = self.advance()?;

		if self.current()?.is_keyword(Keyword::Select) {
			let select = self.consume_keyword(Keyword::Select)?;
			let statement = self.parse_sub_select(select)?;
			self.consume_operator(Operator::CloseParen)?;
			return Ok(Expression::SubQuery(statement));
		}

		let first = self.parse_node(Precedence::None)?;

		if self.current()?.is_separator(Separator::Comma) {
			let mut nodes = vec![first];
			while self.consume_if(TokenKind::Separator(Separator::Comma)).is_some() {
				nodes.push(self.parse_node(Precedence::None)?);
			}
			self.consume_operator(Operator::CloseParen)?;
			return Ok(Expression::Tuple(AstTuple {
				token,
				nodes,
			}));
		}

		self.consume_operator(Operator::CloseParen)?;
		Ok(Expression::Paren(AstParen {
			token,
			node: Box::new(first),
		}))
	}
}
