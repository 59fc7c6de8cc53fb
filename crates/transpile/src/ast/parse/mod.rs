// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

mod from;
mod infix;
mod order_by;
mod prefix;
mod primary;
mod select;
mod sub_query;

use crate::{
	ast::{Expression, SelectStatement},
	error::ParseError,
	token::{Keyword, Literal, Operator, Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
	None,
	LogicOr,
	LogicAnd,
	LogicNot,
	Comparison,
	Term,
	Factor,
	Prefix,
	Primary,
}

const fn get_precedence_for_operator(op: Operator) -> Precedence {
	use Operator::*;
	use Precedence::*;

	match op {
		Or => LogicOr,
		And => LogicAnd,
		Equal | BangEqual | LeftAngle | LeftAngleEqual | RightAngle | RightAngleEqual | LeftAngleRightAngle => {
			Comparison
		}
		// NOT in infix position introduces NOT IN / NOT LIKE / NOT BETWEEN
		Not => Comparison,
		Plus | Minus => Term,
		Asterisk | Slash | Percent => Factor,
		_ => None,
	}
}

/// Parse a token stream into a single SELECT statement. Exactly one
/// statement is accepted; anything after an optional trailing semicolon
/// is a `TrailingInput` error.
pub fn parse(tokens: Vec<Token>) -> Result<SelectStatement, ParseError> {
	let mut parser = Parser::new(tokens);
	parser.reject_invalid_tokens()?;

	if let Some(token) = parser.tokens.first() {
		if token.is_keyword(Keyword::With) {
			return Err(ParseError::UnsupportedConstruct {
				construct: "CTE",
				fragment: token.fragment.clone(),
			});
		}
	}

	let statement = parser.parse_select_statement()?;

	let _ = parser.consume_if(TokenKind::Separator(crate::token::Separator::Semicolon));
	if !parser.is_eof() {
		return Err(ParseError::TrailingInput {
			fragment: parser.current()?.fragment.clone(),
		});
	}

	Ok(statement)
}

pub(crate) struct Parser {
	tokens: Vec<Token>,
	position: usize,
}

impl Parser {
	fn new(tokens: Vec<Token>) -> Self {
		Self {
			tokens,
			position: 0,
		}
	}

	/// The tokenizer is total; surface its `Invalid` and unterminated
	/// string tokens here so errors appear in source order.
	fn reject_invalid_tokens(&self) -> Result<(), ParseError> {
		for token in &self.tokens {
			match token.kind {
				TokenKind::Invalid => {
					return Err(ParseError::InvalidCharacter {
						fragment: token.fragment.clone(),
					});
				}
				TokenKind::Literal(Literal::UnterminatedText) => {
					return Err(ParseError::UnterminatedString {
						fragment: token.fragment.clone(),
					});
				}
				_ => {}
			}
		}
		Ok(())
	}

	pub(crate) fn parse_node(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
		let mut left = self.parse_primary()?;

		while !self.is_eof() {
			if precedence >= self.current_precedence() {
				break;
			}

			left = match self.current()?.kind {
				TokenKind::Keyword(Keyword::Between) => self.parse_between(left, false)?,
				TokenKind::Keyword(Keyword::In) => self.parse_in(left, false)?,
				TokenKind::Keyword(Keyword::Is) => self.parse_is(left)?,
				TokenKind::Keyword(Keyword::Like) => self.parse_like(left, false)?,
				TokenKind::Operator(Operator::Not) => self.parse_negated(left)?,
				_ => self.parse_infix(left)?,
			};
		}
		Ok(left)
	}

	fn current_precedence(&self) -> Precedence {
		let Some(token) = self.tokens.get(self.position) else {
			return Precedence::None;
		};
		match token.kind {
			TokenKind::Operator(op) => get_precedence_for_operator(op),
			TokenKind::Keyword(Keyword::Between)
			| TokenKind::Keyword(Keyword::In)
			| TokenKind::Keyword(Keyword::Like)
			| TokenKind::Keyword(Keyword::Is) => Precedence::Comparison,
			_ => Precedence::None,
		}
	}

	pub(crate) fn is_eof(&self) -> bool {
		self.position >= self.tokens.len()
	}

	pub(crate) fn advance(&mut self) -> Result<Token, ParseError> {
		if self.position >= self.tokens.len() {
			return Err(ParseError::UnexpectedEof);
		}
		let token = self.tokens[self.position].clone();
		self.position += 1;
		Ok(token)
	}

	pub(crate) fn current(&self) -> Result<&Token, ParseError> {
		self.tokens.get(self.position).ok_or(ParseError::UnexpectedEof)
	}

	pub(crate) fn consume_if(&mut self, expected: TokenKind) -> Option<Token> {
		if self.tokens.get(self.position).map(|token| token.kind) != Some(expected) {
			return None;
		}
		let token = self.tokens[self.position].clone();
		self.position += 1;
		Some(token)
	}

	pub(crate) fn consume_keyword(&mut self, expected: Keyword) -> Result<Token, ParseError> {
		let current = self.current()?;
		if !current.is_keyword(expected) {
			return Err(ParseError::UnexpectedToken {
				expected: format!("`{}`", expected.as_str()),
				fragment: current.fragment.clone(),
			});
		}
		self.advance()
	}

	pub(crate) fn consume_operator(&mut self, expected: Operator) -> Result<Token, ParseError> {
		let current = self.current()?;
		if !current.is_operator(expected) {
			return Err(ParseError::UnexpectedToken {
				expected: format!("`{}`", expected.as_str()),
				fragment: current.fragment.clone(),
			});
		}
		self.advance()
	}

	pub(crate) fn consume_identifier(&mut self) -> Result<Token, ParseError> {
		let current = self.current()?;
		if !current.is_identifier() {
			return Err(ParseError::ExpectedIdentifier {
				fragment: current.fragment.clone(),
			});
		}
		self.advance()
	}
}
