// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use nsql_type::Fragment;

use super::{keyword::Keyword, operator::Operator, separator::Separator};

/// A single located token. Immutable once produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub fragment: Fragment,
}

impl Token {
	pub fn is_identifier(&self) -> bool {
		self.kind == TokenKind::Identifier
	}

	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.kind == TokenKind::Keyword(keyword)
	}

	pub fn is_operator(&self, operator: Operator) -> bool {
		self.kind == TokenKind::Operator(operator)
	}

	pub fn is_separator(&self, separator: Separator) -> bool {
		self.kind == TokenKind::Separator(separator)
	}

	pub fn is_literal(&self, literal: Literal) -> bool {
		self.kind == TokenKind::Literal(literal)
	}

	pub fn value(&self) -> &str {
		self.fragment.text()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	Keyword(Keyword),
	Identifier,
	Literal(Literal),
	Operator(Operator),
	Separator(Separator),
	/// A character the tokenizer could not recognize. The tokenizer is
	/// total; the parser turns this into a located syntax error.
	Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal {
	Number,
	Text,
	/// A string literal missing its closing quote, spanning to end of
	/// input. Surfaced by the parser as a diagnostic.
	UnterminatedText,
	Null,
	True,
	False,
}
