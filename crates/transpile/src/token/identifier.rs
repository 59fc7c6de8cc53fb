// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use super::{
	cursor::Cursor,
	token::{Token, TokenKind},
};

pub fn is_identifier_start(ch: char) -> bool {
	ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_identifier_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn scan_identifier(cursor: &mut Cursor) -> Option<Token> {
	let ch = cursor.peek()?;
	if !is_identifier_start(ch) {
		return None;
	}

	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();

	cursor.consume_while(is_identifier_char);

	Some(Token {
		kind: TokenKind::Identifier,
		fragment: cursor.make_fragment(start_pos, start_line, start_column),
	})
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::token::tokenize;

	#[test]
	fn test_simple_identifier() {
		let tokens = tokenize("resource_id");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Identifier);
		assert_eq!(tokens[0].fragment.text(), "resource_id");
	}

	#[test]
	fn test_leading_underscore() {
		let tokens = tokenize("_internal");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Identifier);
	}

	#[test]
	fn test_digits_inside() {
		let tokens = tokenize("col2");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Identifier);
		assert_eq!(tokens[0].fragment.text(), "col2");
	}
}
