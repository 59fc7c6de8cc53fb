// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use super::{
	cursor::Cursor,
	identifier::{is_identifier_char, is_identifier_start},
	token::{Literal, Token, TokenKind},
};

/// Scan number, string and word literals (NULL, TRUE, FALSE).
pub fn scan_literal(cursor: &mut Cursor) -> Option<Token> {
	let ch = cursor.peek()?;

	if ch == '\'' {
		return Some(scan_text(cursor));
	}

	if ch.is_ascii_digit() {
		return Some(scan_number(cursor));
	}

	if is_identifier_start(ch) {
		return scan_word(cursor);
	}

	None
}

/// A single-quoted string. `''` inside the literal is an escaped quote.
/// The fragment keeps the surrounding quotes so the emitter can render
/// the literal verbatim. A missing closing quote yields an
/// `UnterminatedText` literal spanning to end of input.
fn scan_text(cursor: &mut Cursor) -> Token {
	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();

	cursor.consume(); // opening quote

	loop {
		match cursor.peek() {
			None => {
				return Token {
					kind: TokenKind::Literal(Literal::UnterminatedText),
					fragment: cursor.make_fragment(start_pos, start_line, start_column),
				};
			}
			Some('\'') => {
				cursor.consume();
				if cursor.peek() == Some('\'') {
					// escaped quote, keep going
					cursor.consume();
					continue;
				}
				return Token {
					kind: TokenKind::Literal(Literal::Text),
					fragment: cursor.make_fragment(start_pos, start_line, start_column),
				};
			}
			Some(_) => {
				cursor.consume();
			}
		}
	}
}

/// An integer with an optional fractional part. A trailing dot without
/// digits is not part of the number, so `t.1` style input never eats
/// the dot.
fn scan_number(cursor: &mut Cursor) -> Token {
	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();

	cursor.consume_while(|ch| ch.is_ascii_digit());

	if cursor.peek() == Some('.') && cursor.peek_ahead(1).is_some_and(|ch| ch.is_ascii_digit()) {
		cursor.consume();
		cursor.consume_while(|ch| ch.is_ascii_digit());
	}

	Token {
		kind: TokenKind::Literal(Literal::Number),
		fragment: cursor.make_fragment(start_pos, start_line, start_column),
	}
}

fn scan_word(cursor: &mut Cursor) -> Option<Token> {
	let state = cursor.save_state();
	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();

	cursor.consume_while(is_identifier_char);

	let fragment = cursor.make_fragment(start_pos, start_line, start_column);
	let literal = match fragment.text().to_ascii_uppercase().as_str() {
		"NULL" => Literal::Null,
		"TRUE" => Literal::True,
		"FALSE" => Literal::False,
		_ => {
			cursor.restore_state(state);
			return None;
		}
	};

	Some(Token {
		kind: TokenKind::Literal(literal),
		fragment,
	})
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::token::tokenize;

	#[test]
	fn test_integer() {
		let tokens = tokenize("42");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Literal(Literal::Number));
		assert_eq!(tokens[0].fragment.text(), "42");
	}

	#[test]
	fn test_decimal() {
		let tokens = tokenize("3.25");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Literal(Literal::Number));
		assert_eq!(tokens[0].fragment.text(), "3.25");
	}

	#[test]
	fn test_number_then_dot() {
		// the dot belongs to the operator stream, not the number
		let tokens = tokenize("1.");
		assert_eq!(tokens.len(), 2);
		assert_eq!(tokens[0].fragment.text(), "1");
		assert!(tokens[1].is_operator(crate::token::Operator::Dot));
	}

	#[test]
	fn test_text() {
		let tokens = tokenize("'hello'");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Literal(Literal::Text));
		assert_eq!(tokens[0].fragment.text(), "'hello'");
	}

	#[test]
	fn test_text_escaped_quote() {
		let tokens = tokenize("'it''s'");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Literal(Literal::Text));
		assert_eq!(tokens[0].fragment.text(), "'it''s'");
	}

	#[test]
	fn test_unterminated_text() {
		let tokens = tokenize("'never closed");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Literal(Literal::UnterminatedText));
		assert_eq!(tokens[0].fragment.text(), "'never closed");
	}

	#[test]
	fn test_word_literals() {
		let tokens = tokenize("NULL true False");
		assert_eq!(tokens.len(), 3);
		assert_eq!(tokens[0].kind, TokenKind::Literal(Literal::Null));
		assert_eq!(tokens[1].kind, TokenKind::Literal(Literal::True));
		assert_eq!(tokens[2].kind, TokenKind::Literal(Literal::False));
	}

	#[test]
	fn test_nullable_is_identifier() {
		let tokens = tokenize("nullable");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Identifier);
	}
}
