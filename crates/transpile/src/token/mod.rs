// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

mod cursor;
mod identifier;
mod keyword;
mod literal;
mod operator;
mod separator;
mod token;

pub use keyword::Keyword;
pub use operator::Operator;
pub use separator::Separator;
pub use token::{Literal, Token, TokenKind};

use cursor::Cursor;
use identifier::{is_identifier_start, scan_identifier};
use keyword::scan_keyword;
use literal::scan_literal;
use operator::scan_operator;
use separator::scan_separator;

/// Tokenize a statement. This is a total function: characters the scanners
/// cannot place become `TokenKind::Invalid` tokens, and unterminated string
/// literals become `Literal::UnterminatedText`. Both carry exact spans and
/// are rejected by the parser with a located diagnostic.
pub fn tokenize(input: &str) -> Vec<Token> {
	let mut cursor = Cursor::new(input);
	let mut tokens = Vec::new();

	loop {
		cursor.skip_whitespace();
		let Some(ch) = cursor.peek() else {
			break;
		};

		let token = if is_identifier_start(ch) {
			scan_keyword(&mut cursor)
				.or_else(|| scan_operator(&mut cursor))
				.or_else(|| scan_literal(&mut cursor))
				.or_else(|| scan_identifier(&mut cursor))
		} else if ch.is_ascii_digit() || ch == '\'' {
			scan_literal(&mut cursor)
		} else {
			scan_separator(&mut cursor).or_else(|| scan_operator(&mut cursor))
		};

		match token {
			Some(token) => tokens.push(token),
			None => {
				// unknown character, keep going so later errors still surface
				let start_pos = cursor.pos();
				let start_line = cursor.line();
				let start_column = cursor.column();
				cursor.consume();
				tokens.push(Token {
					kind: TokenKind::Invalid,
					fragment: cursor.make_fragment(start_pos, start_line, start_column),
				});
			}
		}
	}

	tokens
}
