// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use std::{collections::HashMap, sync::LazyLock};

use super::{
	cursor::Cursor,
	identifier::{is_identifier_char, is_identifier_start},
	token::{Token, TokenKind},
};

macro_rules! operator {
    (
        $( $value:ident => $tag:literal ),*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Operator {  $( $value ),* }

        impl Operator {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Operator::$value => $tag ),*
                }
            }
        }
    };
}

operator! {
	OpenParen       => "(",
	CloseParen      => ")",
	Dot             => ".",
	Plus            => "+",
	Minus           => "-",
	Asterisk        => "*",
	Slash           => "/",
	Percent         => "%",
	Equal           => "=",
	LeftAngle       => "<",
	LeftAngleEqual  => "<=",
	RightAngle      => ">",
	RightAngleEqual => ">=",
	LeftAngleRightAngle => "<>",
	BangEqual       => "!=",
	And             => "AND",
	Or              => "OR",
	Not             => "NOT"
}

static SINGLE_CHAR_OPERATORS: LazyLock<HashMap<char, Operator>> = LazyLock::new(|| {
	let mut map = HashMap::new();
	map.insert('(', Operator::OpenParen);
	map.insert(')', Operator::CloseParen);
	map.insert('.', Operator::Dot);
	map.insert('+', Operator::Plus);
	map.insert('-', Operator::Minus);
	map.insert('*', Operator::Asterisk);
	map.insert('/', Operator::Slash);
	map.insert('%', Operator::Percent);
	map.insert('=', Operator::Equal);
	map.insert('<', Operator::LeftAngle);
	map.insert('>', Operator::RightAngle);
	map
});

static WORD_OPERATORS: LazyLock<HashMap<&'static str, Operator>> = LazyLock::new(|| {
	let mut map = HashMap::new();
	map.insert("AND", Operator::And);
	map.insert("OR", Operator::Or);
	map.insert("NOT", Operator::Not);
	map
});

/// Scan for an operator token, longest match first.
pub fn scan_operator(cursor: &mut Cursor) -> Option<Token> {
	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();

	let ch = cursor.peek()?;

	let multi_char_op = match ch {
		'<' => {
			if cursor.peek_str(2) == "<=" {
				cursor.consume_str("<=");
				Some(Operator::LeftAngleEqual)
			} else if cursor.peek_str(2) == "<>" {
				cursor.consume_str("<>");
				Some(Operator::LeftAngleRightAngle)
			} else {
				None
			}
		}
		'>' => {
			if cursor.peek_str(2) == ">=" {
				cursor.consume_str(">=");
				Some(Operator::RightAngleEqual)
			} else {
				None
			}
		}
		'!' => {
			if cursor.peek_str(2) == "!=" {
				cursor.consume_str("!=");
				Some(Operator::BangEqual)
			} else {
				None
			}
		}
		_ => None,
	};

	if let Some(op) = multi_char_op {
		return Some(Token {
			kind: TokenKind::Operator(op),
			fragment: cursor.make_fragment(start_pos, start_line, start_column),
		});
	}

	if let Some(op) = SINGLE_CHAR_OPERATORS.get(&ch) {
		cursor.consume();
		return Some(Token {
			kind: TokenKind::Operator(*op),
			fragment: cursor.make_fragment(start_pos, start_line, start_column),
		});
	}

	if is_identifier_start(ch) {
		let state = cursor.save_state();
		cursor.consume_while(is_identifier_char);
		let fragment = cursor.make_fragment(start_pos, start_line, start_column);
		if let Some(op) = WORD_OPERATORS.get(fragment.text().to_ascii_uppercase().as_str()) {
			return Some(Token {
				kind: TokenKind::Operator(*op),
				fragment,
			});
		}
		cursor.restore_state(state);
	}

	None
}
