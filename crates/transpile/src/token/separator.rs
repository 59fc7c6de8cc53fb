// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use super::{
	cursor::Cursor,
	token::{Token, TokenKind},
};

macro_rules! separator {
    (
        $( $value:ident => $tag:literal ),*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Separator {  $( $value ),* }

        impl Separator {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Separator::$value => $tag ),*
                }
            }
        }
    };
}

separator! {
	Comma     => ",",
	Semicolon => ";"
}

pub fn scan_separator(cursor: &mut Cursor) -> Option<Token> {
	let ch = cursor.peek()?;
	let separator = match ch {
		',' => Separator::Comma,
		';' => Separator::Semicolon,
		_ => return None,
	};

	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();
	cursor.consume();

	Some(Token {
		kind: TokenKind::Separator(separator),
		fragment: cursor.make_fragment(start_pos, start_line, start_column),
	})
}
