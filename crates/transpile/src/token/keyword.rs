// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use std::{collections::HashMap, sync::LazyLock};

use super::{
	cursor::Cursor,
	identifier::{is_identifier_char, is_identifier_start},
	token::{Token, TokenKind},
};

macro_rules! keyword {
    (
        $( $value:ident => $tag:literal ),*
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keyword {  $( $value ),* }

        impl Keyword {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Keyword::$value => $tag ),*
                }
            }
        }

        static KEYWORDS: LazyLock<HashMap<&'static str, Keyword>> = LazyLock::new(|| {
            let mut map = HashMap::new();
            $( map.insert($tag, Keyword::$value); )*
            map
        });
    };
}

keyword! {
	Select  => "SELECT",
	From    => "FROM",
	Where   => "WHERE",
	Order   => "ORDER",
	By      => "BY",
	Asc     => "ASC",
	Desc    => "DESC",
	Join    => "JOIN",
	Inner   => "INNER",
	Left    => "LEFT",
	Right   => "RIGHT",
	Full    => "FULL",
	Outer   => "OUTER",
	On      => "ON",
	As      => "AS",
	In      => "IN",
	Between => "BETWEEN",
	Like    => "LIKE",
	Is      => "IS",
	With    => "WITH"
}

/// Scan for a keyword token. Matching is case-insensitive; the fragment
/// preserves the source casing.
pub fn scan_keyword(cursor: &mut Cursor) -> Option<Token> {
	let ch = cursor.peek()?;
	if !is_identifier_start(ch) {
		return None;
	}

	let state = cursor.save_state();
	let start_pos = cursor.pos();
	let start_line = cursor.line();
	let start_column = cursor.column();

	cursor.consume_while(is_identifier_char);

	let fragment = cursor.make_fragment(start_pos, start_line, start_column);
	match KEYWORDS.get(fragment.text().to_ascii_uppercase().as_str()) {
		Some(keyword) => Some(Token {
			kind: TokenKind::Keyword(*keyword),
			fragment,
		}),
		None => {
			cursor.restore_state(state);
			None
		}
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;
	use crate::token::tokenize;

	fn check_keyword(keyword: Keyword, word: &str) {
		let tokens = tokenize(word);
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Keyword(keyword), "mismatch for word: {}", word);
		assert_eq!(tokens[0].fragment.text(), word);
	}

	macro_rules! generate_test {
        ($($name:ident => ($variant:ident, $word:literal)),*) => {
            $(
                #[test]
                fn $name() {
                    check_keyword(Keyword::$variant, $word);
                }
            )*
        };
    }

	generate_test! {
	    test_keyword_select => (Select, "SELECT"),
	    test_keyword_from => (From, "FROM"),
	    test_keyword_where => (Where, "WHERE"),
	    test_keyword_order => (Order, "ORDER"),
	    test_keyword_by => (By, "BY"),
	    test_keyword_asc => (Asc, "ASC"),
	    test_keyword_desc => (Desc, "DESC"),
	    test_keyword_join => (Join, "JOIN"),
	    test_keyword_inner => (Inner, "INNER"),
	    test_keyword_left => (Left, "LEFT"),
	    test_keyword_right => (Right, "RIGHT"),
	    test_keyword_full => (Full, "FULL"),
	    test_keyword_outer => (Outer, "OUTER"),
	    test_keyword_on => (On, "ON"),
	    test_keyword_as => (As, "AS"),
	    test_keyword_in => (In, "IN"),
	    test_keyword_between => (Between, "BETWEEN"),
	    test_keyword_like => (Like, "LIKE"),
	    test_keyword_is => (Is, "IS"),
	    test_keyword_with => (With, "WITH")
	}

	#[test]
	fn test_keyword_case_insensitive() {
		let tokens = tokenize("select Select SELECT");
		assert_eq!(tokens.len(), 3);
		for token in &tokens {
			assert_eq!(token.kind, TokenKind::Keyword(Keyword::Select));
		}
		assert_eq!(tokens[0].fragment.text(), "select");
		assert_eq!(tokens[1].fragment.text(), "Select");
	}

	#[test]
	fn test_keyword_prefix_is_identifier() {
		// SELECTED starts with SELECT but is a plain identifier
		let tokens = tokenize("SELECTED");
		assert_eq!(tokens.len(), 1);
		assert_eq!(tokens[0].kind, TokenKind::Identifier);
		assert_eq!(tokens[0].fragment.text(), "SELECTED");
	}
}
