// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use nsql_type::Fragment;

/// Saved cursor position, used by scanners to back out of a failed match.
#[derive(Debug, Clone, Copy)]
pub struct CursorState {
	pos: usize,
	line: u32,
	column: u32,
}

/// Character cursor over the source statement. Tracks byte offset plus
/// 1-based line/column so every token fragment carries its exact span.
pub struct Cursor<'a> {
	input: &'a str,
	pos: usize,
	line: u32,
	column: u32,
}

impl<'a> Cursor<'a> {
	pub fn new(input: &'a str) -> Self {
		Self {
			input,
			pos: 0,
			line: 1,
			column: 1,
		}
	}

	pub fn is_eof(&self) -> bool {
		self.pos >= self.input.len()
	}

	pub fn pos(&self) -> usize {
		self.pos
	}

	pub fn line(&self) -> u32 {
		self.line
	}

	pub fn column(&self) -> u32 {
		self.column
	}

	pub fn peek(&self) -> Option<char> {
		self.input[self.pos..].chars().next()
	}

	pub fn peek_ahead(&self, n: usize) -> Option<char> {
		self.input[self.pos..].chars().nth(n)
	}

	/// The next `n` characters as a slice, shorter near end of input.
	pub fn peek_str(&self, n: usize) -> &'a str {
		let rest = &self.input[self.pos..];
		match rest.char_indices().nth(n) {
			Some((idx, _)) => &rest[..idx],
			None => rest,
		}
	}

	/// Consume one character, keeping line/column arithmetic correct.
	pub fn consume(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.pos += ch.len_utf8();
		if ch == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(ch)
	}

	pub fn consume_str(&mut self, expected: &str) -> bool {
		if !self.input[self.pos..].starts_with(expected) {
			return false;
		}
		for _ in expected.chars() {
			self.consume();
		}
		true
	}

	pub fn consume_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			self.consume();
		}
	}

	pub fn save_state(&self) -> CursorState {
		CursorState {
			pos: self.pos,
			line: self.line,
			column: self.column,
		}
	}

	pub fn restore_state(&mut self, state: CursorState) {
		self.pos = state.pos;
		self.line = state.line;
		self.column = state.column;
	}

	/// Fragment spanning from a saved start position to the current one.
	pub fn make_fragment(&self, start_pos: usize, start_line: u32, start_column: u32) -> Fragment {
		Fragment::statement(&self.input[start_pos..self.pos], start_pos as u32, start_line, start_column)
	}

	/// Skip whitespace plus `--` line comments and `/* */` block comments.
	/// Comment extents still advance line/column so following fragments
	/// stay correct.
	pub fn skip_whitespace(&mut self) {
		loop {
			self.consume_while(|ch| ch.is_whitespace());

			if self.peek_str(2) == "--" {
				self.consume_while(|ch| ch != '\n');
				continue;
			}

			if self.peek_str(2) == "/*" {
				self.consume_str("/*");
				while !self.is_eof() && self.peek_str(2) != "*/" {
					self.consume();
				}
				self.consume_str("*/");
				continue;
			}

			break;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_line_column_tracking() {
		let mut cursor = Cursor::new("a\nbc");
		assert_eq!((cursor.line(), cursor.column()), (1, 1));
		cursor.consume();
		cursor.consume();
		assert_eq!((cursor.line(), cursor.column()), (2, 1));
		cursor.consume();
		assert_eq!((cursor.line(), cursor.column()), (2, 2));
	}

	#[test]
	fn test_skip_line_comment() {
		let mut cursor = Cursor::new("-- note\nx");
		cursor.skip_whitespace();
		assert_eq!(cursor.peek(), Some('x'));
		assert_eq!(cursor.line(), 2);
		assert_eq!(cursor.column(), 1);
	}

	#[test]
	fn test_skip_block_comment() {
		let mut cursor = Cursor::new("/* a\nb */  x");
		cursor.skip_whitespace();
		assert_eq!(cursor.peek(), Some('x'));
		assert_eq!(cursor.line(), 2);
	}

	#[test]
	fn test_skip_unterminated_block_comment() {
		let mut cursor = Cursor::new("/* never closed");
		cursor.skip_whitespace();
		assert!(cursor.is_eof());
	}

	#[test]
	fn test_make_fragment() {
		let mut cursor = Cursor::new("SELECT a");
		let (pos, line, column) = (cursor.pos(), cursor.line(), cursor.column());
		for _ in 0..6 {
			cursor.consume();
		}
		let fragment = cursor.make_fragment(pos, line, column);
		assert_eq!(fragment.text(), "SELECT");
		assert_eq!(fragment.offset(), 0);
		assert_eq!(fragment.end_offset(), 6);
	}
}
