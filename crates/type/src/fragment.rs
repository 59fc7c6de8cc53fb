// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use serde::{Deserialize, Serialize};

/// 1-based line number within the source statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementLine(pub u32);

/// 1-based column number within the source statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementColumn(pub u32);

/// A located slice of source text. Fragments are immutable once produced
/// and own their text, so tokens and AST nodes never borrow from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
	/// No source location, used by diagnostics that concern the whole
	/// statement rather than a span of it.
	None,
	/// A span of the user's statement.
	Statement {
		text: String,
		offset: u32,
		line: StatementLine,
		column: StatementColumn,
	},
}

impl Fragment {
	pub fn statement(text: impl Into<String>, offset: u32, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			offset,
			line: StatementLine(line),
			column: StatementColumn(column),
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			} => text,
		}
	}

	/// Byte offset of the fragment start, 0 for unlocated fragments.
	pub fn offset(&self) -> u32 {
		match self {
			Fragment::Statement {
				offset,
				..
			} => *offset,
			_ => 0,
		}
	}

	/// Byte offset one past the fragment end.
	pub fn end_offset(&self) -> u32 {
		self.offset() + self.text().len() as u32
	}

	pub fn line(&self) -> StatementLine {
		match self {
			Fragment::Statement {
				line,
				..
			} => *line,
			_ => StatementLine(0),
		}
	}

	pub fn column(&self) -> StatementColumn {
		match self {
			Fragment::Statement {
				column,
				..
			} => *column,
			_ => StatementColumn(0),
		}
	}

	pub fn is_none(&self) -> bool {
		matches!(self, Fragment::None)
	}
}

impl std::fmt::Display for Fragment {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_statement_fragment() {
		let fragment = Fragment::statement("SELECT", 0, 1, 1);
		assert_eq!(fragment.text(), "SELECT");
		assert_eq!(fragment.offset(), 0);
		assert_eq!(fragment.end_offset(), 6);
		assert_eq!(fragment.line().0, 1);
		assert_eq!(fragment.column().0, 1);
	}

	#[test]
	fn test_none_fragment() {
		let fragment = Fragment::None;
		assert_eq!(fragment.text(), "");
		assert_eq!(fragment.line().0, 0);
		assert!(fragment.is_none());
	}

}
