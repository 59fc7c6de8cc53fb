// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		SelectItem, SelectStatement,
		parse::{Parser, Precedence},
	},
	error::ParseError,
	token::{Keyword, Separator, TokenKind},
};

impl Parser {
	pub(crate) fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
		let token = self.consume_keyword(Keyword::Select)?;
		let items = self.parse_select_items()?;
		let from = self.parse_from_clause()?;

		if self.consume_if(TokenKind::Keyword(Keyword::Where)).is_none() {
			// a statement that simply stops, or jumps straight to
			// ORDER BY, is missing its mandatory filter
			if self.is_eof()
				|| self.current()?.is_keyword(Keyword::Order)
				|| self.current()?.is_separator(Separator::Semicolon)
			{
				return Err(ParseError::MissingWhereClause {
					fragment: from.token.fragment.clone(),
				});
			}
			return Err(ParseError::UnexpectedToken {
				expected: "`WHERE`".to_string(),
				fragment: self.current()?.fragment.clone(),
			});
		}
		let filter = self.parse_node(Precedence::None)?;

		let order_by = self.parse_order_by_clause()?;

		Ok(SelectStatement {
			token,
			items,
			from,
			filter,
			order_by,
		})
	}

	pub(crate) fn parse_select_items(&mut self) -> Result<Vec<SelectItem>, ParseError> {
		let mut items = Vec::with_capacity(4);
		loop {
			let expression = self.parse_node(Precedence::None)?;

			let alias = if self.consume_if(TokenKind::Keyword(Keyword::As)).is_some() {
				Some(self.consume_identifier()?)
			} else if !self.is_eof() && self.current()?.is_identifier() {
				// implicit alias: SELECT a name FROM ...
				Some(self.advance()?)
			} else {
				None
			};

			items.push(SelectItem {
				expression,
				alias,
			});

			if self.consume_if(TokenKind::Separator(Separator::Comma)).is_none() {
				break;
			}
		}
		Ok(items)
	}
}

#[cfg(test)]
mod tests {
	use crate::{ast::parse::parse, error::ParseError, token::tokenize};

	#[test]
	fn test_select_items_plain_columns() {
		let statement = parse(tokenize("SELECT a, t.b FROM t WHERE a = 1")).unwrap();
		assert_eq!(statement.items.len(), 2);

		let column = statement.items[0].expression.as_column();
		assert!(column.table.is_none());
		assert_eq!(column.name.value(), "a");

		let column = statement.items[1].expression.as_column();
		assert_eq!(column.table.as_ref().unwrap().value(), "t");
		assert_eq!(column.name.value(), "b");
	}

	#[test]
	fn test_select_item_explicit_alias() {
		let statement = parse(tokenize("SELECT a AS first FROM t WHERE a = 1")).unwrap();
		assert_eq!(statement.items[0].alias.as_ref().unwrap().value(), "first");
	}

	#[test]
	fn test_select_item_implicit_alias() {
		let statement = parse(tokenize("SELECT a first FROM t WHERE a = 1")).unwrap();
		assert_eq!(statement.items[0].alias.as_ref().unwrap().value(), "first");
	}

	#[test]
	fn test_missing_where_at_end() {
		let error = parse(tokenize("SELECT a FROM t")).unwrap_err();
		let ParseError::MissingWhereClause { fragment } = error else {
			panic!("expected MissingWhereClause, got {error:?}");
		};
		assert_eq!(fragment.text(), "FROM");
	}

	#[test]
	fn test_missing_where_before_order_by() {
		let error = parse(tokenize("SELECT a FROM t ORDER BY a")).unwrap_err();
		assert!(matches!(error, ParseError::MissingWhereClause { .. }));
	}

	#[test]
	fn test_alias_must_be_identifier() {
		let error = parse(tokenize("SELECT a AS 1 FROM t WHERE a = 1")).unwrap_err();
		assert!(matches!(error, ParseError::ExpectedIdentifier { .. }));
	}
}
