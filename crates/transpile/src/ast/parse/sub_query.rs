// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		AstSubQuery, SubSelect,
		parse::{Parser, Precedence},
	},
	error::ParseError,
	token::{Keyword, Token, TokenKind},
};

impl Parser {
	/// Parse a nested SELECT permissively: FROM and WHERE are optional so
	/// that a structurally complete sub-select always reaches validation,
	/// which rejects it with a span pointing at the inner SELECT keyword.
	pub(crate) fn parse_sub_select(&mut self, select: Token) -> Result<AstSubQuery, ParseError> {
		let items = self.parse_select_items()?;

		let from = if !self.is_eof() && self.current()?.is_keyword(Keyword::From) {
			Some(self.parse_from_clause()?)
		} else {
			None
		};

		let filter = if self.consume_if(TokenKind::Keyword(Keyword::Where)).is_some() {
			Some(self.parse_node(Precedence::None)?)
		} else {
			None
		};

		let order_by = self.parse_order_by_clause()?;

		Ok(AstSubQuery {
			token: select.clone(),
			statement: Box::new(SubSelect {
				token: select,
				items,
				from,
				filter,
				order_by,
			}),
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		ast::{Expression, parse::parse},
		token::tokenize,
	};

	fn filter_of(statement: &str) -> Expression {
		parse(tokenize(statement)).unwrap().filter
	}

	#[test]
	fn test_sub_select_without_where_still_parses() {
		// the dialect rejects sub-selects during validation, not here
		let filter = filter_of("SELECT a FROM t WHERE a IN (SELECT b FROM u)");
		let sub_query = filter.as_infix().right.as_sub_query();
		assert!(sub_query.statement.from.is_some());
		assert!(sub_query.statement.filter.is_none());
	}

	#[test]
	fn test_sub_select_with_where() {
		let filter = filter_of("SELECT a FROM t WHERE a IN (SELECT b FROM u WHERE b > 0)");
		let sub_query = filter.as_infix().right.as_sub_query();
		assert!(sub_query.statement.filter.is_some());
	}

	#[test]
	fn test_nested_sub_select() {
		let filter = filter_of("SELECT a FROM t WHERE a IN (SELECT b FROM u WHERE b IN (SELECT c FROM v))");
		assert!(filter.as_infix().right.is_sub_query());
	}
}
