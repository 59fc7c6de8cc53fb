// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		FromClause, JoinClause, JoinKind, TableRef,
		parse::{Parser, Precedence},
	},
	error::ParseError,
	token::{Keyword, Separator, TokenKind},
};

impl Parser {
	pub(crate) fn parse_from_clause(&mut self) -> Result<FromClause, ParseError> {
		let token = self.consume_keyword(Keyword::From)?;

		let mut tables = vec![self.parse_table_ref()?];
		while self.consume_if(TokenKind::Separator(Separator::Comma)).is_some() {
			tables.push(self.parse_table_ref()?);
		}

		let mut joins = Vec::new();
		while let Some(join) = self.parse_join_clause()? {
			joins.push(join);
		}

		Ok(FromClause {
			token,
			tables,
			joins,
		})
	}

	fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
		let name = self.consume_identifier()?;

		let alias = if self.consume_if(TokenKind::Keyword(Keyword::As)).is_some() {
			Some(self.consume_identifier()?)
		} else if !self.is_eof() && self.current()?.is_identifier() {
			Some(self.advance()?)
		} else {
			None
		};

		Ok(TableRef {
			name,
			alias,
		})
	}

	/// `[INNER | LEFT [OUTER] | RIGHT [OUTER] | FULL [OUTER]] JOIN table ON condition`.
	/// A bare JOIN is an inner join.
	fn parse_join_clause(&mut self) -> Result<Option<JoinClause>, ParseError> {
		let Some(current) = self.tokens.get(self.position) else {
			return Ok(None);
		};

		let (token, kind) = match current.kind {
			TokenKind::Keyword(Keyword::Join) => (self.advance()?, JoinKind::Inner),
			TokenKind::Keyword(Keyword::Inner) => {
				let token = self.advance()?;
				self.consume_keyword(Keyword::Join)?;
				(token, JoinKind::Inner)
			}
			TokenKind::Keyword(Keyword::Left) => {
				let token = self.advance()?;
				let _ = self.consume_if(TokenKind::Keyword(Keyword::Outer));
				self.consume_keyword(Keyword::Join)?;
				(token, JoinKind::Left)
			}
			TokenKind::Keyword(Keyword::Right) => {
				let token = self.advance()?;
				let _ = self.consume_if(TokenKind::Keyword(Keyword::Outer));
				self.consume_keyword(Keyword::Join)?;
				(token, JoinKind::Right)
			}
			TokenKind::Keyword(Keyword::Full) => {
				let token = self.advance()?;
				let _ = self.consume_if(TokenKind::Keyword(Keyword::Outer));
				self.consume_keyword(Keyword::Join)?;
				(token, JoinKind::Full)
			}
			_ => return Ok(None),
		};

		let table = self.parse_table_ref()?;
		self.consume_keyword(Keyword::On)?;
		let condition = self.parse_node(Precedence::None)?;

		Ok(Some(JoinClause {
			token,
			kind,
			table,
			condition,
		}))
	}
}
