// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use crate::{
	ast::{
		OrderByClause, OrderDirection, OrderKey,
		parse::{Parser, Precedence},
	},
	error::ParseError,
	token::{Keyword, Separator, TokenKind},
};

impl Parser {
	pub(crate) fn parse_order_by_clause(&mut self) -> Result<Option<OrderByClause>, ParseError> {
		let Some(token) = self.consume_if(TokenKind::Keyword(Keyword::Order)) else {
			return Ok(None);
		};
		self.consume_keyword(Keyword::By)?;

		let mut keys = Vec::with_capacity(2);
		loop {
			let expression = self.parse_node(Precedence::None)?;

			let direction = if self.consume_if(TokenKind::Keyword(Keyword::Asc)).is_some() {
				Some(OrderDirection::Asc)
			} else if self.consume_if(TokenKind::Keyword(Keyword::Desc)).is_some() {
				Some(OrderDirection::Desc)
			} else {
				None
			};

			keys.push(OrderKey {
				expression,
				direction,
			});

			if self.consume_if(TokenKind::Separator(Separator::Comma)).is_none() {
				break;
			}
		}

		Ok(Some(OrderByClause {
			token,
			keys,
		}))
	}
}
