// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

pub use crate::ast::ast::*;
mod ast;
pub(crate) mod parse;
pub use parse::parse;

use crate::{error::ParseError, token::tokenize};

pub fn parse_str(str: &str) -> Result<SelectStatement, ParseError> {
	let tokens = tokenize(str);
	parse(tokens)
}
