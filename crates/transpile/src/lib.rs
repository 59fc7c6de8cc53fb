// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

//! SQL to NSQL transpilation.
//!
//! The pipeline is strictly linear: text → tokens → AST → validated AST
//! → rendered text. Everything is pure and synchronous; the library
//! never touches credentials, the network, or any output stream.
//!
//! ```
//! let nsql = nsql_transpile::transpile("SELECT p.code FROM projects p WHERE p.active = 1").unwrap();
//! assert!(nsql.ends_with("AND @FILTER@"));
//! ```

pub mod ast;
pub mod error;
pub mod render;
pub mod token;
pub mod validate;

pub use ast::{SelectStatement, parse, parse_str};
pub use error::{ParseError, TranspileError, ValidationError};
pub use render::{RenderRules, render};
pub use token::tokenize;
pub use validate::validate;

use nsql_type::{IntoDiagnostic, err, return_error};
use tracing::debug;

/// Transpile a single SQL SELECT statement to the NSQL notation.
pub fn transpile(source: &str) -> Result<String, TranspileError> {
	transpile_with(source, &RenderRules::clarity())
}

/// Transpile to NSQL, reporting failures through the workspace error
/// envelope with the offending statement attached. When validation fails,
/// the first violation leads and the rest chain through `cause`.
pub fn transpile_diagnostic(source: &str) -> nsql_type::Result<String> {
	if source.trim().is_empty() {
		return_error!(nsql_type::diagnostic::ast::empty_statement_error());
	}
	match transpile(source) {
		Ok(rendered) => Ok(rendered),
		Err(error) => err!(error.into_diagnostic().with_statement(source)),
	}
}

/// Transpile with an explicit rendering-rule table, e.g.
/// [`RenderRules::canonical`] for plain normalized SQL.
pub fn transpile_with(source: &str, rules: &RenderRules) -> Result<String, TranspileError> {
	if source.trim().is_empty() {
		return Err(TranspileError::Empty);
	}

	let tokens = token::tokenize(source);
	debug!(tokens = tokens.len(), "tokenized statement");

	let statement = ast::parse(tokens)?;
	debug!("parsed statement");

	let statement = validate::validate(statement).map_err(TranspileError::Validation)?;
	debug!("validated statement");

	let rendered = render::render(&statement, rules);
	debug!(bytes = rendered.len(), "rendered statement");

	Ok(rendered)
}
