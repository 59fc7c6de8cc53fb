// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

pub mod ast;
pub mod dialect;

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

/// A renderable, structured description of a failure. Carries everything a
/// caller needs to print a line/column annotated message; the library never
/// writes to any stream itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Stable machine-readable code, e.g. `AST_005` or `DIALECT_001`.
	pub code: String,
	/// The full statement the diagnostic refers to, when known.
	pub statement: Option<String>,
	pub message: String,
	/// The offending span. `Fragment::None` for statement-wide failures.
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
		self.statement = Some(statement.into());
		self
	}
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "error[{}]: {}", self.code, self.message)?;
		if !self.fragment.is_none() && self.fragment.line().0 > 0 {
			write!(f, " at line {}, column {}", self.fragment.line().0, self.fragment.column().0)?;
		}
		if let Some(label) = &self.label {
			write!(f, "\n  {}", label)?;
		}
		if let Some(help) = &self.help {
			write!(f, "\n  help: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\n  note: {}", note)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\ncaused by: {}", cause)?;
		}
		Ok(())
	}
}
