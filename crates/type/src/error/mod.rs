// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// The single error envelope of the workspace. Every failure is a
/// [`Diagnostic`]; typed error enums convert into it via [`IntoDiagnostic`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

/// Conversion of typed errors into renderable diagnostics.
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl<T: IntoDiagnostic> From<T> for Error {
	fn from(value: T) -> Self {
		Error(value.into_diagnostic())
	}
}

/// Shorthand for `Err(Error(diagnostic))`.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::Error($diagnostic))
	};
}

/// Shorthand for `return Err(Error(diagnostic))`.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::Error($diagnostic))
	};
}
