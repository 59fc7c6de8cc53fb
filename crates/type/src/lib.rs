// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

pub mod error;
pub mod fragment;

pub use error::{Error, IntoDiagnostic, diagnostic, diagnostic::Diagnostic};
pub use fragment::{Fragment, StatementColumn, StatementLine};

pub type Result<T> = std::result::Result<T, Error>;
