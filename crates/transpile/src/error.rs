// SPDX-License-Identifier: MIT
// Copyright (c) 2026 NSQL contributors

use nsql_type::{Fragment, IntoDiagnostic, diagnostic, diagnostic::Diagnostic};

static NO_FRAGMENT: Fragment = Fragment::None;

/// A syntax error. Always fatal; parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
	#[error("unexpected end of input")]
	UnexpectedEof,
	#[error("unexpected token: expected {expected}, got {}", .fragment.text())]
	UnexpectedToken { expected: String, fragment: Fragment },
	#[error("expected identifier, got {}", .fragment.text())]
	ExpectedIdentifier { fragment: Fragment },
	#[error("unsupported construct: {construct}")]
	UnsupportedConstruct { construct: &'static str, fragment: Fragment },
	#[error("trailing input after statement: {}", .fragment.text())]
	TrailingInput { fragment: Fragment },
	#[error("invalid character in statement: {}", .fragment.text())]
	InvalidCharacter { fragment: Fragment },
	#[error("unterminated string literal")]
	UnterminatedString { fragment: Fragment },
	#[error("statement has no WHERE clause")]
	MissingWhereClause { fragment: Fragment },
}

impl ParseError {
	/// The span the error points at, `Fragment::None` when the failure is
	/// not tied to a token.
	pub fn fragment(&self) -> &Fragment {
		match self {
			ParseError::UnexpectedEof => &NO_FRAGMENT,
			ParseError::UnexpectedToken { fragment, .. } => fragment,
			ParseError::ExpectedIdentifier { fragment } => fragment,
			ParseError::UnsupportedConstruct { fragment, .. } => fragment,
			ParseError::TrailingInput { fragment } => fragment,
			ParseError::InvalidCharacter { fragment } => fragment,
			ParseError::UnterminatedString { fragment } => fragment,
			ParseError::MissingWhereClause { fragment } => fragment,
		}
	}
}

impl IntoDiagnostic for ParseError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ParseError::UnexpectedEof => diagnostic::ast::unexpected_eof_error(),
			ParseError::UnexpectedToken { expected, fragment } => {
				diagnostic::ast::unexpected_token_error(&expected, fragment)
			}
			ParseError::ExpectedIdentifier { fragment } => diagnostic::ast::expected_identifier_error(fragment),
			ParseError::UnsupportedConstruct { construct, fragment } => {
				diagnostic::ast::unsupported_construct_error(construct, fragment)
			}
			ParseError::TrailingInput { fragment } => diagnostic::ast::trailing_input_error(fragment),
			ParseError::InvalidCharacter { fragment } => diagnostic::ast::invalid_character_error(fragment),
			ParseError::UnterminatedString { fragment } => diagnostic::ast::unterminated_string_error(fragment),
			ParseError::MissingWhereClause { fragment } => diagnostic::ast::missing_where_clause_error(fragment),
		}
	}
}

/// A dialect violation. Never fatal on its own; validation walks the whole
/// statement and reports every violation it finds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
	#[error("function calls and subqueries are not allowed in the select list")]
	FunctionOrSubqueryInSelect { fragment: Fragment },
	#[error("subqueries are not allowed")]
	SubqueryNotAllowed { fragment: Fragment },
	#[error("statement has no effective WHERE clause")]
	MissingWhereClause,
}

impl ValidationError {
	pub fn fragment(&self) -> &Fragment {
		match self {
			ValidationError::FunctionOrSubqueryInSelect { fragment } => fragment,
			ValidationError::SubqueryNotAllowed { fragment } => fragment,
			ValidationError::MissingWhereClause => &NO_FRAGMENT,
		}
	}
}

impl IntoDiagnostic for ValidationError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ValidationError::FunctionOrSubqueryInSelect { fragment } => {
				diagnostic::dialect::function_or_subquery_in_select(fragment)
			}
			ValidationError::SubqueryNotAllowed { fragment } => diagnostic::dialect::subquery_not_allowed(fragment),
			ValidationError::MissingWhereClause => diagnostic::dialect::missing_where_clause(),
		}
	}
}

/// The facade error. Syntax failures carry one error, dialect failures
/// carry the full list of collected violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranspileError {
	#[error("empty statement")]
	Empty,
	#[error(transparent)]
	Syntax(#[from] ParseError),
	#[error("statement violates dialect rules ({} violations)", .0.len())]
	Validation(Vec<ValidationError>),
}

impl IntoDiagnostic for TranspileError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TranspileError::Empty => diagnostic::ast::empty_statement_error(),
			TranspileError::Syntax(error) => error.into_diagnostic(),
			TranspileError::Validation(violations) => {
				// the first violation leads, the rest chain as causes
				let mut chained: Option<Diagnostic> = None;
				for violation in violations.into_iter().rev() {
					let mut head = violation.into_diagnostic();
					head.cause = chained.take().map(Box::new);
					chained = Some(head);
				}
				match chained {
					Some(head) => head,
					// validation never reports an empty violation list
					None => diagnostic::ast::empty_statement_error(),
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_error_diagnostic_code() {
		let error = ParseError::MissingWhereClause {
			fragment: Fragment::statement("FROM t", 9, 1, 10),
		};
		let diagnostic = error.into_diagnostic();
		assert_eq!(diagnostic.code, "AST_010");
	}

	#[test]
	fn test_validation_error_diagnostic_code() {
		let error = ValidationError::SubqueryNotAllowed {
			fragment: Fragment::statement("SELECT", 20, 1, 21),
		};
		let diagnostic = error.into_diagnostic();
		assert_eq!(diagnostic.code, "DIALECT_002");
		assert_eq!(diagnostic.fragment.column().0, 21);
	}

	#[test]
	fn test_transpile_error_chains_violations() {
		let error = TranspileError::Validation(vec![
			ValidationError::SubqueryNotAllowed {
				fragment: Fragment::statement("SELECT", 20, 1, 21),
			},
			ValidationError::MissingWhereClause,
		]);
		let diagnostic = error.into_diagnostic();
		assert_eq!(diagnostic.code, "DIALECT_002");
		assert_eq!(diagnostic.cause.as_ref().unwrap().code, "DIALECT_003");
	}

	#[test]
	fn test_parse_error_display() {
		let error = ParseError::UnexpectedToken {
			expected: "FROM".to_string(),
			fragment: Fragment::statement("WHERE", 9, 1, 10),
		};
		assert_eq!(error.to_string(), "unexpected token: expected FROM, got WHERE");
	}
}
