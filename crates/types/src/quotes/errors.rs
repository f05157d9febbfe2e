//! Error types for quote operations

use crate::format::DecimalParseError;
use thiserror::Error;

/// Errors raised while turning a submitted form into a computed quote.
///
/// This is the one real error class of the service; it is always handled
/// locally by degrading the view, never surfaced as a failed response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
	#[error("calculation input rejected: {0}")]
	InvalidNumber(#[from] DecimalParseError),
}
