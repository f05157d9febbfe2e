//! Orcamento Types
//!
//! Shared models for the orcamento budget-quote service: the raw form
//! payload, the parsed quote, the rendered view, and the decimal parsing and
//! pt-BR display formatting they rely on.

pub mod format;
pub mod quotes;

// Re-export commonly used types for convenience
pub use format::{format_decimal, parse_decimal, DecimalParseError};
pub use quotes::{
	Quote, QuoteError, QuoteForm, QuoteResult, QuoteView, CALC_ERROR_MESSAGE,
};
