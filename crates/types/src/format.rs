//! Decimal parsing and pt-BR display formatting
//!
//! Submitted numbers arrive as dot-decimal text; everything shown back to the
//! user uses the comma separator.

use thiserror::Error;

/// A form field that could not be read as a decimal number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecimalParseError {
	#[error("missing value for field '{field}'")]
	Missing { field: &'static str },

	#[error("invalid number '{raw}' for field '{field}'")]
	Invalid { field: &'static str, raw: String },
}

/// Parse a raw form value as `f64`.
///
/// An absent field and a blank (or whitespace-only) value are the same
/// failure class; surrounding whitespace on an otherwise valid number is
/// accepted.
pub fn parse_decimal(field: &'static str, raw: Option<&str>) -> Result<f64, DecimalParseError> {
	let raw = raw.ok_or(DecimalParseError::Missing { field })?;
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Err(DecimalParseError::Missing { field });
	}

	trimmed
		.parse::<f64>()
		.map_err(|_| DecimalParseError::Invalid {
			field,
			raw: raw.to_string(),
		})
}

/// Format a value with the given number of decimal places, comma-separated.
pub fn format_decimal(value: f64, places: usize) -> String {
	format!("{value:.places$}").replace('.', ",")
}
