//! Submitted budget form payload

use serde::Deserialize;

use crate::format::{parse_decimal, DecimalParseError};

/// Raw fields of the budget form, exactly as submitted.
///
/// Every field is optional: browsers send blank inputs as empty strings and
/// older clients may omit fields entirely. Unknown fields (a stale file
/// input, for instance) are ignored on deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteForm {
	pub nome_produto: Option<String>,
	pub descricao: Option<String>,

	/// Length in millimeters, untrusted decimal text
	pub comprimento: Option<String>,

	/// Price per meter, untrusted decimal text
	pub valor_m: Option<String>,
}

impl QuoteForm {
	/// Parse the length field as millimeters
	pub fn parsed_comprimento(&self) -> Result<f64, DecimalParseError> {
		parse_decimal("comprimento", self.comprimento.as_deref())
	}

	/// Parse the unit price field
	pub fn parsed_valor_m(&self) -> Result<f64, DecimalParseError> {
		parse_decimal("valor_m", self.valor_m.as_deref())
	}
}
