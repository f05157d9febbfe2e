//! Quote view model
//!
//! Display model handed to the result page. All numeric fields arrive here
//! pre-formatted with the comma separator; `comprimento_mm` is always the raw
//! submitted text.

use crate::format::format_decimal;
use crate::quotes::{Quote, QuoteForm};

/// Shown in place of the total when either numeric field failed to parse
pub const CALC_ERROR_MESSAGE: &str = "Erro no cálculo: Verifique os valores.";

/// Rendered quote, one per request/response cycle
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteView {
	/// Product name, passed through unmodified
	pub nome_produto: Option<String>,

	/// Description, passed through unmodified
	pub descricao: Option<String>,

	/// Raw length text exactly as submitted, never reformatted
	pub comprimento_mm: Option<String>,

	/// Length in meters, 3 decimal places; absent when the calculation failed
	pub comprimento_m: Option<String>,

	/// Unit price, 2 decimal places when it parsed, raw input text otherwise
	pub valor_m: Option<String>,

	/// Total price, 2 decimal places, or [`CALC_ERROR_MESSAGE`]
	pub valor_total: String,
}

impl QuoteView {
	/// Build the view for a submission whose numeric fields both parsed
	pub fn calculated(form: QuoteForm, quote: &Quote) -> Self {
		Self {
			nome_produto: form.nome_produto,
			descricao: form.descricao,
			comprimento_mm: form.comprimento,
			comprimento_m: Some(format_decimal(quote.comprimento_m, 3)),
			valor_m: Some(format_decimal(quote.valor_m, 2)),
			valor_total: format_decimal(quote.valor_total, 2),
		}
	}

	/// Build the degraded view for a submission that failed numeric parsing.
	///
	/// `valor_m` is still formatted when it parsed on its own; otherwise the
	/// raw text is echoed so the user sees what they typed.
	pub fn failed(form: QuoteForm) -> Self {
		let valor_m = match form.parsed_valor_m() {
			Ok(v) => Some(format_decimal(v, 2)),
			Err(_) => form.valor_m.clone(),
		};

		Self {
			nome_produto: form.nome_produto,
			descricao: form.descricao,
			comprimento_mm: form.comprimento,
			comprimento_m: None,
			valor_m,
			valor_total: CALC_ERROR_MESSAGE.to_string(),
		}
	}
}
