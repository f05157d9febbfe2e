//! Quote preparation service

use orcamento_types::{Quote, QuoteForm, QuoteView};
use tracing::debug;

/// Service turning one submitted form into one display-ready quote.
///
/// Stateless; a single instance is built at startup and shared through the
/// application state, so concurrent requests never contend.
#[derive(Debug, Clone, Default)]
pub struct QuoteService;

impl QuoteService {
	/// Create a new quote service
	pub fn new() -> Self {
		Self
	}

	/// Parse, compute and format one submission.
	///
	/// Parse failures never escape: the view degrades to the fixed error
	/// message in its total field and omits the derived length.
	pub fn prepare(&self, form: QuoteForm) -> QuoteView {
		match Quote::from_form(&form) {
			Ok(quote) => {
				debug!(
					comprimento_m = quote.comprimento_m,
					valor_total = quote.valor_total,
					"quote computed"
				);
				QuoteView::calculated(form, &quote)
			},
			Err(e) => {
				debug!(error = %e, "quote calculation failed, rendering error view");
				QuoteView::failed(form)
			},
		}
	}
}
