//! Core quote domain model
//!
//! A [`Quote`] exists only once both numeric fields of a submission parsed;
//! everything display-related lives in [`QuoteView`].

pub mod errors;
pub mod request;
pub mod response;

pub use errors::QuoteError;
pub use request::QuoteForm;
pub use response::{QuoteView, CALC_ERROR_MESSAGE};

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// A successfully computed quote
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
	/// Length as submitted, in millimeters
	pub comprimento_mm: f64,

	/// Unit price as submitted, per meter
	pub valor_m: f64,

	/// Length converted to meters
	pub comprimento_m: f64,

	/// Total price: length in meters times unit price
	pub valor_total: f64,
}

impl Quote {
	/// Compute a quote from the two parsed inputs
	pub fn compute(comprimento_mm: f64, valor_m: f64) -> Self {
		let comprimento_m = comprimento_mm / 1000.0;

		Self {
			comprimento_mm,
			valor_m,
			comprimento_m,
			valor_total: comprimento_m * valor_m,
		}
	}

	/// Parse both numeric fields of a submitted form and compute the quote.
	///
	/// Fails if either field is absent, blank or not a decimal number; the
	/// caller decides how the failure degrades (see [`QuoteView::failed`]).
	pub fn from_form(form: &QuoteForm) -> QuoteResult<Self> {
		let comprimento_mm = form.parsed_comprimento()?;
		let valor_m = form.parsed_valor_m()?;

		Ok(Self::compute(comprimento_mm, valor_m))
	}
}
