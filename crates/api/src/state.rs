use std::sync::Arc;

use orcamento_service::QuoteService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub quote_service: Arc<QuoteService>,
}
