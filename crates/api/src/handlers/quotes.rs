//! Budget form handlers

use axum::{extract::State, response::Html, Form};
use tracing::{debug, info};

use crate::state::AppState;
use crate::views;
use orcamento_types::QuoteForm;

/// GET / - Render the empty budget form
pub async fn get_form() -> Html<String> {
	debug!("rendering empty budget form");
	Html(views::form_page())
}

/// POST / - Compute and render a budget quote
pub async fn post_quote(
	State(state): State<AppState>,
	Form(form): Form<QuoteForm>,
) -> Html<String> {
	info!(
		produto = form.nome_produto.as_deref().unwrap_or("-"),
		"received budget form submission"
	);

	let view = state.quote_service.prepare(form);
	Html(views::quote_page(&view))
}
