//! Server-rendered HTML views
//!
//! The service renders two pages: the budget form and the computed quote.
//! Markup is built with plain string templates; every user-supplied value is
//! escaped before interpolation.

use orcamento_types::QuoteView;

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; color: #222; }\n\
h1 { font-size: 1.4rem; }\n\
form label { display: block; margin-top: 1rem; font-weight: bold; }\n\
form input, form textarea { width: 100%; padding: 0.4rem; margin-top: 0.25rem; box-sizing: border-box; }\n\
form button { margin-top: 1.5rem; padding: 0.5rem 1.5rem; }\n\
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }\n\
td, th { border: 1px solid #ccc; padding: 0.5rem; text-align: left; }\n\
.erro { color: #b00020; }\n\
.total { font-weight: bold; }\n\
.data { color: #666; font-size: 0.9rem; }";

/// Current date formatted as DD/MM/YYYY, stamped on the quote page.
///
/// Named formatting helper available to the view-rendering step.
pub fn today() -> String {
	chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Minimal HTML escaping for user-supplied text
fn escape_html(raw: &str) -> String {
	let mut escaped = String::with_capacity(raw.len());
	for c in raw.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Wrap page body in the shared document shell
fn page(title: &str, body: &str) -> String {
	format!(
		"<!DOCTYPE html>\n\
		<html lang=\"pt-BR\">\n\
		<head>\n\
		<meta charset=\"utf-8\">\n\
		<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
		<title>{title}</title>\n\
		<style>\n{PAGE_STYLE}\n</style>\n\
		</head>\n\
		<body>\n{body}\n</body>\n\
		</html>\n"
	)
}

/// The empty budget form
pub fn form_page() -> String {
	let body = "\
<h1>Orçamento de produto</h1>\n\
<form method=\"post\" action=\"/\">\n\
<label for=\"nome_produto\">Nome do produto</label>\n\
<input type=\"text\" id=\"nome_produto\" name=\"nome_produto\">\n\
<label for=\"descricao\">Descrição</label>\n\
<textarea id=\"descricao\" name=\"descricao\" rows=\"3\"></textarea>\n\
<label for=\"comprimento\">Comprimento (mm)</label>\n\
<input type=\"text\" id=\"comprimento\" name=\"comprimento\" inputmode=\"decimal\">\n\
<label for=\"valor_m\">Valor por metro (R$)</label>\n\
<input type=\"text\" id=\"valor_m\" name=\"valor_m\" inputmode=\"decimal\">\n\
<button type=\"submit\">Calcular orçamento</button>\n\
</form>";

	page("Orçamento de produto", body)
}

/// The computed quote page
pub fn quote_page(view: &QuoteView) -> String {
	let mut rows = String::new();

	push_row(&mut rows, "Produto", view.nome_produto.as_deref());
	push_row(&mut rows, "Descrição", view.descricao.as_deref());
	push_row(
		&mut rows,
		"Comprimento (mm)",
		view.comprimento_mm.as_deref(),
	);
	// Derived length is omitted entirely when the calculation failed
	if let Some(comprimento_m) = view.comprimento_m.as_deref() {
		push_row(&mut rows, "Comprimento (m)", Some(comprimento_m));
	}
	push_row(&mut rows, "Valor por metro (R$)", view.valor_m.as_deref());

	let total_class = if view.comprimento_m.is_some() {
		"total"
	} else {
		"erro"
	};
	rows.push_str(&format!(
		"<tr><th>Valor total (R$)</th><td class=\"{total_class}\">{}</td></tr>\n",
		escape_html(&view.valor_total)
	));

	let body = format!(
		"<h1>Orçamento</h1>\n\
		<p class=\"data\">Data: {}</p>\n\
		<table>\n{rows}</table>\n\
		<p><a href=\"/\">Novo orçamento</a></p>",
		today()
	);

	page("Orçamento", &body)
}

fn push_row(rows: &mut String, label: &str, value: Option<&str>) {
	// Absent pass-through values render as empty cells
	let value = value.map(escape_html).unwrap_or_default();
	rows.push_str(&format!("<tr><th>{label}</th><td>{value}</td></tr>\n"));
}
