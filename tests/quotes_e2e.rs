//! Budget form E2E tests
//!
//! Tests for the single budget route covering the form display path, the
//! calculation path and the degraded parse-failure path.

mod mocks;

use crate::mocks::TestServer;
use orcamento::CALC_ERROR_MESSAGE;
use reqwest::Client;

#[tokio::test]
async fn test_get_renders_empty_form() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/", server.base_url))
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body = resp.text().await.unwrap();
	assert!(body.contains("name=\"nome_produto\""));
	assert!(body.contains("name=\"descricao\""));
	assert!(body.contains("name=\"comprimento\""));
	assert!(body.contains("name=\"valor_m\""));
	// No computed fields on the display path
	assert!(!body.contains("Valor total"));

	server.abort();
}

#[tokio::test]
async fn test_post_valid_pair_renders_quote() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/", server.base_url))
		.form(&[
			("nome_produto", "Perfil de alumínio"),
			("descricao", "Corte sob medida"),
			("comprimento", "1500"),
			("valor_m", "10.00"),
		])
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body = resp.text().await.unwrap();
	assert!(body.contains("Perfil de alumínio"));
	assert!(body.contains("Corte sob medida"));
	// Raw echo plus the three formatted values
	assert!(body.contains("1500"));
	assert!(body.contains("1,500"));
	assert!(body.contains("10,00"));
	assert!(body.contains("15,00"));
	assert!(!body.contains(CALC_ERROR_MESSAGE));

	server.abort();
}

#[tokio::test]
async fn test_post_empty_length_renders_error_state() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/", server.base_url))
		.form(&[
			("nome_produto", "Cortina"),
			("descricao", ""),
			("comprimento", ""),
			("valor_m", "10.00"),
		])
		.send()
		.await
		.unwrap();

	// Parse failure still renders successfully
	assert!(resp.status().is_success());

	let body = resp.text().await.unwrap();
	assert!(body.contains(CALC_ERROR_MESSAGE));
	// Price parsed on its own, so it is still formatted
	assert!(body.contains("10,00"));
	// Derived length is absent
	assert!(!body.contains("Comprimento (m)</th>"));

	server.abort();
}

#[tokio::test]
async fn test_post_textual_price_echoes_raw_input() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/", server.base_url))
		.form(&[("comprimento", "1000"), ("valor_m", "abc")])
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body = resp.text().await.unwrap();
	assert!(body.contains(CALC_ERROR_MESSAGE));
	assert!(body.contains("abc"));
	// Raw length text is echoed unchanged
	assert!(body.contains("1000"));
	assert!(!body.contains("Comprimento (m)</th>"));

	server.abort();
}

#[tokio::test]
async fn test_post_missing_fields_renders_error_state() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/", server.base_url))
		.form(&[("nome_produto", "Trilho")])
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body = resp.text().await.unwrap();
	assert!(body.contains("Trilho"));
	assert!(body.contains(CALC_ERROR_MESSAGE));

	server.abort();
}

#[tokio::test]
async fn test_post_stale_file_field_is_ignored() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	// Old clients may still post the removed file field
	let resp = client
		.post(format!("{}/", server.base_url))
		.form(&[
			("comprimento", "2000"),
			("valor_m", "5"),
			("foto", "antiga.png"),
		])
		.send()
		.await
		.unwrap();

	assert!(resp.status().is_success());

	let body = resp.text().await.unwrap();
	assert!(body.contains("2,000"));
	assert!(body.contains("10,00"));
	assert!(!body.contains("antiga.png"));

	server.abort();
}

#[tokio::test]
async fn test_quote_page_stamps_todays_date() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/", server.base_url))
		.form(&[("comprimento", "100"), ("valor_m", "1")])
		.send()
		.await
		.unwrap();

	let body = resp.text().await.unwrap();
	// DD/MM/YYYY stamp rendered by the today helper
	assert!(body.contains("Data: "));

	server.abort();
}
