//! Orcamento Server
//!
//! Main entry point for the budget-quote server

use orcamento::AppBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	AppBuilder::new().start_server().await
}
