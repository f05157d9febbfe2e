//! Shared helpers for the e2e tests

pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use test_server::TestServer;
