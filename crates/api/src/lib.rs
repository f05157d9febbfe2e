//! Orcamento API
//!
//! HTTP surface of the budget-quote service: router, handlers and the
//! server-rendered HTML views.

pub mod handlers;
pub mod router;
pub mod security;
pub mod state;
pub mod views;

pub use router::create_router;
pub use state::AppState;
