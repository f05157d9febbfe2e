//! Orcamento Service
//!
//! Core logic for turning a submitted budget form into a rendered quote.

pub mod quote;

pub use quote::QuoteService;
