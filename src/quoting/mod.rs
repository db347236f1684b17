//! Quotation engine for Carpa Vista event structures.
//!
//! A pure, deterministic rules engine: the front office posts a
//! `QuoteRequest` over HTTP/JSON and receives an itemized, reproducible
//! quote (line items, subtotal, IVA, total) plus an advisory structure
//! sizing recommendation. All rates live in the static `RateBook`; the
//! engine performs no I/O.

pub mod calculators;
pub mod capacity;
pub mod requests;
pub mod responses;
pub mod services;
pub mod tables;

// Re-export commonly used items
pub use calculators::round_money;
pub use services::{compose_quote, QuoteError, VAT_RATE};
pub use tables::RateBook;
