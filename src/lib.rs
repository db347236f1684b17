//! Carpa Vista quotation back end.
//!
//! The engine itself lives in [`quoting`] and is a pure function of its
//! request; this crate wraps it in a thin Axum JSON API for the existing
//! front office.

pub mod error;
pub mod quoting;
pub mod routes;

use std::sync::Arc;

use quoting::RateBook;

/// Shared application state: the published price book, built once at
/// startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<RateBook>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rates: Arc::new(RateBook::standard()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
