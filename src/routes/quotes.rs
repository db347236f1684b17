//! Quotation route handlers

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::quoting::requests::QuoteRequest;
use crate::quoting::responses::QuoteEnvelope;
use crate::quoting::services;
use crate::AppState;

/// Published catalog labels for the front office pickers, served from the
/// same price book the quotes are computed against.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOptions {
    garden_cottage_sizes: Vec<String>,
    pagoda_sizes: Vec<String>,
    rondo_structures: Vec<String>,
    apse_structures: Vec<String>,
    flooring_types: Vec<String>,
    partition_widths: Vec<String>,
    accessories: BTreeMap<String, Decimal>,
}

/// Calculate an itemized quote.
///
/// This is the request-handling collaborator around the engine: it parses
/// the JSON body, runs `compose_quote`, and wraps the outcome in the
/// `{success, quote, error}` envelope.
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteEnvelope>> {
    let quote = services::compose_quote(&state.rates, &request)?;
    Ok(Json(QuoteEnvelope::ok(quote)))
}

/// Catalog options for rendering the quote form.
pub async fn options(State(state): State<AppState>) -> Json<QuoteOptions> {
    let book = &state.rates;
    Json(QuoteOptions {
        garden_cottage_sizes: book.garden_cottage.keys().cloned().collect(),
        pagoda_sizes: book.pagoda.keys().cloned().collect(),
        rondo_structures: book.rondo.keys().cloned().collect(),
        apse_structures: book.apse.keys().cloned().collect(),
        flooring_types: book.flooring.keys().cloned().collect(),
        partition_widths: book.partitions.keys().cloned().collect(),
        accessories: book.accessories.clone(),
    })
}
