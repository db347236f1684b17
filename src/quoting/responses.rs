//! Response DTOs for the quotation API.
//!
//! Decimals serialize as strings so totals survive JS number precision on
//! the front office side.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::capacity::StructureSpec;
use super::requests::ContactInfo;

/// One priced row of the quote. Order of appearance is part of the
/// contract and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_price: Decimal,
}

impl LineItem {
    /// A single-unit line whose total equals its unit price.
    pub fn single(description: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity: Decimal::ONE,
            unit_price,
            total_price: unit_price,
        }
    }

    /// A quantity-priced line; the total is quantity times unit price.
    pub fn counted(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total_price: quantity * unit_price,
        }
    }
}

/// Recommended structure dimensions and sizing narrative.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSpecs {
    pub size: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub area_sqm: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub ridge_height: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub side_height: Decimal,
    pub reasoning: String,
}

impl From<StructureSpec> for RecommendedSpecs {
    fn from(spec: StructureSpec) -> Self {
        Self {
            size: spec.size_label,
            area_sqm: spec.area_sqm,
            ridge_height: spec.ridge_height,
            side_height: spec.side_height,
            reasoning: spec.reasoning,
        }
    }
}

/// Event metadata echoed back into the quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    pub number_of_guests: u32,
    pub duration: u32,
}

/// A fully itemized quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub contact_info: ContactInfo,
    pub event_details: EventDetails,
    pub structure_summary: String,
    pub recommended_structure: String,
    pub recommended_specs: RecommendedSpecs,
    pub line_items: Vec<LineItem>,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub vat: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// The caller-visible envelope around a quote calculation.
#[derive(Debug, Serialize)]
pub struct QuoteEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteEnvelope {
    pub fn ok(quote: Quote) -> Self {
        Self {
            success: true,
            quote: Some(quote),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            quote: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_counted_line_multiplies_out() {
        let line = LineItem::counted("3m soft wall partition", dec!(2), dec!(2500));
        assert_eq!(line.total_price, dec!(5000));
    }

    #[test]
    fn test_line_item_serializes_decimals_as_strings() {
        let line = LineItem::single("Garden Cottage 3m PVC", dec!(5000));
        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["unitPrice"], "5000");
        assert_eq!(value["quantity"], "1");
    }

    #[test]
    fn test_failure_envelope_shape() {
        let value =
            serde_json::to_value(QuoteEnvelope::failure("numberOfGuests must be positive"))
                .unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("quote").is_none());
        assert_eq!(value["error"], "numberOfGuests must be positive");
    }
}
