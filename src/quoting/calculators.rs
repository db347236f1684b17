//! Core quotation math.
//!
//! Pure functions with no I/O. Everything here is deterministic: the same
//! inputs always produce the same outputs, which is what keeps quotes
//! reproducible and auditable.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::responses::LineItem;
use super::tables::RateTable;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is
/// exactly halfway between two possibilities, which avoids cumulative bias
/// across many quotes.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use carpavista_web::quoting::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Resolve the applicable rate for a guest count from a sparse tier table.
///
/// Policy: an exact key wins; otherwise the smallest published tier at or
/// above the guest count applies ("round up to the next published tier");
/// a guest count above every tier clamps to the top tier instead of
/// failing. Returns `None` only for an empty table, which the published
/// book never produces.
pub fn resolve_tier_rate(guest_count: u32, table: &RateTable) -> Option<Decimal> {
    // The range scan covers the exact-key case since the bound is inclusive.
    if let Some((_, rate)) = table.range(guest_count..).next() {
        return Some(*rate);
    }
    table.values().next_back().copied()
}

/// Percentage of surplus space a structure tier leaves over the required
/// area, rounded up to a whole percent.
pub fn surplus_percent(tier_area: Decimal, required_area: Decimal) -> i64 {
    ((tier_area - required_area) / required_area * dec!(100))
        .ceil()
        .to_i64()
        .unwrap_or(0)
}

/// Scale every line item's total for a multi-day rental.
///
/// Applied in place after all lines are composed. Only `total_price` is
/// scaled; `unit_price` keeps the single-day rate so the breakdown stays
/// readable. A duration of 1 leaves every total untouched.
pub fn apply_duration(items: &mut [LineItem], duration: u32) {
    if duration <= 1 {
        return;
    }
    let factor = Decimal::from(duration);
    for item in items {
        item.total_price *= factor;
    }
}
