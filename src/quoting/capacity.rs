//! Structure sizing recommendations.
//!
//! Maps an event style and guest count to the smallest structure in the
//! catalog ladder that holds the required floor area. Oversized events
//! extend the largest base structure with 5 m "B line" sections instead of
//! hitting a hard ceiling. The recommendation is advisory only and never
//! feeds the priced line items.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use super::calculators::surplus_percent;

/// One rung of the structure ladder.
struct Rung {
    label: &'static str,
    area_sqm: Decimal,
    ridge_height: Decimal,
    side_height: Decimal,
}

/// Catalog ladder, ascending by covered area.
const LADDER: [Rung; 4] = [
    Rung {
        label: "Rondo 10m",
        area_sqm: dec!(79),
        ridge_height: dec!(5.2),
        side_height: dec!(2.4),
    },
    Rung {
        label: "Rondo 15m",
        area_sqm: dec!(177),
        ridge_height: dec!(6.5),
        side_height: dec!(2.6),
    },
    Rung {
        label: "Rondo 20m",
        area_sqm: dec!(314),
        ridge_height: dec!(7.8),
        side_height: dec!(2.8),
    },
    Rung {
        label: "Rondo 25m",
        area_sqm: dec!(491),
        ridge_height: dec!(9.0),
        side_height: dec!(3.0),
    },
];

/// Extension sections come in 5 m lengths.
const EXTENSION_STEP_M: u32 = 5;
/// Each metre of B line extension on the 25 m base adds 25 sqm.
const EXTENSION_SQM_PER_M: Decimal = dec!(25);
/// Beyond this many sections the site needs a survey, not a price list.
const MAX_EXTENSION_SEGMENTS: u32 = 60;

/// A sizing recommendation with its narrative.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureSpec {
    pub size_label: String,
    pub area_sqm: Decimal,
    pub ridge_height: Decimal,
    pub side_height: Decimal,
    pub description: String,
    pub reasoning: String,
}

/// Floor area budgeted per guest for an event style.
///
/// Exhibition guests are booth-equivalent units. Unknown styles (custom
/// event types) fall back to 1 sqm per guest.
fn space_per_guest(style_label: &str) -> Decimal {
    match style_label.to_ascii_lowercase().as_str() {
        "cocktail" | "theater" => dec!(0.8),
        "banquet" => dec!(1.21),
        "classroom" => dec!(1.44),
        "exhibition" => dec!(18.0),
        _ => dec!(1.0),
    }
}

/// Recommend the smallest structure that covers the event.
///
/// Never fails for a positive guest count: above the largest rung the base
/// structure is extended in 5 m increments until the area fits (capped at
/// `MAX_EXTENSION_SEGMENTS`).
pub fn recommend(style_label: &str, guest_count: u32) -> StructureSpec {
    let required = Decimal::from(guest_count) * space_per_guest(style_label);

    if let Some(rung) = LADDER.iter().find(|r| r.area_sqm >= required) {
        return spec_for(rung.label.to_string(), rung, required, style_label, guest_count);
    }

    // Open-ended tier: extend the largest base in 5 m sections.
    let base = &LADDER[LADDER.len() - 1];
    let segment_area = EXTENSION_SQM_PER_M * Decimal::from(EXTENSION_STEP_M);
    let needed = ((required - base.area_sqm) / segment_area)
        .ceil()
        .to_u32()
        .unwrap_or(MAX_EXTENSION_SEGMENTS);
    let capped = needed > MAX_EXTENSION_SEGMENTS;
    let segments = needed.min(MAX_EXTENSION_SEGMENTS);
    let extension_m = segments * EXTENSION_STEP_M;
    let extended_area = base.area_sqm + Decimal::from(segments) * segment_area;
    let label = format!("{} + {}m B line", base.label, extension_m);

    let mut spec = spec_for(label, base, required, style_label, guest_count);
    spec.area_sqm = extended_area;
    spec.description = describe(&spec.size_label, extended_area, base);
    if capped {
        warn!(
            required_sqm = %required.normalize(),
            "guest count exceeds the largest extended configuration"
        );
        spec.reasoning = format!(
            "A {} layout for {} guests needs about {} sqm, which exceeds the largest \
             standard configuration ({}, {} sqm); a site survey is required for an \
             event of this size.",
            style_label,
            guest_count,
            required.normalize(),
            spec.size_label,
            extended_area.normalize(),
        );
    } else {
        spec.reasoning = reasoning(
            style_label,
            guest_count,
            required,
            &spec.size_label,
            extended_area,
        );
    }
    spec
}

fn spec_for(
    label: String,
    rung: &Rung,
    required: Decimal,
    style_label: &str,
    guest_count: u32,
) -> StructureSpec {
    StructureSpec {
        description: describe(&label, rung.area_sqm, rung),
        reasoning: reasoning(style_label, guest_count, required, &label, rung.area_sqm),
        size_label: label,
        area_sqm: rung.area_sqm,
        ridge_height: rung.ridge_height,
        side_height: rung.side_height,
    }
}

fn describe(label: &str, area: Decimal, rung: &Rung) -> String {
    format!(
        "{} freespan structure, {} sqm, {}m ridge, {}m side walls",
        label,
        area.normalize(),
        rung.ridge_height.normalize(),
        rung.side_height.normalize(),
    )
}

fn reasoning(
    style_label: &str,
    guest_count: u32,
    required: Decimal,
    label: &str,
    area: Decimal,
) -> String {
    format!(
        "A {} layout for {} guests needs about {} sqm; the {} covers {} sqm, \
         leaving {}% spare capacity.",
        style_label,
        guest_count,
        required.normalize(),
        label,
        area.normalize(),
        surplus_percent(area, required),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banquet_100_recommends_rondo_15m() {
        let spec = recommend("Banquet", 100);
        assert_eq!(spec.size_label, "Rondo 15m");
        assert_eq!(spec.area_sqm, dec!(177));
        assert_eq!(spec.ridge_height, dec!(6.5));
        assert!(spec.reasoning.contains("121 sqm"), "{}", spec.reasoning);
        assert!(spec.reasoning.contains("177 sqm"), "{}", spec.reasoning);
        assert!(spec.reasoning.contains("47%"), "{}", spec.reasoning);
    }

    #[test]
    fn test_small_cocktail_takes_smallest_rung() {
        // 20 guests * 0.8 = 16 sqm
        let spec = recommend("Cocktail", 20);
        assert_eq!(spec.size_label, "Rondo 10m");
        assert_eq!(spec.area_sqm, dec!(79));
    }

    #[test]
    fn test_unknown_style_defaults_to_one_sqm_per_guest() {
        let spec = recommend("Quinceanera", 100);
        assert_eq!(spec.size_label, "Rondo 15m");
        assert!(spec.reasoning.contains("100 sqm"), "{}", spec.reasoning);
    }

    #[test]
    fn test_style_match_is_case_insensitive() {
        let lower = recommend("banquet", 100);
        let upper = recommend("Banquet", 100);
        assert_eq!(lower.size_label, upper.size_label);
        assert_eq!(lower.area_sqm, upper.area_sqm);
    }

    #[test]
    fn test_exhibition_uses_booth_factor() {
        // 10 booth-equivalent guests * 18 = 180 sqm
        let spec = recommend("Exhibition", 10);
        assert_eq!(spec.size_label, "Rondo 20m");
    }

    #[test]
    fn test_exact_fit_leaves_zero_surplus() {
        // Unknown style, 491 guests -> exactly the Rondo 25m area.
        let spec = recommend("Expo Dinner", 491);
        assert_eq!(spec.size_label, "Rondo 25m");
        assert!(spec.reasoning.contains("0%"), "{}", spec.reasoning);
    }

    #[test]
    fn test_oversized_event_extends_in_5m_sections() {
        // 600 banquet guests -> 726 sqm; 491 + 2 * 125 = 741 sqm.
        let spec = recommend("Banquet", 600);
        assert_eq!(spec.size_label, "Rondo 25m + 10m B line");
        assert_eq!(spec.area_sqm, dec!(741));
        assert_eq!(spec.ridge_height, dec!(9.0));
        assert!(spec.reasoning.contains("726 sqm"), "{}", spec.reasoning);
        assert!(spec.reasoning.contains("3%"), "{}", spec.reasoning);
    }

    #[test]
    fn test_extension_is_capped_with_survey_narrative() {
        let spec = recommend("Banquet", 100_000);
        assert_eq!(spec.size_label, "Rondo 25m + 300m B line");
        assert_eq!(spec.area_sqm, dec!(491) + dec!(60) * dec!(125));
        assert!(spec.reasoning.contains("site survey"), "{}", spec.reasoning);
    }
}
