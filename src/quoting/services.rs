//! Quote composition.
//!
//! `compose_quote` assembles line items in a fixed pipeline: structure
//! family, seating, flooring, partitions, accessories, then duration
//! scaling and totals. The order is part of the observable contract, so
//! lines are appended and never re-sorted. Every unknown key is a
//! deliberate soft skip (logged at debug), never an error: stale front
//! office state must not fail a quote.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::calculators::{apply_duration, resolve_tier_rate, round_money};
use super::capacity;
use super::requests::{EventType, QuoteRequest, StructureSelection, WallType};
use super::responses::{EventDetails, LineItem, Quote};
use super::tables::{RateBook, SeatingStyle};

/// IVA applied to every quote subtotal.
pub const VAT_RATE: Decimal = dec!(0.16);

/// Hard input failures. Everything else in the engine is a soft skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    #[error("numberOfGuests must be a positive integer")]
    InvalidGuestCount,
    #[error("duration must be at least 1 day")]
    InvalidDuration,
    #[error("flooringArea must be positive when flooring is requested")]
    InvalidFlooringArea,
}

/// Compose a fully itemized quote from a validated request.
///
/// Pure and deterministic: the same request always yields the same line
/// items, in the same order, with the same rounding. The sizing
/// recommendation is advisory and never alters the priced lines.
pub fn compose_quote(book: &RateBook, request: &QuoteRequest) -> Result<Quote, QuoteError> {
    validate(request)?;

    let mut items = Vec::new();
    if let Some(selection) = request.structure_selection() {
        push_structure_items(book, &selection, &mut items);
    }
    push_seating_item(book, request, &mut items);
    push_flooring_item(book, request, &mut items);
    push_partition_items(book, request, &mut items);
    push_accessory_items(book, request, &mut items);
    apply_duration(&mut items, request.duration);

    let subtotal: Decimal = items.iter().map(|item| item.total_price).sum();
    let vat = round_money(subtotal * VAT_RATE, 2);
    let total = subtotal + vat;

    let event_label = request.event_label();
    let spec = capacity::recommend(&event_label, request.number_of_guests);

    Ok(Quote {
        contact_info: request.contact_info.clone(),
        event_details: EventDetails {
            event_type: event_label,
            event_date: request.event_date,
            venue: request.venue.clone(),
            number_of_guests: request.number_of_guests,
            duration: request.duration,
        },
        structure_summary: spec.description.clone(),
        recommended_structure: spec.size_label.clone(),
        recommended_specs: spec.into(),
        line_items: items,
        subtotal,
        vat,
        total,
    })
}

fn validate(request: &QuoteRequest) -> Result<(), QuoteError> {
    if request.number_of_guests == 0 {
        return Err(QuoteError::InvalidGuestCount);
    }
    if request.duration == 0 {
        return Err(QuoteError::InvalidDuration);
    }
    if let Some(area) = request.flooring_area {
        if area <= Decimal::ZERO {
            return Err(QuoteError::InvalidFlooringArea);
        }
    }
    Ok(())
}

fn push_structure_items(book: &RateBook, selection: &StructureSelection, items: &mut Vec<LineItem>) {
    match selection {
        StructureSelection::GardenCottage { size } => {
            let Some(entry) = book.garden_cottage.get(size) else {
                debug!(%size, "unknown garden cottage size, skipping structure");
                return;
            };
            let components = [
                ("PVC", entry.pvc),
                ("Lighting", entry.lighting),
                ("Drapery", entry.drapery),
            ];
            for (component, price) in components {
                if let Some(price) = price {
                    items.push(LineItem::single(
                        format!("Garden Cottage {size} {component}"),
                        price,
                    ));
                }
            }
        }
        StructureSelection::Pagoda { size, wall_type } => {
            let Some(entry) = book.pagoda.get(size) else {
                debug!(%size, "unknown pagoda size, skipping structure");
                return;
            };
            // The requested wall is quoted even when unpriced (at 0);
            // the other wall type is never substituted.
            let wall_price = match wall_type {
                WallType::Hard => entry.hard_wall,
                WallType::Soft => entry.soft_wall,
            }
            .unwrap_or(Decimal::ZERO);
            items.push(LineItem::single(
                format!("Pagoda {size} {} wall", wall_label(*wall_type)),
                wall_price,
            ));
            if entry.lighting > Decimal::ZERO {
                items.push(LineItem::single(format!("Pagoda {size} Lighting"), entry.lighting));
            }
            if entry.drapery > Decimal::ZERO {
                items.push(LineItem::single(format!("Pagoda {size} Drapery"), entry.drapery));
            }
        }
        StructureSelection::Rondo { structure, segments } => {
            push_modular_items(
                book.rondo.get(structure).copied(),
                structure,
                *segments,
                book.rondo_segment_rate,
                items,
            );
        }
        StructureSelection::Apse { structure, segments } => {
            push_modular_items(
                book.apse.get(structure).copied(),
                structure,
                *segments,
                book.apse_segment_rate,
                items,
            );
        }
    }
}

/// Base-plus-segments pricing shared by the large modular families.
fn push_modular_items(
    base_price: Option<Decimal>,
    structure: &str,
    segments: u32,
    segment_rate: Decimal,
    items: &mut Vec<LineItem>,
) {
    let Some(base_price) = base_price else {
        debug!(structure, "unknown modular structure, skipping");
        return;
    };
    items.push(LineItem::single(structure.to_string(), base_price));
    if segments > 0 {
        items.push(LineItem::counted(
            "5m Segments",
            Decimal::from(segments),
            segment_rate,
        ));
    }
}

fn push_seating_item(book: &RateBook, request: &QuoteRequest, items: &mut Vec<LineItem>) {
    let Some(style) = seating_style(request.event_type) else {
        return;
    };
    let Some(rate) = resolve_tier_rate(request.number_of_guests, book.seating_table(style)) else {
        return;
    };
    items.push(LineItem::single(
        format!("{} seating for {} guests", style.name(), request.number_of_guests),
        rate,
    ));
}

fn push_flooring_item(book: &RateBook, request: &QuoteRequest, items: &mut Vec<LineItem>) {
    let (Some(flooring_type), Some(area)) = (&request.flooring_type, request.flooring_area) else {
        return;
    };
    let Some(&rate) = book.flooring.get(flooring_type) else {
        debug!(%flooring_type, "unknown flooring type, skipping");
        return;
    };
    items.push(LineItem::counted(
        format!("{flooring_type} flooring"),
        area,
        rate,
    ));
}

fn push_partition_items(book: &RateBook, request: &QuoteRequest, items: &mut Vec<LineItem>) {
    for partition in &request.partitions {
        if partition.quantity == 0 {
            continue;
        }
        let Some(prices) = book.partitions.get(&partition.width) else {
            debug!(width = %partition.width, "unknown partition length, skipping");
            continue;
        };
        let unit_price = match partition.wall_type {
            WallType::Hard => prices.hard_wall,
            WallType::Soft => prices.soft_wall,
        };
        items.push(LineItem::counted(
            format!(
                "{} {} wall partition",
                partition.width,
                wall_label(partition.wall_type)
            ),
            Decimal::from(partition.quantity),
            unit_price,
        ));
    }
}

fn push_accessory_items(book: &RateBook, request: &QuoteRequest, items: &mut Vec<LineItem>) {
    for (name, &quantity) in &request.accessory_quantities {
        if quantity <= 0 {
            continue;
        }
        let Some(&unit_price) = book.accessories.get(name) else {
            debug!(%name, "unknown accessory, skipping");
            continue;
        };
        items.push(LineItem::counted(
            name.clone(),
            Decimal::from(quantity),
            unit_price,
        ));
    }
}

fn seating_style(event_type: EventType) -> Option<SeatingStyle> {
    match event_type {
        EventType::Cocktail => Some(SeatingStyle::Cocktail),
        EventType::Theater => Some(SeatingStyle::Theater),
        EventType::Banquet => Some(SeatingStyle::Banquet),
        EventType::Classroom => Some(SeatingStyle::Classroom),
        // No seating tables are published for these.
        EventType::Exhibition | EventType::Other => None,
    }
}

fn wall_label(wall_type: WallType) -> &'static str {
    match wall_type {
        WallType::Hard => "hard",
        WallType::Soft => "soft",
    }
}
