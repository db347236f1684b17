//! Static rate tables for the quotation engine.
//!
//! All prices are in MXN and are authored at build time. Historical quotes
//! must stay reproducible, so the tables are explicit data rather than
//! formulas. Seating tables are sparse: lookups resolve through
//! `calculators::resolve_tier_rate`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sparse guest-tier pricing table: guest tier -> package rate.
pub type RateTable = BTreeMap<u32, Decimal>;

/// Seating styles with a published tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatingStyle {
    Cocktail,
    Theater,
    Banquet,
    Classroom,
}

impl SeatingStyle {
    /// Display name used in line item descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            SeatingStyle::Cocktail => "Cocktail",
            SeatingStyle::Theater => "Theater",
            SeatingStyle::Banquet => "Banquet",
            SeatingStyle::Classroom => "Classroom",
        }
    }
}

/// Component prices for one Garden Cottage size.
///
/// An absent component means the size is not offered with it, and it must
/// not produce a zero-priced line.
#[derive(Debug, Clone)]
pub struct GardenCottagePrices {
    pub pvc: Option<Decimal>,
    pub lighting: Option<Decimal>,
    pub drapery: Option<Decimal>,
}

/// Component prices for one Pagoda size.
///
/// A missing wall price quotes that wall at 0 without substituting the
/// other wall type. Lighting and drapery only produce lines when > 0.
#[derive(Debug, Clone)]
pub struct PagodaPrices {
    pub hard_wall: Option<Decimal>,
    pub soft_wall: Option<Decimal>,
    pub lighting: Decimal,
    pub drapery: Decimal,
}

/// Hard/soft unit prices for one partition length.
#[derive(Debug, Clone)]
pub struct PartitionPrices {
    pub hard_wall: Decimal,
    pub soft_wall: Decimal,
}

/// The complete published price book, built once at startup and shared
/// read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct RateBook {
    cocktail: RateTable,
    theater: RateTable,
    banquet: RateTable,
    classroom: RateTable,
    pub garden_cottage: BTreeMap<String, GardenCottagePrices>,
    pub pagoda: BTreeMap<String, PagodaPrices>,
    pub rondo: BTreeMap<String, Decimal>,
    pub rondo_segment_rate: Decimal,
    pub apse: BTreeMap<String, Decimal>,
    pub apse_segment_rate: Decimal,
    /// Per-sqm rates by flooring type.
    pub flooring: BTreeMap<String, Decimal>,
    /// Partition prices by length label.
    pub partitions: BTreeMap<String, PartitionPrices>,
    /// Accessory unit prices by display name.
    pub accessories: BTreeMap<String, Decimal>,
}

impl RateBook {
    /// The published Carpa Vista price book.
    pub fn standard() -> Self {
        Self {
            cocktail: tier_table(&[
                (20, dec!(150)),
                (40, dec!(280)),
                (60, dec!(400)),
                (80, dec!(520)),
                (100, dec!(650)),
                (150, dec!(900)),
                (200, dec!(1150)),
            ]),
            theater: tier_table(&[
                (10, dec!(120)),
                (20, dec!(200)),
                (40, dec!(350)),
                (60, dec!(500)),
                (80, dec!(650)),
                (100, dec!(800)),
                (150, dec!(1100)),
                (200, dec!(1400)),
            ]),
            banquet: tier_table(&[
                (20, dec!(250)),
                (40, dec!(450)),
                (60, dec!(650)),
                (80, dec!(850)),
                (100, dec!(1050)),
                (120, dec!(1250)),
                (160, dec!(1600)),
            ]),
            classroom: tier_table(&[
                (10, dec!(150)),
                (20, dec!(260)),
                (30, dec!(380)),
                (50, dec!(600)),
                (80, dec!(900)),
                (120, dec!(1300)),
            ]),
            garden_cottage: BTreeMap::from([
                (
                    "2m".to_string(),
                    GardenCottagePrices {
                        pvc: Some(dec!(3500)),
                        lighting: Some(dec!(400)),
                        drapery: None,
                    },
                ),
                (
                    "3m".to_string(),
                    GardenCottagePrices {
                        pvc: Some(dec!(5000)),
                        lighting: Some(dec!(500)),
                        drapery: Some(dec!(125)),
                    },
                ),
                (
                    "4m".to_string(),
                    GardenCottagePrices {
                        pvc: Some(dec!(8000)),
                        lighting: Some(dec!(650)),
                        drapery: Some(dec!(175)),
                    },
                ),
                (
                    "5m".to_string(),
                    GardenCottagePrices {
                        pvc: Some(dec!(12000)),
                        lighting: Some(dec!(800)),
                        drapery: Some(dec!(250)),
                    },
                ),
            ]),
            pagoda: BTreeMap::from([
                (
                    "3m".to_string(),
                    PagodaPrices {
                        hard_wall: Some(dec!(7500)),
                        soft_wall: Some(dec!(5500)),
                        lighting: dec!(500),
                        drapery: dec!(0),
                    },
                ),
                (
                    "4m".to_string(),
                    PagodaPrices {
                        hard_wall: Some(dec!(10000)),
                        soft_wall: Some(dec!(7500)),
                        lighting: dec!(650),
                        drapery: dec!(200),
                    },
                ),
                (
                    "5m".to_string(),
                    PagodaPrices {
                        hard_wall: Some(dec!(14000)),
                        soft_wall: Some(dec!(10500)),
                        lighting: dec!(800),
                        drapery: dec!(250),
                    },
                ),
                (
                    "6m".to_string(),
                    PagodaPrices {
                        hard_wall: None,
                        soft_wall: Some(dec!(14500)),
                        lighting: dec!(1000),
                        drapery: dec!(300),
                    },
                ),
            ]),
            rondo: BTreeMap::from([
                ("Rondo 10m".to_string(), dec!(150000)),
                ("Rondo 15m".to_string(), dec!(200000)),
                ("Rondo 20m".to_string(), dec!(260000)),
                ("Rondo 25m".to_string(), dec!(330000)),
            ]),
            rondo_segment_rate: dec!(50000),
            apse: BTreeMap::from([
                ("Apse 20m".to_string(), dec!(180000)),
                ("Apse 25m".to_string(), dec!(230000)),
                ("Apse 30m".to_string(), dec!(290000)),
            ]),
            apse_segment_rate: dec!(60000),
            flooring: BTreeMap::from([
                ("wooden".to_string(), dec!(150)),
                ("carpet".to_string(), dec!(85)),
                ("astroturf".to_string(), dec!(60)),
            ]),
            partitions: BTreeMap::from([
                (
                    "3m".to_string(),
                    PartitionPrices {
                        hard_wall: dec!(4500),
                        soft_wall: dec!(2500),
                    },
                ),
                (
                    "4m".to_string(),
                    PartitionPrices {
                        hard_wall: dec!(6000),
                        soft_wall: dec!(3200),
                    },
                ),
                (
                    "5m".to_string(),
                    PartitionPrices {
                        hard_wall: dec!(7500),
                        soft_wall: dec!(4000),
                    },
                ),
                (
                    "6m".to_string(),
                    PartitionPrices {
                        hard_wall: dec!(9000),
                        soft_wall: dec!(4800),
                    },
                ),
            ]),
            accessories: BTreeMap::from([
                ("Chandelier".to_string(), dec!(1500)),
                ("Fairy Lights".to_string(), dec!(800)),
                ("Red Carpet".to_string(), dec!(2500)),
                ("Stage Platform".to_string(), dec!(5000)),
                ("Patio Heater".to_string(), dec!(3500)),
                ("Mobile Cooling Unit".to_string(), dec!(12000)),
            ]),
        }
    }

    /// Tier table for a seating style.
    pub fn seating_table(&self, style: SeatingStyle) -> &RateTable {
        match style {
            SeatingStyle::Cocktail => &self.cocktail,
            SeatingStyle::Theater => &self.theater,
            SeatingStyle::Banquet => &self.banquet,
            SeatingStyle::Classroom => &self.classroom,
        }
    }
}

fn tier_table(entries: &[(u32, Decimal)]) -> RateTable {
    entries.iter().copied().collect()
}
