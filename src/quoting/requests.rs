//! Request DTOs for the quotation API.
//!
//! The wire shape is the camelCase JSON the front office already sends.
//! The four structure families arrive as a flat bundle of optional fields;
//! `QuoteRequest::structure_selection` re-expresses them as a sum type so
//! the composer can dispatch on exactly one family.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Event type as published in the front office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Cocktail,
    Theater,
    Banquet,
    Classroom,
    Exhibition,
    Other,
}

impl EventType {
    /// Label used for the sizing narrative; `Other` falls back to the
    /// caller-supplied custom label.
    pub fn display_label(&self, custom: Option<&str>) -> String {
        match self {
            EventType::Cocktail => "Cocktail".to_string(),
            EventType::Theater => "Theater".to_string(),
            EventType::Banquet => "Banquet".to_string(),
            EventType::Classroom => "Classroom".to_string(),
            EventType::Exhibition => "Exhibition".to_string(),
            EventType::Other => custom
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .unwrap_or("Other")
                .to_string(),
        }
    }
}

/// Wall variant for pagodas and partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallType {
    Hard,
    Soft,
}

/// Structure family identifiers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TentType {
    GardenCottage,
    Pagoda,
    Rondo,
    Apse,
}

/// One internal partition request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionRequest {
    /// Length label, e.g. "3m".
    pub width: String,
    pub wall_type: WallType,
    pub quantity: u32,
}

/// Contact details passed through unmodified into the quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A quotation request. The engine treats this as a read-only value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub event_type: EventType,
    #[serde(default)]
    pub custom_event_type: Option<String>,
    pub number_of_guests: u32,
    #[serde(default = "default_duration")]
    pub duration: u32,

    #[serde(default)]
    pub tent_type: Option<TentType>,
    #[serde(default)]
    pub garden_cottage_size: Option<String>,
    #[serde(default)]
    pub pagoda_size: Option<String>,
    #[serde(default)]
    pub pagoda_wall_type: Option<WallType>,
    #[serde(default)]
    pub rondo_structure: Option<String>,
    #[serde(default)]
    pub rondo_segments: Option<u32>,
    #[serde(default)]
    pub apse_structure: Option<String>,
    #[serde(default)]
    pub apse_segments: Option<u32>,

    #[serde(default)]
    pub flooring_type: Option<String>,
    #[serde(default)]
    pub flooring_area: Option<Decimal>,
    #[serde(default)]
    pub partitions: Vec<PartitionRequest>,
    /// Accessory name -> requested quantity. Held ordered so accessory
    /// lines always compose in the same sequence.
    #[serde(default)]
    pub accessory_quantities: BTreeMap<String, i64>,

    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub venue: Option<String>,
}

fn default_duration() -> u32 {
    1
}

/// Exactly one structure family with only its own fields.
#[derive(Debug, Clone, PartialEq)]
pub enum StructureSelection {
    GardenCottage {
        size: String,
    },
    Pagoda {
        size: String,
        wall_type: WallType,
    },
    Rondo {
        structure: String,
        segments: u32,
    },
    Apse {
        structure: String,
        segments: u32,
    },
}

impl QuoteRequest {
    /// Label used for the sizing narrative.
    pub fn event_label(&self) -> String {
        self.event_type
            .display_label(self.custom_event_type.as_deref())
    }

    /// Collapse the flat wire fields into the selected family, if any.
    ///
    /// A family without its size/structure field is treated as no
    /// selection, consistent with the engine's skip-on-unknown policy.
    pub fn structure_selection(&self) -> Option<StructureSelection> {
        match self.tent_type? {
            TentType::GardenCottage => {
                self.garden_cottage_size
                    .clone()
                    .map(|size| StructureSelection::GardenCottage { size })
            }
            TentType::Pagoda => self.pagoda_size.clone().map(|size| StructureSelection::Pagoda {
                size,
                // Older front-office clients omit the flag; the soft wall
                // is the always-priced option.
                wall_type: self.pagoda_wall_type.unwrap_or(WallType::Soft),
            }),
            TentType::Rondo => {
                self.rondo_structure
                    .clone()
                    .map(|structure| StructureSelection::Rondo {
                        structure,
                        segments: self.rondo_segments.unwrap_or(0),
                    })
            }
            TentType::Apse => {
                self.apse_structure
                    .clone()
                    .map(|structure| StructureSelection::Apse {
                        structure,
                        segments: self.apse_segments.unwrap_or(0),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_payload() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "eventType": "Banquet",
            "numberOfGuests": 100,
            "duration": 2,
            "tentType": "pagoda",
            "pagodaSize": "4m",
            "pagodaWallType": "hard",
            "flooringType": "wooden",
            "flooringArea": 30,
            "partitions": [{"width": "3m", "wallType": "soft", "quantity": 2}],
            "accessoryQuantities": {"Chandelier": 2},
            "contactInfo": {"name": "Lucia Prado", "email": "lucia@example.mx"},
            "eventDate": "2026-11-14",
            "venue": "Hacienda San Bruno"
        }))
        .unwrap();

        assert_eq!(request.event_type, EventType::Banquet);
        assert_eq!(request.duration, 2);
        assert_eq!(request.partitions.len(), 1);
        assert_eq!(request.partitions[0].wall_type, WallType::Soft);
        assert_eq!(request.accessory_quantities["Chandelier"], 2);
        assert_eq!(request.contact_info.name.as_deref(), Some("Lucia Prado"));
        assert_eq!(
            request.structure_selection(),
            Some(StructureSelection::Pagoda {
                size: "4m".to_string(),
                wall_type: WallType::Hard,
            })
        );
    }

    #[test]
    fn test_duration_defaults_to_one() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "eventType": "Theater",
            "numberOfGuests": 20
        }))
        .unwrap();
        assert_eq!(request.duration, 1);
        assert_eq!(request.structure_selection(), None);
    }

    #[test]
    fn test_selection_requires_the_family_size_field() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "eventType": "Other",
            "customEventType": "Car Launch",
            "numberOfGuests": 80,
            "tentType": "gardenCottage"
        }))
        .unwrap();
        // Family selected but no size supplied: nothing to price.
        assert_eq!(request.structure_selection(), None);
        assert_eq!(request.event_label(), "Car Launch");
    }

    #[test]
    fn test_pagoda_wall_flag_defaults_to_soft() {
        let request: QuoteRequest = serde_json::from_value(json!({
            "eventType": "Cocktail",
            "numberOfGuests": 40,
            "tentType": "pagoda",
            "pagodaSize": "3m"
        }))
        .unwrap();
        assert_eq!(
            request.structure_selection(),
            Some(StructureSelection::Pagoda {
                size: "3m".to_string(),
                wall_type: WallType::Soft,
            })
        );
    }

    #[test]
    fn test_other_without_custom_label_stays_other() {
        assert_eq!(EventType::Other.display_label(None), "Other");
        assert_eq!(EventType::Other.display_label(Some("  ")), "Other");
        assert_eq!(EventType::Other.display_label(Some("Expo")), "Expo");
    }
}
