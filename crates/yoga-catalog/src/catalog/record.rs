//! Catalog record types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aspects::AspectType;
use crate::vedic::{House, Planet};

/// Pattern category. Declaration order is generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YogaCategory {
    HouseLordship,
    PlanetHouse,
    Conjunction,
    Aspect,
    Nakshatra,
}

impl YogaCategory {
    pub const ALL: [YogaCategory; 5] = [
        YogaCategory::HouseLordship,
        YogaCategory::PlanetHouse,
        YogaCategory::Conjunction,
        YogaCategory::Aspect,
        YogaCategory::Nakshatra,
    ];

    /// Value of the record's `type` field.
    pub fn tag(self) -> &'static str {
        match self {
            YogaCategory::HouseLordship => "house_lordship",
            YogaCategory::PlanetHouse => "planet_house",
            YogaCategory::Conjunction => "conjunction",
            YogaCategory::Aspect => "aspect",
            YogaCategory::Nakshatra => "nakshatra",
        }
    }

    /// Human label used in progress output.
    pub fn label(self) -> &'static str {
        match self {
            YogaCategory::HouseLordship => "house lordship",
            YogaCategory::PlanetHouse => "planet-house",
            YogaCategory::Conjunction => "conjunction",
            YogaCategory::Aspect => "aspect",
            YogaCategory::Nakshatra => "nakshatra",
        }
    }

    pub fn id_prefix(self) -> &'static str {
        match self {
            YogaCategory::HouseLordship => "HLORD",
            YogaCategory::PlanetHouse => "PH",
            YogaCategory::Conjunction => "CONJ",
            YogaCategory::Aspect => "ASP",
            YogaCategory::Nakshatra => "NAK",
        }
    }

    /// First counter value of the category band.
    pub fn first_counter(self) -> u32 {
        match self {
            YogaCategory::HouseLordship => 100,
            YogaCategory::PlanetHouse => 200,
            YogaCategory::Conjunction => 300,
            YogaCategory::Aspect => 400,
            YogaCategory::Nakshatra => 700,
        }
    }
}

impl fmt::Display for YogaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Category-specific fields, tagged by `type` in the serialized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum YogaKind {
    HouseLordship {
        lord_house: House,
        placed_house: House,
    },
    PlanetHouse {
        planet: Planet,
        house: House,
    },
    Conjunction {
        planet1: Planet,
        planet2: Planet,
    },
    Aspect {
        planet: Planet,
        from_house: House,
        to_house: House,
        aspect_type: AspectType,
    },
    Nakshatra {
        planet: Planet,
        nakshatra: String,
    },
}

impl YogaKind {
    pub fn category(&self) -> YogaCategory {
        match self {
            YogaKind::HouseLordship { .. } => YogaCategory::HouseLordship,
            YogaKind::PlanetHouse { .. } => YogaCategory::PlanetHouse,
            YogaKind::Conjunction { .. } => YogaCategory::Conjunction,
            YogaKind::Aspect { .. } => YogaCategory::Aspect,
            YogaKind::Nakshatra { .. } => YogaCategory::Nakshatra,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaRecord {
    pub id: String,
    pub name: String,
    // Serialized key order is id, name, type, category fields, effect.
    // Readers address fields by key, never by position.
    #[serde(flatten)]
    pub kind: YogaKind,
    pub effect: String,
}

impl YogaRecord {
    pub fn category(&self) -> YogaCategory {
        self.kind.category()
    }
}
