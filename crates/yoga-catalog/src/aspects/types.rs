use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vedic::House;

/// Aspect type between two houses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Opposition,
    Square,
    Trine,
}

impl AspectType {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectType::Opposition => "opposition",
            AspectType::Square => "square",
            AspectType::Trine => "trine",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A house-to-house aspect relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseAspect {
    /// Angular distance label carried with the aspect (in signs)
    pub distance: u8,
    /// Houses moved forward to reach the aspected house
    pub target_offset: u8,
    pub aspect_type: AspectType,
}

impl HouseAspect {
    /// House receiving this aspect when cast from `from`.
    pub fn target(&self, from: House) -> House {
        from.offset_by(self.target_offset)
    }
}

/// Aspects enumerated by the catalog, in generation order.
pub const HOUSE_ASPECTS: &[HouseAspect] = &[
    HouseAspect { distance: 1, target_offset: 7, aspect_type: AspectType::Opposition },
    HouseAspect { distance: 1, target_offset: 4, aspect_type: AspectType::Square },
    HouseAspect { distance: 1, target_offset: 5, aspect_type: AspectType::Trine },
    HouseAspect { distance: 1, target_offset: 9, aspect_type: AspectType::Trine },
    HouseAspect { distance: 1, target_offset: 10, aspect_type: AspectType::Square },
];
