//! The nine grahas used by the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine grahas in traditional weekday order followed by the lunar nodes.
pub const NAVAGRAHA: &[Planet] = &[
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
];

/// The seven visible planets (no nodes).
pub const CLASSICAL_PLANETS: &[Planet] = &[
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
];

/// Planets with special (non-seventh) drishti, plus Rahu.
pub const ASPECTING_PLANETS: &[Planet] = &[
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Mars,
    Planet::Rahu,
];

/// Planets paired with nakshatras (Saturn and the nodes are left out).
pub const NAKSHATRA_PLANETS: &[Planet] = &[
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
];

impl Planet {
    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Mercury => "Mercury",
            Planet::Jupiter => "Jupiter",
            Planet::Venus => "Venus",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    /// Karakatvas of the classical planets. The nodes have none here.
    pub fn significations(self) -> Option<&'static str> {
        match self {
            Planet::Sun => Some("authority, vitality, father, government"),
            Planet::Moon => Some("emotions, mother, public, mind"),
            Planet::Mars => Some("courage, energy, siblings, property"),
            Planet::Mercury => Some("intelligence, communication, business"),
            Planet::Jupiter => Some("wisdom, wealth, children, fortune"),
            Planet::Venus => Some("luxury, arts, spouse, vehicles"),
            Planet::Saturn => Some("discipline, longevity, servants, delays"),
            Planet::Rahu | Planet::Ketu => None,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classical_planets_have_significations() {
        for planet in CLASSICAL_PLANETS {
            assert!(planet.significations().is_some(), "{planet} missing significations");
        }
        assert!(Planet::Rahu.significations().is_none());
        assert!(Planet::Ketu.significations().is_none());
    }

    #[test]
    fn test_serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&Planet::Mercury).unwrap(), "\"Mercury\"");
    }
}
