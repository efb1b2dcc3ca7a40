//! The twelve houses (bhavas) and their significations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

pub const HOUSE_COUNT: u8 = 12;

const HOUSE_MEANINGS: [&str; 12] = [
    "self, personality, physical body",
    "wealth, family, speech",
    "siblings, courage, communication",
    "mother, home, education, vehicles",
    "children, intelligence, creativity",
    "enemies, diseases, debts, service",
    "spouse, partnerships, business",
    "longevity, transformation, hidden wealth",
    "father, fortune, dharma, higher learning",
    "career, status, authority, karma",
    "gains, income, friendships, aspirations",
    "losses, expenses, spirituality, foreign lands",
];

/// A house number, always within 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

/// Lords of these houses are treated as beneficial placements.
pub const BENEFICIAL_HOUSES: &[House] = &[
    House(1),
    House(4),
    House(5),
    House(7),
    House(9),
    House(10),
    House(11),
];

impl House {
    pub fn new(number: u8) -> Result<Self, CatalogError> {
        if (1..=HOUSE_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CatalogError::InvalidHouse(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn meaning(self) -> &'static str {
        HOUSE_MEANINGS[(self.0 - 1) as usize]
    }

    /// Move `offset` houses forward from this one, wrapping past the 12th.
    ///
    /// Computed as `((n + offset - 1) mod 12) + 1`.
    pub fn offset_by(self, offset: u8) -> House {
        let zero_based = (self.0 as u16 + offset as u16 - 1) % HOUSE_COUNT as u16;
        House(zero_based as u8 + 1)
    }

    /// All twelve houses in order.
    pub fn all() -> impl Iterator<Item = House> {
        (1..=HOUSE_COUNT).map(House)
    }
}

impl TryFrom<u8> for House {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        House::new(value)
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.0
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
