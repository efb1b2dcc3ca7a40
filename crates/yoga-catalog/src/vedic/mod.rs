pub mod houses;
pub mod nakshatra;
pub mod planets;

pub use houses::{House, BENEFICIAL_HOUSES, HOUSE_COUNT};
pub use nakshatra::{NAKSHATRAS, NAKSHATRA_COUNT};
pub use planets::{Planet, ASPECTING_PLANETS, CLASSICAL_PLANETS, NAKSHATRA_PLANETS, NAVAGRAHA};
