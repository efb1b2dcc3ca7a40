//! Read-only lookup tables shared by every generator.

use crate::aspects::{HouseAspect, HOUSE_ASPECTS};
use crate::vedic::{
    House, Planet, ASPECTING_PLANETS, BENEFICIAL_HOUSES, CLASSICAL_PLANETS, NAKSHATRAS,
    NAKSHATRA_PLANETS, NAVAGRAHA,
};

/// Fixed domains the catalog enumerates over.
///
/// Built once by the driver and handed to the generators by reference.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub planets: &'static [Planet],
    pub classical_planets: &'static [Planet],
    pub aspecting_planets: &'static [Planet],
    pub nakshatra_planets: &'static [Planet],
    pub beneficial_houses: &'static [House],
    pub aspects: &'static [HouseAspect],
    pub nakshatras: &'static [&'static str],
}

impl Vocabulary {
    pub fn standard() -> Self {
        Self {
            planets: NAVAGRAHA,
            classical_planets: CLASSICAL_PLANETS,
            aspecting_planets: ASPECTING_PLANETS,
            nakshatra_planets: NAKSHATRA_PLANETS,
            beneficial_houses: BENEFICIAL_HOUSES,
            aspects: HOUSE_ASPECTS,
            nakshatras: NAKSHATRAS,
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_domain_sizes() {
        let vocab = Vocabulary::standard();
        assert_eq!(vocab.planets.len(), 9);
        assert_eq!(vocab.classical_planets.len(), 7);
        assert_eq!(vocab.aspecting_planets.len(), 4);
        assert_eq!(vocab.nakshatra_planets.len(), 6);
        assert_eq!(vocab.beneficial_houses.len(), 7);
        assert_eq!(vocab.aspects.len(), 5);
        assert_eq!(vocab.nakshatras.len(), 27);
    }
}
