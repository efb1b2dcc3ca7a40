//! Category generators.
//!
//! Each generator enumerates a fixed product of vocabulary terms and emits one
//! record per combination. None of them perform I/O.

use crate::aspects::HouseAspect;
use crate::catalog::ids::IdAllocator;
use crate::catalog::policy::AspectLimit;
use crate::catalog::record::{YogaCategory, YogaKind, YogaRecord};
use crate::vedic::{House, Planet};
use crate::vocabulary::Vocabulary;

/// Lords of beneficial houses placed in other beneficial houses.
pub fn house_lordship_yogas(vocab: &Vocabulary) -> Vec<YogaRecord> {
    let mut ids = IdAllocator::new(YogaCategory::HouseLordship);
    let mut yogas = Vec::new();

    for &lord_house in vocab.beneficial_houses {
        for &placed_house in vocab.beneficial_houses {
            if lord_house == placed_house {
                continue;
            }
            yogas.push(YogaRecord {
                id: ids.next_id(),
                name: format!("{}th Lord in {}th House Yoga", lord_house, placed_house),
                effect: lordship_effect(lord_house, placed_house),
                kind: YogaKind::HouseLordship {
                    lord_house,
                    placed_house,
                },
            });
        }
    }

    log::debug!("house_lordship: {} records", ids.issued());
    yogas
}

fn lordship_effect(lord_house: House, placed_house: House) -> String {
    format!(
        "The lord of {}th ({}) placed in {}th ({}) creates connection between these life areas, bringing benefits through their combination.",
        lord_house,
        lord_house.meaning(),
        placed_house,
        placed_house.meaning()
    )
}

/// Each classical planet in each of the twelve houses.
pub fn planet_house_yogas(vocab: &Vocabulary) -> Vec<YogaRecord> {
    let mut ids = IdAllocator::new(YogaCategory::PlanetHouse);
    let mut yogas = Vec::new();

    for &planet in vocab.classical_planets {
        let Some(significations) = planet.significations() else {
            log::warn!("{} has no significations; skipped in planet-house yogas", planet);
            continue;
        };
        for house in House::all() {
            yogas.push(YogaRecord {
                id: ids.next_id(),
                name: format!("{} in {}th House", planet, house),
                effect: format!(
                    "{} ({}) influences {}th house ({})",
                    planet,
                    significations,
                    house,
                    house.meaning()
                ),
                kind: YogaKind::PlanetHouse { planet, house },
            });
        }
    }

    log::debug!("planet_house: {} records", ids.issued());
    yogas
}

/// Every unordered pair of distinct grahas, each pair once.
pub fn conjunction_yogas(vocab: &Vocabulary) -> Vec<YogaRecord> {
    let mut ids = IdAllocator::new(YogaCategory::Conjunction);
    let mut yogas = Vec::new();

    for (i, &planet1) in vocab.planets.iter().enumerate() {
        for &planet2 in &vocab.planets[i + 1..] {
            yogas.push(YogaRecord {
                id: ids.next_id(),
                name: format!("{}-{} Conjunction", planet1, planet2),
                effect: format!(
                    "Conjunction of {} and {} combines their energies, creating unique results in the house of placement.",
                    planet1, planet2
                ),
                kind: YogaKind::Conjunction { planet1, planet2 },
            });
        }
    }

    log::debug!("conjunction: {} records", ids.issued());
    yogas
}

/// Full aspect product in generation order: planet, source house, aspect row.
pub fn aspect_combinations(
    vocab: &Vocabulary,
) -> impl Iterator<Item = (Planet, House, HouseAspect)> + '_ {
    vocab.aspecting_planets.iter().flat_map(move |&planet| {
        House::all().flat_map(move |from_house| {
            vocab
                .aspects
                .iter()
                .map(move |&aspect| (planet, from_house, aspect))
        })
    })
}

/// Aspects cast by the aspecting planets, truncated to `limit`.
pub fn aspect_yogas(vocab: &Vocabulary, limit: AspectLimit) -> Vec<YogaRecord> {
    let mut ids = IdAllocator::new(YogaCategory::Aspect);

    let yogas: Vec<YogaRecord> = aspect_combinations(vocab)
        .take(limit.cap())
        .map(|(planet, from_house, aspect)| {
            let to_house = aspect.target(from_house);
            let aspect_type = aspect.aspect_type;
            YogaRecord {
                id: ids.next_id(),
                name: format!(
                    "{} {} aspect from {} to {}",
                    planet, aspect_type, from_house, to_house
                ),
                effect: format!("{} casts {} aspect", planet, aspect_type),
                kind: YogaKind::Aspect {
                    planet,
                    from_house,
                    to_house,
                    aspect_type,
                },
            }
        })
        .collect();

    log::debug!("aspect: {} records (limit {})", ids.issued(), limit);
    yogas
}

/// Each nakshatra paired with each nakshatra planet.
pub fn nakshatra_yogas(vocab: &Vocabulary) -> Vec<YogaRecord> {
    let mut ids = IdAllocator::new(YogaCategory::Nakshatra);
    let mut yogas = Vec::new();

    for nakshatra in vocab.nakshatras {
        for &planet in vocab.nakshatra_planets {
            yogas.push(YogaRecord {
                id: ids.next_id(),
                name: format!("{} in {} Nakshatra", planet, nakshatra),
                effect: format!(
                    "{} in {} nakshatra creates specific results",
                    planet, nakshatra
                ),
                kind: YogaKind::Nakshatra {
                    planet,
                    nakshatra: nakshatra.to_string(),
                },
            });
        }
    }

    log::debug!("nakshatra: {} records", ids.issued());
    yogas
}

/// Run the generator for one category.
pub fn generate_category(
    category: YogaCategory,
    vocab: &Vocabulary,
    aspect_limit: AspectLimit,
) -> Vec<YogaRecord> {
    match category {
        YogaCategory::HouseLordship => house_lordship_yogas(vocab),
        YogaCategory::PlanetHouse => planet_house_yogas(vocab),
        YogaCategory::Conjunction => conjunction_yogas(vocab),
        YogaCategory::Aspect => aspect_yogas(vocab, aspect_limit),
        YogaCategory::Nakshatra => nakshatra_yogas(vocab),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_house_lordship_pairs() {
        let vocab = Vocabulary::standard();
        let yogas = house_lordship_yogas(&vocab);
        assert_eq!(yogas.len(), 42);
        assert_eq!(yogas[0].id, "HLORD_100");
        assert_eq!(yogas[0].name, "1th Lord in 4th House Yoga");

        let pairs: HashSet<(u8, u8)> = yogas
            .iter()
            .map(|y| match y.kind {
                YogaKind::HouseLordship { lord_house, placed_house } => {
                    (lord_house.number(), placed_house.number())
                }
                _ => panic!("unexpected kind {:?}", y.kind),
            })
            .collect();
        assert_eq!(pairs.len(), 42);
        assert!(pairs.iter().all(|(l, p)| l != p));
    }

    #[test]
    fn test_lordship_effect_text() {
        let effect = lordship_effect(House::new(9).unwrap(), House::new(10).unwrap());
        assert_eq!(
            effect,
            "The lord of 9th (father, fortune, dharma, higher learning) placed in 10th (career, status, authority, karma) creates connection between these life areas, bringing benefits through their combination."
        );
    }

    #[test]
    fn test_planet_house_effect_text() {
        let vocab = Vocabulary::standard();
        let yogas = planet_house_yogas(&vocab);
        assert_eq!(yogas.len(), 84);
        assert_eq!(yogas[0].name, "Sun in 1th House");
        assert_eq!(
            yogas[0].effect,
            "Sun (authority, vitality, father, government) influences 1th house (self, personality, physical body)"
        );
        assert_eq!(yogas[83].id, "PH_283");
    }

    #[test]
    fn test_planet_house_skips_planets_without_significations() {
        let vocab = Vocabulary {
            classical_planets: &[Planet::Sun, Planet::Rahu],
            ..Vocabulary::standard()
        };
        let yogas = planet_house_yogas(&vocab);
        assert_eq!(yogas.len(), 12);
        assert!(yogas
            .iter()
            .all(|y| matches!(y.kind, YogaKind::PlanetHouse { planet: Planet::Sun, .. })));
    }

    #[test]
    fn test_conjunction_pairs() {
        let vocab = Vocabulary::standard();
        let yogas = conjunction_yogas(&vocab);
        assert_eq!(yogas.len(), 36);
        assert_eq!(yogas[0].name, "Sun-Moon Conjunction");
        assert_eq!(yogas[35].name, "Rahu-Ketu Conjunction");
    }

    #[test]
    fn test_aspect_limit_takes_prefix() {
        let vocab = Vocabulary::standard();
        assert_eq!(aspect_combinations(&vocab).count(), 240);

        let capped = aspect_yogas(&vocab, AspectLimit::default());
        assert_eq!(capped.len(), 200);
        assert_eq!(capped[0].id, "ASP_400");
        assert_eq!(capped[199].id, "ASP_599");

        let full = aspect_yogas(&vocab, AspectLimit::Unbounded);
        assert_eq!(full.len(), 240);
        assert_eq!(&full[..200], &capped[..]);

        assert!(aspect_yogas(&vocab, AspectLimit::First(0)).is_empty());
    }

    #[test]
    fn test_aspect_record_text() {
        let vocab = Vocabulary::standard();
        let yogas = aspect_yogas(&vocab, AspectLimit::First(1));
        assert_eq!(yogas[0].name, "Jupiter opposition aspect from 1 to 8");
        assert_eq!(yogas[0].effect, "Jupiter casts opposition aspect");
    }

    #[test]
    fn test_nakshatra_product() {
        let vocab = Vocabulary::standard();
        let yogas = nakshatra_yogas(&vocab);
        assert_eq!(yogas.len(), 162);
        assert_eq!(yogas[0].name, "Sun in Ashwini Nakshatra");
        assert_eq!(yogas[161].id, "NAK_861");
        assert_eq!(yogas[161].name, "Venus in Revati Nakshatra");
    }
}
