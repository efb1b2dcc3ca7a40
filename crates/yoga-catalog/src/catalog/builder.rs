use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::catalog::generators::generate_category;
use crate::catalog::policy::AspectLimit;
use crate::catalog::record::{YogaCategory, YogaRecord};
use crate::error::{CatalogError, Result};
use crate::vocabulary::Vocabulary;

/// Ordered, id-unique list of generated records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<YogaRecord>,
}

/// Record counts for a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    /// Keyed by category tag, so iteration is alphabetical.
    pub by_category: BTreeMap<&'static str, usize>,
}

impl Catalog {
    /// Wrap `records`, rejecting any repeated id.
    pub fn from_records(records: Vec<YogaRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[YogaRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<YogaRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> CatalogSummary {
        let mut by_category = BTreeMap::new();
        for record in &self.records {
            *by_category.entry(record.category().tag()).or_insert(0) += 1;
        }
        CatalogSummary {
            total: self.records.len(),
            by_category,
        }
    }

    /// Pretty-printed JSON array with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

/// Generate every category in order and assemble the catalog.
pub fn build_catalog(vocab: &Vocabulary, aspect_limit: AspectLimit) -> Result<Catalog> {
    build_catalog_with_progress(vocab, aspect_limit, |_| {})
}

/// Like [`build_catalog`], calling `on_start` before each category runs.
pub fn build_catalog_with_progress<F>(
    vocab: &Vocabulary,
    aspect_limit: AspectLimit,
    mut on_start: F,
) -> Result<Catalog>
where
    F: FnMut(YogaCategory),
{
    let mut records = Vec::new();
    for category in YogaCategory::ALL {
        on_start(category);
        records.extend(generate_category(category, vocab, aspect_limit));
    }
    Catalog::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::YogaKind;
    use crate::vedic::Planet;

    fn record(id: &str) -> YogaRecord {
        YogaRecord {
            id: id.to_string(),
            name: "n".to_string(),
            kind: YogaKind::Conjunction {
                planet1: Planet::Sun,
                planet2: Planet::Moon,
            },
            effect: "e".to_string(),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::from_records(vec![record("CONJ_300"), record("CONJ_300")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "CONJ_300"));
    }

    #[test]
    fn test_progress_called_in_generation_order() {
        let vocab = Vocabulary::standard();
        let mut seen = Vec::new();
        build_catalog_with_progress(&vocab, AspectLimit::default(), |c| seen.push(c)).unwrap();
        assert_eq!(seen, YogaCategory::ALL.to_vec());
    }

    #[test]
    fn test_summary_sorted_by_tag() {
        let vocab = Vocabulary::standard();
        let catalog = build_catalog(&vocab, AspectLimit::default()).unwrap();
        let summary = catalog.summary();

        let tags: Vec<&str> = summary.by_category.keys().copied().collect();
        assert_eq!(
            tags,
            vec!["aspect", "conjunction", "house_lordship", "nakshatra", "planet_house"]
        );
        assert_eq!(summary.total, 524);
        assert_eq!(summary.by_category.values().sum::<usize>(), summary.total);
    }
}
