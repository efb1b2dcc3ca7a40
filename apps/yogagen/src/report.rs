use std::io::{self, Write};
use std::path::Path;

use yoga_catalog::{CatalogSummary, YogaCategory};

pub fn write_progress(out: &mut impl Write, category: YogaCategory) -> io::Result<()> {
    writeln!(out, "Generating {} yogas...", category.label())
}

pub fn write_total(out: &mut impl Write, total: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total yogas generated: {}", total)
}

pub fn write_saved(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "Saved to {}", path.display())
}

/// Per-category counts, alphabetical by tag.
pub fn write_summary(out: &mut impl Write, summary: &CatalogSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Yogas by type:")?;
    for (tag, count) in &summary.by_category {
        writeln!(out, "  {}: {}", tag, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_summary_table() -> anyhow::Result<()> {
        let mut by_category = BTreeMap::new();
        by_category.insert("nakshatra", 162);
        by_category.insert("aspect", 200);
        let summary = CatalogSummary {
            total: 362,
            by_category,
        };

        let mut out = Vec::new();
        write_summary(&mut out, &summary)?;
        assert_eq!(
            String::from_utf8(out)?,
            "\nYogas by type:\n  aspect: 200\n  nakshatra: 162\n"
        );
        Ok(())
    }

    #[test]
    fn test_progress_labels() -> anyhow::Result<()> {
        let mut out = Vec::new();
        for category in YogaCategory::ALL {
            write_progress(&mut out, category)?;
        }
        assert_eq!(
            String::from_utf8(out)?,
            "Generating house lordship yogas...\n\
             Generating planet-house yogas...\n\
             Generating conjunction yogas...\n\
             Generating aspect yogas...\n\
             Generating nakshatra yogas...\n"
        );
        Ok(())
    }
}
