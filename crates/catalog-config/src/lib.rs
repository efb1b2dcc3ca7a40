use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use yoga_catalog::{AspectLimit, DEFAULT_OUTPUT_PATH};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSettings {
    pub output: PathBuf,
    pub aspect_limit: AspectLimit,
    /// File the settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            aspect_limit: AspectLimit::default(),
            source: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AspectLimitToml {
    Count(usize),
    Word(String),
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogToml {
    #[serde(default)]
    output: Option<PathBuf>,
    #[serde(default)]
    aspect_limit: Option<AspectLimitToml>,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    catalog: Option<CatalogToml>,
}

/// Parse settings from TOML text, filling unset keys with defaults.
pub fn parse_catalog_settings(text: &str) -> anyhow::Result<CatalogSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse yogas.toml: {e}"))?;
    let mut settings = CatalogSettings::default();
    let Some(CatalogToml {
        output,
        aspect_limit,
    }) = root.catalog
    else {
        return Ok(settings);
    };

    if let Some(output) = output {
        if output.as_os_str().is_empty() {
            anyhow::bail!("catalog.output must not be empty");
        }
        settings.output = output;
    }
    if let Some(limit) = aspect_limit {
        settings.aspect_limit = match limit {
            AspectLimitToml::Count(n) => AspectLimit::First(n),
            AspectLimitToml::Word(word) => word
                .parse()
                .map_err(|e| anyhow::anyhow!("catalog.aspect_limit: {e}"))?,
        };
    }
    Ok(settings)
}

/// Load settings from `explicit` if given, else return built-in defaults.
///
/// No file is read unless one is named; a named file must exist.
pub fn load_catalog_settings(explicit: Option<&Path>) -> anyhow::Result<CatalogSettings> {
    let Some(path) = explicit else {
        return Ok(CatalogSettings::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
    let mut settings = parse_catalog_settings(&text)
        .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
    settings.source = Some(path.to_path_buf());
    Ok(settings)
}
