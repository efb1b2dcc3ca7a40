use std::fs;
use std::path::Path;

use crate::catalog::builder::Catalog;
use crate::error::{CatalogError, Result};

/// Default artifact name, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "generated-yogas.json";

/// Write the catalog as a JSON array, replacing anything already at `path`.
///
/// Missing parent directories are created.
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let json = catalog.to_json()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CatalogError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("wrote {} yogas to {}", catalog.len(), path.display());
    Ok(())
}
