//! Procedural catalog of Vedic yoga patterns.
//!
//! Records are produced by enumerating fixed vocabularies (grahas, houses,
//! aspects, nakshatras) and serialized as a single JSON array.

pub mod aspects;
pub mod catalog;
pub mod error;
pub mod vedic;
pub mod vocabulary;

pub use catalog::{
    build_catalog, build_catalog_with_progress, write_catalog, AspectLimit, Catalog,
    CatalogSummary, YogaCategory, YogaKind, YogaRecord, DEFAULT_OUTPUT_PATH,
};
pub use error::{CatalogError, Result};
pub use vocabulary::Vocabulary;
