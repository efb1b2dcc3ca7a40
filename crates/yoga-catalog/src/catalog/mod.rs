pub mod builder;
pub mod generators;
pub mod ids;
pub mod policy;
pub mod record;
pub mod writer;

pub use builder::{build_catalog, build_catalog_with_progress, Catalog, CatalogSummary};
pub use generators::{
    aspect_combinations, aspect_yogas, conjunction_yogas, generate_category, house_lordship_yogas,
    nakshatra_yogas, planet_house_yogas,
};
pub use ids::IdAllocator;
pub use policy::AspectLimit;
pub use record::{YogaCategory, YogaKind, YogaRecord};
pub use writer::{write_catalog, DEFAULT_OUTPUT_PATH};
