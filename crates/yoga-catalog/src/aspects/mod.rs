pub mod types;

pub use types::{AspectType, HouseAspect, HOUSE_ASPECTS};
