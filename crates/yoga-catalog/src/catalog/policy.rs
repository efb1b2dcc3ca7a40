use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// How much of the planet × house × aspect product the aspect generator emits.
///
/// Truncation always takes a prefix of the product in generation order
/// (planet, then source house, then aspect row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectLimit {
    First(usize),
    Unbounded,
}

impl AspectLimit {
    /// Keeps the aspect ids inside the 400 band.
    pub const DEFAULT_CAP: usize = 200;

    pub fn cap(self) -> usize {
        match self {
            AspectLimit::First(n) => n,
            AspectLimit::Unbounded => usize::MAX,
        }
    }
}

impl Default for AspectLimit {
    fn default() -> Self {
        AspectLimit::First(Self::DEFAULT_CAP)
    }
}

impl FromStr for AspectLimit {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("unbounded") {
            return Ok(AspectLimit::Unbounded);
        }
        trimmed
            .parse::<usize>()
            .map(AspectLimit::First)
            .map_err(|_| {
                CatalogError::InvalidAspectLimit(format!(
                    "expected a record count or \"all\", got: {}",
                    s
                ))
            })
    }
}

impl fmt::Display for AspectLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectLimit::First(n) => write!(f, "{}", n),
            AspectLimit::Unbounded => f.write_str("all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aspect_limit() {
        assert_eq!("150".parse::<AspectLimit>().unwrap(), AspectLimit::First(150));
        assert_eq!("all".parse::<AspectLimit>().unwrap(), AspectLimit::Unbounded);
        assert_eq!(" ALL ".parse::<AspectLimit>().unwrap(), AspectLimit::Unbounded);
        assert!("-3".parse::<AspectLimit>().is_err());
        assert!("many".parse::<AspectLimit>().is_err());
    }

    #[test]
    fn test_default_cap() {
        assert_eq!(AspectLimit::default().cap(), 200);
        assert_eq!(AspectLimit::default().to_string(), "200");
    }
}
