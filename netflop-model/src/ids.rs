use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ModelError;

/// Identifier assigned by the remote catalog.
///
/// Zero is never a usable identifier; [`CatalogId::new`] rejects it so that
/// every constructed id can be rendered and linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CatalogId(u64);

impl CatalogId {
    pub fn new(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatalogId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(CatalogId::new)
            .ok_or_else(|| ModelError::InvalidId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_an_id() {
        assert!(CatalogId::new(0).is_none());
        assert_eq!(CatalogId::new(42).map(|id| id.get()), Some(42));
    }

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(" 1399 ".parse::<CatalogId>().unwrap().get(), 1399);
        assert!("abc".parse::<CatalogId>().is_err());
        assert!("0".parse::<CatalogId>().is_err());
    }
}
