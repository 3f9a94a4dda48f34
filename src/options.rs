use crate::error::HeapError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Slots allocated up front by an unbounded heap, sentinel included.
pub const DEFAULT_SLOTS: usize = 32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeapOptions {
    /// Maximum number of live elements. `None` means the heap grows without bound.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u32>,
}

impl HeapOptions {
    pub fn unbounded() -> Self {
        Self { limit: None }
    }
    pub fn bounded(limit: u32) -> Self {
        Self { limit: Some(limit) }
    }
    pub fn check(&self) -> Result<(), HeapError> {
        self.validate().map_err(|e| HeapError::InvalidArgument {
            reason: e.to_string(),
        })
    }
    pub fn initial_slots(&self) -> Result<usize, HeapError> {
        initial_slots(self.limit.map(|limit| limit as usize))
    }
}

/// Number of storage slots a heap with `limit` is laid out over.
///
/// A bounded heap keeps one slot for the sentinel and one for the element
/// that is about to be evicted.
pub fn initial_slots(limit: Option<usize>) -> Result<usize, HeapError> {
    match limit {
        Some(0) => Err(HeapError::InvalidArgument {
            reason: "limit must be positive".to_string(),
        }),
        Some(limit) => limit
            .checked_add(2)
            .ok_or_else(|| HeapError::InvalidArgument {
                reason: format!("limit {limit} is too large"),
            }),
        None => Ok(DEFAULT_SLOTS),
    }
}

impl FromStr for HeapOptions {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let options = toml::from_str::<HeapOptions>(s).map_err(|e| HeapError::InvalidArgument {
            reason: e.to_string(),
        })?;
        options.check()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accept() {
        assert_eq!("".parse::<HeapOptions>(), Ok(HeapOptions::unbounded()));
        assert_eq!("limit = 16".parse::<HeapOptions>(), Ok(HeapOptions::bounded(16)));
        assert_eq!("limit = 1".parse::<HeapOptions>(), Ok(HeapOptions::bounded(1)));
    }

    #[test]
    fn parse_reject() {
        for s in ["limit = 0", "limit = -3", "limit = \"8\"", "size = 8", "limit ="] {
            let ret = s.parse::<HeapOptions>();
            assert!(
                matches!(ret, Err(HeapError::InvalidArgument { .. })),
                "at options {:?}: {:?}",
                s,
                ret
            );
        }
    }

    #[test]
    fn check_zero_limit() {
        assert!(HeapOptions::bounded(0).check().is_err());
        assert!(HeapOptions::bounded(3).check().is_ok());
        assert!(HeapOptions::unbounded().check().is_ok());
    }

    #[test]
    fn slots() {
        assert_eq!(HeapOptions::unbounded().initial_slots(), Ok(DEFAULT_SLOTS));
        assert_eq!(HeapOptions::bounded(3).initial_slots(), Ok(5));
        assert!(HeapOptions::bounded(0).initial_slots().is_err());
        assert_eq!(initial_slots(Some(usize::MAX - 2)), Ok(usize::MAX));
        assert!(matches!(
            initial_slots(Some(usize::MAX)),
            Err(HeapError::InvalidArgument { .. })
        ));
        assert!(matches!(
            initial_slots(Some(usize::MAX - 1)),
            Err(HeapError::InvalidArgument { .. })
        ));
    }
}
