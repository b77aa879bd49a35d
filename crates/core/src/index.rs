//! One-based positions into a displayed list.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A position in a displayed list.
///
/// Users see one-based positions; collections are zero-based. Keeping both behind
/// one type avoids off-by-one mixups at call sites.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Index(usize);

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    /// Returns `None` for zero.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl core::fmt::Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.one_based(), f)
    }
}

impl FromStr for Index {
    type Err = DomainError;

    /// Parses a one-based, strictly positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s.trim().parse().map_err(|_| {
            DomainError::validation(format!("index is not a non-zero unsigned integer: {s:?}"))
        })?;
        Index::from_one_based(n)
            .ok_or_else(|| DomainError::validation("index is not a non-zero unsigned integer: \"0\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_and_zero_based_agree() {
        let idx = Index::from_one_based(3).unwrap();
        assert_eq!(idx.zero_based(), 2);
        assert_eq!(idx.one_based(), 3);
        assert_eq!(Index::from_zero_based(2), idx);
    }

    #[test]
    fn zero_is_not_a_valid_one_based_index() {
        assert!(Index::from_one_based(0).is_none());
        assert!(matches!("0".parse::<Index>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn parses_trimmed_positive_integers() {
        assert_eq!(" 7 ".parse::<Index>().unwrap().one_based(), 7);
        assert!("-1".parse::<Index>().is_err());
        assert!("a".parse::<Index>().is_err());
    }
}
