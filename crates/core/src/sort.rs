//! Sort primitives: presentation order for record collections.

use core::cmp::Ordering;
use core::str::FromStr;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Direction of a sort.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    /// Accepts `a` (ascending) or `d` (descending).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" => Ok(SortOrder::Ascending),
            "d" => Ok(SortOrder::Descending),
            other => Err(DomainError::validation(format!(
                "sort order must be 'a' or 'd', got {other:?}"
            ))),
        }
    }
}

/// Replaceable total-order comparator over one record kind.
///
/// Sorting is stable, so records with equal keys keep their relative order from
/// before the sort. Callers that need a deterministic order across arbitrary
/// mutation sequences must supply a comparator that is a total order over the
/// records they store.
pub struct Comparator<T> {
    cmp: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            cmp: Rc::clone(&self.cmp),
        }
    }
}

impl<T> core::fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}

impl<T: 'static> Comparator<T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self { cmp: Rc::new(cmp) }
    }

    /// Orders by an `Ord` key.
    pub fn by_key<K: Ord>(key: impl Fn(&T) -> K + 'static, order: SortOrder) -> Self {
        Self::new(move |a, b| order.apply(key(a).cmp(&key(b))))
    }

    /// Orders by a text field, ignoring ASCII case.
    pub fn by_text(text: impl Fn(&T) -> &str + 'static, order: SortOrder) -> Self {
        Self::new(move |a, b| {
            let (a, b) = (text(a), text(b));
            let folded = a
                .bytes()
                .map(|c| c.to_ascii_lowercase())
                .cmp(b.bytes().map(|c| c.to_ascii_lowercase()));
            order.apply(folded.then_with(|| a.cmp(b)))
        })
    }

    /// Breaks ties of `self` with `next`.
    pub fn then(self, next: Comparator<T>) -> Self {
        Self::new(move |a, b| self.compare(a, b).then_with(|| next.compare(a, b)))
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}
