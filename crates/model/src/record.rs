//! Per-kind presentation policy: sort keys and keyword search.

use core::str::FromStr;

use rhrh_core::{Comparator, DomainError, Entity, SortOrder};

/// A record kind that can be listed, sorted and searched.
pub trait Record: Entity {
    /// Field a user may sort this kind by.
    type SortKey: Copy + Eq + core::fmt::Debug + FromStr<Err = DomainError>;

    fn comparator(key: Self::SortKey, order: SortOrder) -> Comparator<Self>;

    /// Order applied at construction and by a sort reset.
    fn default_comparator() -> Comparator<Self>;

    /// Text fields a keyword search looks at, each split into words.
    fn search_fields(&self) -> Vec<&str>;
}

/// Keyword predicate: matches a record when any keyword equals (ignoring case)
/// a whole word of one of its searchable fields.
///
/// An empty keyword list matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainsKeywords {
    keywords: Vec<String>,
}

impl ContainsKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test<T: Record>(&self, record: &T) -> bool {
        let fields = record.search_fields();
        self.keywords.iter().any(|keyword| {
            fields
                .iter()
                .flat_map(|field| field.split_whitespace())
                .any(|word| word.eq_ignore_ascii_case(keyword))
        })
    }
}

/// Implements `FromStr` for a sort key enum from its short flags.
macro_rules! sort_keys {
    ($t:ident { $($flag:literal => $variant:ident),+ $(,)? }) => {
        impl core::str::FromStr for $t {
            type Err = rhrh_core::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($flag => Ok($t::$variant),)+
                    other => Err(rhrh_core::DomainError::validation(format!(
                        concat!("unknown ", stringify!($t), " {:?}; expected one of: ", $($flag, " ",)+),
                        other
                    ))),
                }
            }
        }
    };
}

pub(crate) use sort_keys;
