//! Entity trait: the identity policy of one record kind.

use serde::{Deserialize, Serialize};

/// The four record kinds tracked by the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Employee,
    Supplier,
    Reservation,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Customer,
        EntityKind::Employee,
        EntityKind::Supplier,
        EntityKind::Reservation,
    ];

    /// Lowercase singular noun used in user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Employee => "employee",
            EntityKind::Supplier => "supplier",
            EntityKind::Reservation => "reservation",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.noun())
    }
}

/// A record kind together with its two equivalence relations.
///
/// - **Strong equality** is `PartialEq`: equal on every field. Used to locate the
///   exact record to remove or replace.
/// - **Weak identity** is [`Entity::is_same`]: equal on the subset of fields that
///   make two records "the same real-world entity". Used to reject duplicates.
///
/// Weak identity must be an equivalence relation and must be implied by strong
/// equality: `a == b` implies `a.is_same(b)`.
pub trait Entity: Clone + PartialEq + core::fmt::Debug + 'static {
    /// Kind tag used in error messages and logs.
    const KIND: EntityKind;

    /// Whether collections of this kind reject weakly identical records.
    const UNIQUE: bool = true;

    /// Weak identity.
    fn is_same(&self, other: &Self) -> bool;
}
