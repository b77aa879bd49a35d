//! `rhrh-core` — record-management building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no presentation):
//! the identity policy every record kind implements, the domain error model,
//! one-based display indices and the sort primitives used by the collections.

pub mod entity;
pub mod error;
pub mod index;
pub mod sort;
pub mod value_object;

pub use entity::{Entity, EntityKind};
pub use error::{DomainError, DomainResult};
pub use index::Index;
pub use sort::{Comparator, SortOrder};
pub use value_object::ValueObject;
