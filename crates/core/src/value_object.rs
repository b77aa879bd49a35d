//! Value object trait: equality by value, not identity.
//!
//! Every record field (name, phone, email, ...) is a value object. Records are
//! built from them and compared field by field for strong equality.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Construction is the only place a value is validated, so a
/// value object that exists is always well-formed.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Phone(String);
///
/// impl ValueObject for Phone {
///     const CONSTRAINTS: &'static str = "Phone numbers should only contain numbers";
/// }
///
/// assert_eq!(Phone("91234567".into()), Phone("91234567".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Message shown when a raw value fails validation.
    const CONSTRAINTS: &'static str;
}
