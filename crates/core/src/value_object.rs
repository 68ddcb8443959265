//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. To
/// "modify" one, build a new one. Identifiers such as `CategoryId` are value
/// objects; the `Category` that carries one is an entity.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Slug(String);
///
/// impl ValueObject for Slug {}
///
/// assert_eq!(Slug("movie".into()), Slug("movie".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
