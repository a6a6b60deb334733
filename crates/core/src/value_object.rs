//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are the same value. To "modify"
/// one, build a new one with the new values.
///
/// In this workspace, filter criteria and chat turns are value objects; a
/// catalog record is an entity (identified by its SKU).
///
/// The trait requires:
/// - **Clone**: values are cheap to copy across render cycles
/// - **PartialEq**: values are compared attribute-by-attribute
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
