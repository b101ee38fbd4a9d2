//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are interchangeable. In this workspace that covers locations, item
/// kinds and the stock policy, while items themselves are identified by
/// their persistence-assigned `ItemId`.
///
/// The trait requires:
/// - **Clone**: value objects are copied freely between views
/// - **PartialEq**: compared by attribute values
/// - **Debug**: useful in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
