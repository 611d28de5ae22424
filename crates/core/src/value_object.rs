//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes
/// are interchangeable (`Price` is one, an `Item` is not). They are immutable;
/// "changing" one means building a new value.
///
/// ```ignore
/// let a = Price::from_cents(4599);
/// let b = Price::from_cents(4599);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
