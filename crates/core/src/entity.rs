//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity's identifier is assigned at construction and never changes;
/// everything else about it may.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
