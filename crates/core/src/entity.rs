//! Entity trait: records that are told apart by a key rather than by value.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identity key (e.g. a product code).
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when `other` carries the same identity, regardless of other attributes.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
