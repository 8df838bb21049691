//! Entity trait: identity that survives across snapshots.

/// Something the backend identifies by a stable row id.
pub trait Entity {
    /// Strongly-typed identifier (always a small `Copy` newtype).
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Linear lookup by id, returning the first match in slice order.
///
/// Server listings are small and already ordered, so a scan keeps the
/// caller's ordering intact without an index to maintain.
pub fn find_by_id<E: Entity>(items: &[E], id: E::Id) -> Option<&E> {
    items.iter().find(|item| item.id() == id)
}
