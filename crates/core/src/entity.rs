//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The identifier is assigned by the caller at construction and never changes
/// afterwards. Repositories key and sort records by it, hence `Ord`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
