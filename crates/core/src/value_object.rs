//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal, and "modifying" one means building a new one.
///
/// - **Value Object**: `Money::from_minor(7000)` equals any other `70.00`
/// - **Entity**: two products with the same id are the same product, even when
///   their names differ
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
