//! `charolis-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no output).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ProductId, UserId};
pub use money::Money;
pub use value_object::ValueObject;
