//! Identity-keyed, ordered entity storage.
//!
//! Every repository keeps two orders at once:
//! - **insertion order**, used by [`Repository::read_all`];
//! - **id order**, used by [`Repository::sorted_by_id`].
//!
//! Missing ids are not errors for reads and deletes (`None`), but they are for
//! updates ([`RepositoryError::NotFound`]), since an update of nothing is almost
//! always a caller bug.

pub mod in_memory;
pub mod queries;
pub mod shared;

use thiserror::Error;

use charolis_core::Entity;

pub use in_memory::InMemoryRepository;
pub use queries::{ProductRepository, ProductRepositoryExt, UserRepository, UserRepositoryExt};
pub use shared::SharedRepository;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// `create` was called with an id that is already stored.
    #[error("duplicate key: {entity} {id} already exists")]
    DuplicateKey { entity: &'static str, id: String },

    /// `update` was called with an id that is not stored.
    #[error("not found: {entity} {id}")]
    NotFound { entity: &'static str, id: String },

    /// A shared repository lock was poisoned by a panicking writer.
    #[error("repository lock poisoned")]
    Poisoned,
}

impl RepositoryError {
    pub fn duplicate_key<T: Entity>(id: T::Id) -> Self {
        Self::DuplicateKey {
            entity: entity_name::<T>(),
            id: id.to_string(),
        }
    }

    pub fn not_found<T: Entity>(id: T::Id) -> Self {
        Self::NotFound {
            entity: entity_name::<T>(),
            id: id.to_string(),
        }
    }
}

/// Short type name used in errors and log fields (`Product`, not the full path).
pub(crate) fn entity_name<T>() -> &'static str {
    let full = core::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Ordered collection of entities keyed by [`Entity::id`].
///
/// Iterators borrow the repository, so it cannot be mutated while one is alive.
pub trait Repository<T: Entity> {
    /// Append `item`. Fails with `DuplicateKey` (and stores nothing) if its id is taken.
    fn create(&mut self, item: T) -> RepositoryResult<()>;

    fn read(&self, id: T::Id) -> Option<&T>;

    /// All items in insertion order.
    fn read_all<'a>(&'a self) -> impl Iterator<Item = &'a T> where T: 'a;

    /// Replace the stored record with the same id, keeping its position.
    ///
    /// Returns the replaced record. Fails with `NotFound` (and changes nothing)
    /// if the id is unknown.
    fn update(&mut self, item: T) -> RepositoryResult<T>;

    /// Remove and return the record with `id`; `None` if there was none.
    fn delete(&mut self, id: T::Id) -> Option<T>;

    /// All items by ascending id. Insertion order is left untouched.
    fn sorted_by_id<'a>(&'a self) -> impl Iterator<Item = &'a T> where T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: T::Id) -> bool {
        self.read(id).is_some()
    }
}
