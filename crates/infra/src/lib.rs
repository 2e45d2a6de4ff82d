//! Infrastructure layer: in-memory storage for shop entities.

pub mod repository;

pub use repository::{
    InMemoryRepository, ProductRepository, ProductRepositoryExt, Repository, RepositoryError,
    RepositoryResult, SharedRepository, UserRepository, UserRepositoryExt,
};
