//! Read-side query extensions for user and product repositories.

use charolis_core::ProductId;
use charolis_products::Product;
use charolis_users::User;

use super::{InMemoryRepository, Repository, RepositoryError, RepositoryResult};

pub type UserRepository = InMemoryRepository<User>;
pub type ProductRepository = InMemoryRepository<Product>;

/// User lookups available on any user repository.
pub trait UserRepositoryExt: Repository<User> {
    /// Users whose email equals `email`, ignoring case, in repository order.
    fn users_by_email<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a User> + 'a {
        self.read_all().filter(move |user| user.has_email(email))
    }
}

impl<R> UserRepositoryExt for R where R: Repository<User> + ?Sized {}

/// Product lookups available on any product repository.
pub trait ProductRepositoryExt: Repository<Product> {
    /// Products that can currently be ordered, in repository order.
    fn available_products(&self) -> impl Iterator<Item = &Product> {
        self.read_all().filter(|product| product.is_available())
    }

    /// Flip the availability flag of a stored product by full-record replacement.
    ///
    /// Returns the record as it was before the change.
    fn set_availability(&mut self, id: ProductId, available: bool) -> RepositoryResult<Product> {
        let mut product = self
            .read(id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found::<Product>(id))?;
        product.set_available(available);
        self.update(product)
    }
}

impl<R> ProductRepositoryExt for R where R: Repository<Product> + ?Sized {}
