//! Thread-safe handle around an [`InMemoryRepository`].

use std::sync::{Arc, RwLock};

use charolis_core::Entity;

use super::{InMemoryRepository, Repository, RepositoryError, RepositoryResult};

/// Cloneable, lock-guarded repository for use across threads.
///
/// Writes take the write lock, so `create`'s uniqueness check and `update`'s
/// replacement are atomic per repository. Reads take the read lock and return
/// owned snapshots. There is no transaction spanning two repositories.
#[derive(Debug)]
pub struct SharedRepository<T: Entity> {
    inner: Arc<RwLock<InMemoryRepository<T>>>,
}

impl<T: Entity> Clone for SharedRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Entity> Default for SharedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> From<InMemoryRepository<T>> for SharedRepository<T> {
    fn from(repo: InMemoryRepository<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(repo)),
        }
    }
}

impl<T: Entity> SharedRepository<T> {
    pub fn new() -> Self {
        InMemoryRepository::new().into()
    }

    pub fn create(&self, item: T) -> RepositoryResult<()> {
        let mut repo = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        repo.create(item)
    }

    pub fn update(&self, item: T) -> RepositoryResult<T> {
        let mut repo = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        repo.update(item)
    }

    pub fn delete(&self, id: T::Id) -> RepositoryResult<Option<T>> {
        let mut repo = self.inner.write().map_err(|_| RepositoryError::Poisoned)?;
        Ok(repo.delete(id))
    }

    /// Run a read-only query under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&InMemoryRepository<T>) -> R) -> RepositoryResult<R> {
        let repo = self.inner.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(f(&repo))
    }

    pub fn len(&self) -> usize {
        self.with_read(|repo| repo.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity + Clone> SharedRepository<T> {
    pub fn read(&self, id: T::Id) -> Option<T> {
        self.with_read(|repo| repo.read(id).cloned()).ok().flatten()
    }

    /// Snapshot in insertion order.
    pub fn read_all(&self) -> Vec<T> {
        self.with_read(|repo| repo.read_all().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot by ascending id.
    pub fn sorted_by_id(&self) -> Vec<T> {
        self.with_read(|repo| repo.sorted_by_id().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::repository::UserRepositoryExt;
    use charolis_core::UserId;
    use charolis_users::{ContactDetails, User};

    fn user(id: u64, email: &str) -> User {
        User::registered(UserId::new(id), format!("user-{id}"), ContactDetails::new(email, "", ""))
    }

    #[test]
    fn concurrent_creates_of_same_id_admit_exactly_one() {
        let repo: SharedRepository<User> = SharedRepository::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                thread::spawn(move || repo.create(user(1, "same@x.com")).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn concurrent_distinct_creates_all_land() {
        let repo: SharedRepository<User> = SharedRepository::new();

        let handles: Vec<_> = (0..16u64)
            .map(|id| {
                let repo = repo.clone();
                thread::spawn(move || repo.create(user(id, "u@x.com")).unwrap())
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let ids: Vec<_> = repo.sorted_by_id().iter().map(|u| u.id().get()).collect();
        assert_eq!(ids, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn snapshots_and_queries_under_read_lock() {
        let repo = SharedRepository::from(
            InMemoryRepository::with_items([user(2, "b@x.com"), user(1, "A@x.com")]).unwrap(),
        );

        assert_eq!(repo.read(UserId::new(1)).unwrap().email(), "A@x.com");
        assert_eq!(repo.read_all().len(), 2);

        let matches = repo
            .with_read(|r| r.users_by_email("a@X.COM").count())
            .unwrap();
        assert_eq!(matches, 1);
    }

    #[test]
    fn update_and_delete_follow_repository_semantics() {
        let repo = SharedRepository::from(InMemoryRepository::with_items([user(1, "a@x.com")]).unwrap());

        assert!(matches!(
            repo.update(user(2, "b@x.com")),
            Err(RepositoryError::NotFound { .. })
        ));
        assert_eq!(repo.update(user(1, "new@x.com")).unwrap().email(), "a@x.com");
        assert_eq!(repo.delete(UserId::new(3)).unwrap(), None);
        assert!(repo.delete(UserId::new(1)).unwrap().is_some());
        assert!(repo.is_empty());
    }
}
