use std::collections::BTreeMap;

use charolis_core::Entity;

use super::{Repository, RepositoryError, RepositoryResult, entity_name};

/// In-memory repository for a single entity type.
///
/// Items live in a `Vec` (insertion order) with a `BTreeMap` from id to position
/// beside it. Lookups are `O(log n)`, sorted iteration walks the map, and a
/// delete shifts the positions of every later item.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    items: Vec<T>,
    index: BTreeMap<T::Id, usize>,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Build a repository from `items`, creating them in order.
    ///
    /// Stops at the first duplicate id.
    pub fn with_items(items: impl IntoIterator<Item = T>) -> RepositoryResult<Self> {
        let mut repo = Self::new();
        for item in items {
            repo.create(item)?;
        }
        Ok(repo)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = T::Id> {
        self.items.iter().map(Entity::id)
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn create(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.index.contains_key(&id) {
            return Err(RepositoryError::duplicate_key::<T>(id));
        }

        self.index.insert(id, self.items.len());
        self.items.push(item);
        tracing::debug!(entity = entity_name::<T>(), %id, "created");
        Ok(())
    }

    fn read(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    fn read_all<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.items.iter()
    }

    fn update(&mut self, item: T) -> RepositoryResult<T> {
        let id = item.id();
        let Some(&pos) = self.index.get(&id) else {
            return Err(RepositoryError::not_found::<T>(id));
        };

        let previous = core::mem::replace(&mut self.items[pos], item);
        tracing::debug!(entity = entity_name::<T>(), %id, "updated");
        Ok(previous)
    }

    fn delete(&mut self, id: T::Id) -> Option<T> {
        let pos = self.index.remove(&id)?;
        let removed = self.items.remove(pos);

        for (offset, item) in self.items[pos..].iter().enumerate() {
            if let Some(slot) = self.index.get_mut(&item.id()) {
                *slot = pos + offset;
            }
        }

        tracing::debug!(entity = entity_name::<T>(), %id, "deleted");
        Some(removed)
    }

    fn sorted_by_id<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.index.values().map(|&pos| &self.items[pos])
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charolis_core::{Money, ProductId};
    use charolis_products::Product;

    fn product(id: u64, name: &str) -> Product {
        Product::new(ProductId::new(id), name, "", Money::from_minor(id * 100), true)
    }

    fn names<'a>(items: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        items.map(Product::name).collect()
    }

    #[test]
    fn create_then_read_returns_the_item() {
        let mut repo: InMemoryRepository<Product> = InMemoryRepository::new();
        let wand = product(1, "magic wand");

        repo.create(wand.clone()).unwrap();

        assert_eq!(repo.read(ProductId::new(1)), Some(&wand));
        assert_eq!(repo.len(), 1);
        assert!(repo.contains(ProductId::new(1)));
    }

    #[test]
    fn duplicate_create_fails_and_keeps_original() {
        let mut repo: InMemoryRepository<Product> = InMemoryRepository::new();
        repo.create(product(1, "magic wand")).unwrap();

        let err = repo.create(product(1, "impostor")).unwrap_err();

        assert_eq!(
            err,
            RepositoryError::DuplicateKey {
                entity: "Product",
                id: "1".to_string()
            }
        );
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.read(ProductId::new(1)).unwrap().name(), "magic wand");
    }

    #[test]
    fn read_of_unknown_id_is_none() {
        let repo: InMemoryRepository<Product> = InMemoryRepository::new();
        assert!(repo.read(ProductId::new(9)).is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn read_all_keeps_insertion_order() {
        let repo =
            InMemoryRepository::with_items([product(3, "c"), product(1, "a"), product(2, "b")])
                .unwrap();

        assert_eq!(names(repo.read_all()), vec!["c", "a", "b"]);
    }

    #[test]
    fn sorted_by_id_orders_without_touching_insertion_order() {
        let repo =
            InMemoryRepository::with_items([product(3, "c"), product(1, "a"), product(2, "b")])
                .unwrap();

        assert_eq!(names(repo.sorted_by_id()), vec!["a", "b", "c"]);
        assert_eq!(names(repo.read_all()), vec!["c", "a", "b"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut repo =
            InMemoryRepository::with_items([product(1, "a"), product(2, "b"), product(3, "c")])
                .unwrap();

        let previous = repo.update(product(2, "B")).unwrap();

        assert_eq!(previous.name(), "b");
        assert_eq!(names(repo.read_all()), vec!["a", "B", "c"]);
    }

    #[test]
    fn update_of_unknown_id_fails_and_changes_nothing() {
        let mut repo = InMemoryRepository::with_items([product(1, "a")]).unwrap();
        let before = repo.clone();

        let err = repo.update(product(5, "e")).unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { entity: "Product", .. }));
        assert_eq!(names(repo.read_all()), names(before.read_all()));
    }

    #[test]
    fn delete_removes_and_reindexes_later_items() {
        let mut repo =
            InMemoryRepository::with_items([product(1, "a"), product(2, "b"), product(3, "c")])
                .unwrap();

        let removed = repo.delete(ProductId::new(1)).unwrap();

        assert_eq!(removed.name(), "a");
        assert!(repo.read(ProductId::new(1)).is_none());
        assert_eq!(repo.read(ProductId::new(3)).unwrap().name(), "c");
        assert_eq!(names(repo.read_all()), vec!["b", "c"]);
        assert_eq!(names(repo.sorted_by_id()), vec!["b", "c"]);
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op() {
        let mut repo = InMemoryRepository::with_items([product(1, "a")]).unwrap();

        assert!(repo.delete(ProductId::new(42)).is_none());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn deleted_id_can_be_created_again() {
        let mut repo = InMemoryRepository::with_items([product(1, "a"), product(2, "b")]).unwrap();
        repo.delete(ProductId::new(1));

        repo.create(product(1, "a2")).unwrap();

        assert_eq!(names(repo.read_all()), vec!["b", "a2"]);
        assert_eq!(names(repo.sorted_by_id()), vec!["a2", "b"]);
    }

    #[test]
    fn with_items_rejects_duplicates() {
        let err = InMemoryRepository::with_items([product(1, "a"), product(1, "b")]).unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateKey { .. }));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Create(u64),
            Update(u64),
            Delete(u64),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u64..32).prop_map(Op::Create),
                (0u64..32).prop_map(Op::Update),
                (0u64..32).prop_map(Op::Delete),
            ]
        }

        proptest! {
            /// Property: sorted_by_id is ascending and a permutation of read_all.
            #[test]
            fn sorted_is_ascending_permutation(ids in proptest::collection::hash_set(0u64..1000, 0..64)) {
                let repo = InMemoryRepository::with_items(
                    ids.iter().map(|&id| product(id, "p")),
                ).unwrap();

                let sorted: Vec<_> = repo.sorted_by_id().map(Entity::id).collect();
                prop_assert!(sorted.windows(2).all(|w| w[0] < w[1]));

                let mut all: Vec<_> = repo.read_all().map(Entity::id).collect();
                all.sort();
                prop_assert_eq!(all, sorted);
            }

            /// Property: the repository behaves like a Vec with linear-scan semantics.
            #[test]
            fn matches_linear_scan_model(ops in proptest::collection::vec(op(), 0..100)) {
                let mut repo: InMemoryRepository<Product> = InMemoryRepository::new();
                let mut model: Vec<(u64, u32)> = Vec::new();
                let mut revision = 0u32;

                for op in ops {
                    revision += 1;
                    match op {
                        Op::Create(id) => {
                            let exists = model.iter().any(|(m, _)| *m == id);
                            let result = repo.create(product_rev(id, revision));
                            prop_assert_eq!(result.is_err(), exists);
                            if !exists {
                                model.push((id, revision));
                            }
                        }
                        Op::Update(id) => {
                            let pos = model.iter().position(|(m, _)| *m == id);
                            let result = repo.update(product_rev(id, revision));
                            prop_assert_eq!(result.is_ok(), pos.is_some());
                            if let Some(pos) = pos {
                                model[pos].1 = revision;
                            }
                        }
                        Op::Delete(id) => {
                            let pos = model.iter().position(|(m, _)| *m == id);
                            prop_assert_eq!(repo.delete(ProductId::new(id)).is_some(), pos.is_some());
                            if let Some(pos) = pos {
                                model.remove(pos);
                            }
                        }
                    }
                }

                let actual: Vec<_> = repo
                    .read_all()
                    .map(|p| (p.id().get(), p.price().minor() as u32))
                    .collect();
                prop_assert_eq!(&actual, &model);

                for (id, rev) in &model {
                    let stored = repo.read(ProductId::new(*id)).unwrap();
                    prop_assert_eq!(stored.price().minor() as u32, *rev);
                }
            }
        }

        fn product_rev(id: u64, revision: u32) -> Product {
            Product::new(ProductId::new(id), "p", "", Money::from_minor(u64::from(revision)), true)
        }
    }
}
