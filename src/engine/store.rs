use crate::core::catalogue::Catalogue;
use crate::core::dish::Dish;
use crate::core::storage::{CsvStorage, StorageEngine};
use crate::engine::error::CatalogueError;
use std::path::PathBuf;

/// The catalogue together with the storage it is persisted to.
///
/// Every successful mutation rewrites the whole table exactly once. When
/// the rewrite fails the in-memory catalogue is restored to its state
/// before the mutation, so memory never runs ahead of disk.
pub struct CatalogueStore {
    catalogue: Catalogue,
    storage: Box<dyn StorageEngine>,
}

impl CatalogueStore {
    /// Load the catalogue from `storage`, starting empty if nothing is stored yet.
    pub fn load(storage: Box<dyn StorageEngine>) -> Result<Self, CatalogueError> {
        let location = storage.location();
        let catalogue = match storage.load_catalogue() {
            Ok(Some(catalogue)) => catalogue,
            Ok(None) => {
                tracing::info!(location = %location, "No stored catalogue, starting empty");
                Catalogue::new()
            }
            Err(source) => return Err(CatalogueError::StorageRead { location, source }),
        };

        tracing::info!(location = %location, dishes = catalogue.len(), "Loaded catalogue");
        Ok(Self { catalogue, storage })
    }

    /// Load from a CSV file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogueError> {
        Self::load(Box::new(CsvStorage::new(path)))
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn dishes(&self) -> &[Dish] {
        self.catalogue.dishes()
    }

    /// First dish with the given name
    pub fn get(&self, name: &str) -> Option<&Dish> {
        self.catalogue.find(name)
    }

    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    /// Append a dish and persist. Names are not checked for emptiness or uniqueness.
    pub fn insert(&mut self, dish: Dish) -> Result<(), CatalogueError> {
        let snapshot = self.catalogue.clone();
        let name = dish.name.clone();
        self.catalogue.push(dish);
        self.commit(snapshot)?;
        tracing::info!(dish = %name, "Inserted dish");
        Ok(())
    }

    /// Replace every dish named `name` with `dish` and persist.
    ///
    /// Fails with [`CatalogueError::NotFound`] without touching storage when
    /// no dish has that name. Returns the number of rows replaced.
    pub fn update(&mut self, name: &str, dish: Dish) -> Result<usize, CatalogueError> {
        if !self.catalogue.contains(name) {
            return Err(CatalogueError::NotFound(name.to_string()));
        }

        let snapshot = self.catalogue.clone();
        let replaced = self.catalogue.replace_named(name, &dish);
        self.commit(snapshot)?;
        tracing::info!(dish = %name, new_name = %dish.name, rows = replaced, "Updated dish");
        Ok(replaced)
    }

    /// Remove every dish named `name` and persist. Returns the number of rows removed.
    ///
    /// A name with no match is not an error; nothing is written in that case.
    pub fn delete(&mut self, name: &str) -> Result<usize, CatalogueError> {
        if !self.catalogue.contains(name) {
            tracing::debug!(dish = %name, "Delete matched no rows");
            return Ok(0);
        }

        let snapshot = self.catalogue.clone();
        let removed = self.catalogue.remove_named(name);
        self.commit(snapshot)?;
        tracing::info!(dish = %name, rows = removed, "Deleted dish");
        Ok(removed)
    }

    /// Write the whole catalogue to storage, header first.
    pub fn persist(&self) -> Result<(), CatalogueError> {
        self.storage
            .save_catalogue(&self.catalogue)
            .map_err(|source| CatalogueError::StorageWrite {
                location: self.storage.location(),
                source,
            })?;
        tracing::debug!(
            location = %self.storage.location(),
            dishes = self.catalogue.len(),
            "Persisted catalogue"
        );
        Ok(())
    }

    fn commit(&mut self, snapshot: Catalogue) -> Result<(), CatalogueError> {
        if let Err(e) = self.persist() {
            tracing::warn!("{}", e);
            self.catalogue = snapshot;
            return Err(e);
        }
        Ok(())
    }
}
