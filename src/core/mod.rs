pub mod catalogue;
pub mod config;
pub mod dish;
pub mod schema;
pub mod storage;

pub use catalogue::Catalogue;
pub use config::{CatalogueConfig, StorageConfig};
pub use dish::{CookingTime, Dietary, Dish, SpiceLevel};
pub use schema::{Column, ColumnKind, COLUMNS};
pub use storage::{CsvStorage, StorageEngine, StorageError};
