pub mod core;
pub mod dsl;
pub mod engine;

pub use crate::core::{
    Catalogue, CatalogueConfig, Column, CookingTime, CsvStorage, Dietary, Dish, SpiceLevel,
    StorageEngine, StorageError, COLUMNS,
};
pub use dsl::{execute_line, execute_script, DslError, DslOutput};
pub use engine::{
    observed_values, recommend, selection_options, CatalogueError, CatalogueStore,
    RecommendationCriteria, OTHER_OPTION,
};
