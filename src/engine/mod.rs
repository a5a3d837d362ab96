pub mod error;
pub mod filter;
pub mod options;
pub mod store;

pub use error::CatalogueError;
pub use filter::{recommend, RecommendationCriteria};
pub use options::{observed_values, selection_options, OTHER_OPTION};
pub use store::CatalogueStore;
