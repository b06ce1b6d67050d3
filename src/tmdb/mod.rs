pub mod client;
pub mod types;

pub use client::{Catalog, CatalogError, TmdbClient};
pub use types::{CatalogMovie, DiscoverQuery};
