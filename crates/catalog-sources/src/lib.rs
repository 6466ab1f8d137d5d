pub mod error;
pub mod factory;
pub mod gbooks;
pub mod omdb;
pub mod traits;

pub use error::SourceError;
pub use factory::{build_sources, SourceSet};
pub use gbooks::GbooksClient;
pub use omdb::OmdbClient;
pub use traits::CatalogSource;
