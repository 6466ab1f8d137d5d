pub mod details;
pub mod favorite;
pub mod media;

pub use details::{BookDetails, Details, MovieDetails};
pub use favorite::FavoriteEntry;
pub use media::{Hit, MediaKind};
