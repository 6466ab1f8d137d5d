pub mod details;
pub mod favorites;
pub mod session;

pub use details::{DetailsPane, DetailsTicket};
pub use favorites::{FavoritesBackend, FavoritesStore, FileBackend, MemoryBackend, Toggled};
pub use session::{SearchOutcome, SearchSession, SearchTicket, MIN_QUERY_LEN};
