use anyhow::Result;
use catalog_models::{FavoriteEntry, Hit, MediaKind};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Raw persistence behind the favorites store. The store owns the
/// ordering and dedup rules; backends only move serialized bytes.
pub trait FavoritesBackend {
    /// `Ok(None)` means no state has ever been written.
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, payload: &str) -> Result<()>;
}

/// One JSON file on disk, written atomically via temp-file-then-rename.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FavoritesBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, payload)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// In-memory backend for tests and dry runs.
#[derive(Default)]
pub struct MemoryBackend {
    payload: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.lock().unwrap().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.payload.lock().unwrap() = Some(payload.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// Ordered, deduplicated favorites list, most recently added first.
/// Membership is keyed by `(kind, id)`: provider ids are only unique
/// within one catalog, so a movie and a book may share an id string
/// without colliding.
pub struct FavoritesStore<B: FavoritesBackend> {
    backend: B,
    entries: Vec<FavoriteEntry>,
}

impl<B: FavoritesBackend> FavoritesStore<B> {
    /// Load persisted favorites. Missing or corrupt state falls back to
    /// an empty list; corruption is logged, never surfaced.
    pub fn load(backend: B) -> Self {
        let entries = match backend.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<FavoriteEntry>>(&payload) {
                Ok(entries) => {
                    debug!("Loaded {} favorite(s)", entries.len());
                    entries
                }
                Err(e) => {
                    warn!("Favorites state unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No favorites state yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read favorites state, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { backend, entries }
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_favorite(&self, kind: MediaKind, id: &str) -> bool {
        self.entries.iter().any(|e| e.hit.key() == (kind, id))
    }

    /// Add the hit if absent, remove it if present. Every mutation is an
    /// immediate full rewrite of the persisted state.
    pub fn toggle(&mut self, hit: Hit) -> Result<Toggled> {
        let key = (hit.kind(), hit.id().to_string());
        let toggled = if let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.hit.key() == (key.0, key.1.as_str()))
        {
            self.entries.remove(pos);
            Toggled::Removed
        } else {
            self.entries.insert(0, FavoriteEntry::new(hit));
            Toggled::Added
        };
        self.persist()?;
        Ok(toggled)
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.entries)?;
        self.backend.write(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str, title: &str) -> Hit {
        Hit::Movie {
            id: id.to_string(),
            title: title.to_string(),
            year: Some("2014".to_string()),
            poster: None,
        }
    }

    fn book(id: &str, title: &str) -> Hit {
        Hit::Book {
            id: id.to_string(),
            title: title.to_string(),
            year: None,
            poster: None,
            authors: Some("James Clear".to_string()),
        }
    }

    #[test]
    fn test_toggle_prepends_then_removes_exactly_once() {
        let mut store = FavoritesStore::load(MemoryBackend::new());

        assert_eq!(store.toggle(movie("tt1", "First")).unwrap(), Toggled::Added);
        assert_eq!(store.toggle(movie("tt2", "Second")).unwrap(), Toggled::Added);
        // Most recently added comes first
        assert_eq!(store.entries()[0].hit.id(), "tt2");
        assert_eq!(store.entries()[1].hit.id(), "tt1");

        assert_eq!(
            store.toggle(movie("tt2", "Second")).unwrap(),
            Toggled::Removed
        );
        assert_eq!(store.len(), 1);
        assert!(!store.is_favorite(MediaKind::Movie, "tt2"));
        assert!(store.is_favorite(MediaKind::Movie, "tt1"));
    }

    #[test]
    fn test_double_toggle_restores_original_list() {
        let mut store = FavoritesStore::load(MemoryBackend::new());
        store.toggle(movie("tt1", "First")).unwrap();
        store.toggle(movie("tt2", "Second")).unwrap();
        let before: Vec<String> = store.entries().iter().map(|e| e.hit.id().to_string()).collect();

        store.toggle(movie("tt3", "Third")).unwrap();
        store.toggle(movie("tt3", "Third")).unwrap();

        let after: Vec<String> = store.entries().iter().map(|e| e.hit.id().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_movie_and_book_with_same_id_do_not_collide() {
        let mut store = FavoritesStore::load(MemoryBackend::new());
        store.toggle(movie("shared", "A Movie")).unwrap();
        store.toggle(book("shared", "A Book")).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.is_favorite(MediaKind::Movie, "shared"));
        assert!(store.is_favorite(MediaKind::Book, "shared"));

        store.toggle(book("shared", "A Book")).unwrap();
        assert!(store.is_favorite(MediaKind::Movie, "shared"));
        assert!(!store.is_favorite(MediaKind::Book, "shared"));
    }

    #[test]
    fn test_favorites_survive_reload_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut store = FavoritesStore::load(FileBackend::new(path.clone()));
        store.toggle(movie("tt0816692", "Interstellar")).unwrap();
        store.toggle(book("abc123", "Atomic Habits")).unwrap();

        let reloaded = FavoritesStore::load(FileBackend::new(path));
        let ids: Vec<&str> = reloaded.entries().iter().map(|e| e.hit.id()).collect();
        assert_eq!(ids, vec!["abc123", "tt0816692"]);
    }

    #[test]
    fn test_corrupt_state_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");
        std::fs::write(&path, "definitely not json {{{").unwrap();

        let store = FavoritesStore::load(FileBackend::new(path));
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_state_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::load(FileBackend::new(dir.path().join("favorites.json")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutation_is_written_through_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut store = FavoritesStore::load(FileBackend::new(path.clone()));
        store.toggle(movie("tt1", "First")).unwrap();

        // The file reflects the mutation before any explicit save call
        let on_disk: Vec<FavoriteEntry> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 1);
        assert_eq!(on_disk[0].hit.id(), "tt1");
    }
}
