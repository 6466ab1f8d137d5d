use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Book,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Book => "book",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized search result from either catalog provider.
///
/// The variant tag is carried through serialization so favorites written
/// by one session deserialize back into the same variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Hit {
    Movie {
        id: String,
        title: String,
        year: Option<String>,
        poster: Option<String>,
    },
    Book {
        id: String,
        title: String,
        year: Option<String>,
        poster: Option<String>,
        authors: Option<String>,
    },
}

impl Hit {
    pub fn kind(&self) -> MediaKind {
        match self {
            Hit::Movie { .. } => MediaKind::Movie,
            Hit::Book { .. } => MediaKind::Book,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Hit::Movie { id, .. } | Hit::Book { id, .. } => id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Hit::Movie { title, .. } | Hit::Book { title, .. } => title,
        }
    }

    pub fn year(&self) -> Option<&str> {
        match self {
            Hit::Movie { year, .. } | Hit::Book { year, .. } => year.as_deref(),
        }
    }

    pub fn poster(&self) -> Option<&str> {
        match self {
            Hit::Movie { poster, .. } | Hit::Book { poster, .. } => poster.as_deref(),
        }
    }

    /// Secondary card line: release year for movies, author list for books.
    pub fn meta_line(&self) -> Option<&str> {
        match self {
            Hit::Movie { year, .. } => year.as_deref(),
            Hit::Book { authors, .. } => authors.as_deref(),
        }
    }

    /// Favorites membership key. Ids are only unique within one provider,
    /// so the kind is part of the key.
    pub fn key(&self) -> (MediaKind, &str) {
        (self.kind(), self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_line_uses_year_for_movies_and_authors_for_books() {
        let movie = Hit::Movie {
            id: "tt0816692".to_string(),
            title: "Interstellar".to_string(),
            year: Some("2014".to_string()),
            poster: None,
        };
        assert_eq!(movie.meta_line(), Some("2014"));

        let book = Hit::Book {
            id: "abc123".to_string(),
            title: "Atomic Habits".to_string(),
            year: Some("2018".to_string()),
            poster: None,
            authors: Some("James Clear".to_string()),
        };
        assert_eq!(book.meta_line(), Some("James Clear"));
    }

    #[test]
    fn test_key_distinguishes_kinds_with_identical_ids() {
        let movie = Hit::Movie {
            id: "shared".to_string(),
            title: "A".to_string(),
            year: None,
            poster: None,
        };
        let book = Hit::Book {
            id: "shared".to_string(),
            title: "B".to_string(),
            year: None,
            poster: None,
            authors: None,
        };
        assert_ne!(movie.key(), book.key());
    }

    #[test]
    fn test_hit_serialization_carries_kind_tag() {
        let hit = Hit::Book {
            id: "abc123".to_string(),
            title: "Atomic Habits".to_string(),
            year: None,
            poster: None,
            authors: Some("James Clear".to_string()),
        };
        let json = serde_json::to_string(&hit).unwrap();
        assert!(json.contains("\"kind\":\"book\""));
        let back: Hit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hit);
    }
}
