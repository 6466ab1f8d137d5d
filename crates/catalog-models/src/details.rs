use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// Expanded record fetched when a user opens a hit. Never persisted;
/// every open re-fetches from the provider.
///
/// The kind tag is explicit so rendering branches on the variant rather
/// than probing for provider-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Details {
    Movie(MovieDetails),
    Book(BookDetails),
}

impl Details {
    pub fn kind(&self) -> MediaKind {
        match self {
            Details::Movie(_) => MediaKind::Movie,
            Details::Book(_) => MediaKind::Book,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Details::Movie(d) => &d.title,
            Details::Book(d) => &d.title,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MovieDetails {
    pub title: String,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub plot: Option<String>,
    pub runtime: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub poster: Option<String>,
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BookDetails {
    pub title: String,
    pub authors: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    /// Ordered as the provider returned them; the presentation layer
    /// truncates to the first three.
    pub categories: Vec<String>,
    pub image: Option<String>,
    pub preview_link: Option<String>,
}
