use catalog_models::{Details, Hit, MovieDetails};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    search: Vec<RawHit>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailRecord {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
}

/// The provider writes "N/A" into fields it has no data for.
fn clean(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty() && v != "N/A")
}

pub(crate) fn hits_from_search(envelope: SearchEnvelope) -> Vec<Hit> {
    if envelope.response != "True" {
        // "Movie not found!" and friends are empty results, not errors
        debug!(
            "Movie search returned no results: {}",
            envelope.error.as_deref().unwrap_or("no provider message")
        );
        return Vec::new();
    }

    envelope
        .search
        .into_iter()
        .map(|raw| Hit::Movie {
            id: raw.imdb_id,
            title: raw.title,
            year: clean(raw.year),
            poster: clean(raw.poster),
        })
        .collect()
}

pub(crate) fn details_from_record(record: DetailRecord) -> Option<Details> {
    if record.response != "True" {
        return None;
    }
    Some(Details::Movie(MovieDetails {
        title: record.title.unwrap_or_default(),
        year: clean(record.year),
        genre: clean(record.genre),
        plot: clean(record.plot),
        runtime: clean(record.runtime),
        director: clean(record.director),
        actors: clean(record.actors),
        poster: clean(record.poster),
        rating: clean(record.imdb_rating),
    }))
}

pub async fn search(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    query: &str,
    page: u32,
) -> Result<Vec<Hit>, SourceError> {
    let response = client
        .get(endpoint)
        .query(&[
            ("apikey", api_key),
            ("s", query),
            ("type", "movie"),
            ("page", &page.to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("Movie search failed: {} - {}", status, body);
        return Err(SourceError::Provider {
            status: status.as_u16(),
            message: body,
        });
    }

    let envelope: SearchEnvelope = serde_json::from_str(&body)?;
    Ok(hits_from_search(envelope))
}

pub async fn details(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    id: &str,
) -> Result<Option<Details>, SourceError> {
    let response = client
        .get(endpoint)
        .query(&[("apikey", api_key), ("i", id), ("plot", "full")])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("Movie details failed for {}: {} - {}", id, status, body);
        return Ok(None);
    }

    let record: DetailRecord = serde_json::from_str(&body)?;
    Ok(details_from_record(record))
}
