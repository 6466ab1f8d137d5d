use catalog_models::{BookDetails, Details, Hit};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::error::SourceError;

#[derive(Debug, Deserialize)]
pub(crate) struct VolumeList {
    // Absent entirely when the search matched nothing
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Volume {
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    published_date: Option<String>,
    description: Option<String>,
    page_count: Option<u32>,
    categories: Option<Vec<String>>,
    image_links: Option<ImageLinks>,
    preview_link: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    small_thumbnail: Option<String>,
    thumbnail: Option<String>,
}

fn joined_authors(authors: Option<Vec<String>>) -> Option<String> {
    authors.filter(|a| !a.is_empty()).map(|a| a.join(", "))
}

/// The display year is the leading four characters of the published
/// date ("2018-10-16" -> "2018"). An empty date has no year.
fn year_from_published_date(published_date: Option<&str>) -> Option<String> {
    published_date
        .map(|d| d.chars().take(4).collect())
        .filter(|y: &String| !y.is_empty())
}

fn pick_thumbnail(links: Option<ImageLinks>) -> Option<String> {
    links.and_then(|l| l.thumbnail.or(l.small_thumbnail))
}

pub(crate) fn hits_from_volumes(list: VolumeList) -> Vec<Hit> {
    list.items
        .unwrap_or_default()
        .into_iter()
        .map(|volume| {
            let info = volume.volume_info;
            Hit::Book {
                id: volume.id,
                title: info.title.unwrap_or_else(|| "(untitled)".to_string()),
                year: year_from_published_date(info.published_date.as_deref()),
                poster: pick_thumbnail(info.image_links),
                authors: joined_authors(info.authors),
            }
        })
        .collect()
}

pub(crate) fn details_from_volume(volume: Volume) -> Details {
    let info = volume.volume_info;
    Details::Book(BookDetails {
        title: info.title.unwrap_or_else(|| "(untitled)".to_string()),
        authors: joined_authors(info.authors),
        published_date: info.published_date,
        description: info.description,
        page_count: info.page_count,
        categories: info.categories.unwrap_or_default(),
        image: pick_thumbnail(info.image_links),
        preview_link: info.preview_link,
    })
}

pub async fn search(
    client: &Client,
    endpoint: &str,
    query: &str,
    page: u32,
    page_size: u32,
) -> Result<Vec<Hit>, SourceError> {
    let start_index = page.saturating_sub(1) * page_size;
    let url = format!("{}/volumes", endpoint.trim_end_matches('/'));

    let response = client
        .get(&url)
        .query(&[
            ("q", query),
            ("printType", "books"),
            ("startIndex", &start_index.to_string()),
            ("maxResults", &page_size.to_string()),
        ])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("Book search failed: {} - {}", status, body);
        return Err(SourceError::Provider {
            status: status.as_u16(),
            message: body,
        });
    }

    let list: VolumeList = serde_json::from_str(&body)?;
    Ok(hits_from_volumes(list))
}

pub async fn details(
    client: &Client,
    endpoint: &str,
    id: &str,
) -> Result<Option<Details>, SourceError> {
    let url = format!(
        "{}/volumes/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(id)
    );

    let response = client.get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("Book details failed for {}: {}", id, status);
        return Ok(None);
    }

    let volume: Volume = serde_json::from_str(&body)?;
    Ok(Some(details_from_volume(volume)))
}
