use catalog_models::{Details, Hit, MediaKind};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Table};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Placeholder shown on a card when the provider had no artwork.
pub fn placeholder_poster(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Movie => "(no movie poster)",
        MediaKind::Book => "(no book cover)",
    }
}

pub fn spinner(msg: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Result/favorite cards as a grid. The meta column is the year for
/// movies and the author line for books.
pub fn hits_table<F>(hits: &[Hit], is_favorite: F) -> Table
where
    F: Fn(&Hit) -> bool,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "", "Kind", "Title", "Year / Author", "Poster"]);

    for (i, hit) in hits.iter().enumerate() {
        let marker = if is_favorite(hit) { "★" } else { "" };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(marker),
            Cell::new(hit.kind().as_str()),
            Cell::new(hit.title()),
            Cell::new(hit.meta_line().unwrap_or("—")),
            Cell::new(hit.poster().unwrap_or_else(|| placeholder_poster(hit.kind()))),
        ]);
    }
    table
}

/// Detail view lines, branching on the carried kind tag. Absent fields
/// are skipped; book categories are truncated to the first three.
pub fn details_lines(details: &Details) -> Vec<String> {
    let mut lines = Vec::new();
    let mut push = |label: &str, value: Option<&str>| {
        if let Some(v) = value {
            lines.push(format!("{:<11} {}", format!("{}:", label), v));
        }
    };

    match details {
        Details::Movie(d) => {
            push("Title", Some(&d.title));
            push("Year", d.year.as_deref());
            push("Genre", d.genre.as_deref());
            push("Runtime", d.runtime.as_deref());
            push("Director", d.director.as_deref());
            push("Actors", d.actors.as_deref());
            push("Rating", d.rating.as_deref());
            push("Plot", d.plot.as_deref());
            push("Poster", d.poster.as_deref());
        }
        Details::Book(d) => {
            push("Title", Some(&d.title));
            push("Authors", d.authors.as_deref());
            push("Published", d.published_date.as_deref());
            let pages = d.page_count.map(|p| p.to_string());
            push("Pages", pages.as_deref());
            let categories = (!d.categories.is_empty())
                .then(|| d.categories.iter().take(3).cloned().collect::<Vec<_>>().join(", "));
            push("Categories", categories.as_deref());
            push("Preview", d.preview_link.as_deref());
            push("Description", d.description.as_deref());
            push("Cover", d.image.as_deref());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_models::BookDetails;

    #[test]
    fn test_details_lines_truncate_categories_to_three() {
        let details = Details::Book(BookDetails {
            title: "Atomic Habits".to_string(),
            categories: vec![
                "Self-Help".to_string(),
                "Psychology".to_string(),
                "Business".to_string(),
                "Productivity".to_string(),
            ],
            ..Default::default()
        });

        let lines = details_lines(&details);
        let categories = lines
            .iter()
            .find(|l| l.starts_with("Categories:"))
            .expect("categories line");
        assert!(categories.contains("Business"));
        assert!(!categories.contains("Productivity"));
    }

    #[test]
    fn test_details_lines_skip_absent_fields() {
        let details = Details::Book(BookDetails {
            title: "Bare".to_string(),
            ..Default::default()
        });
        let lines = details_lines(&details);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Title:"));
    }
}
