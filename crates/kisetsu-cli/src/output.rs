use kisetsu_core::facets::{status_label, type_label, STATUS_GROUP_LABEL, TYPE_GROUP_LABEL};
use kisetsu_core::models::{AiringStatus, MediaType, PageResult, SeasonPin};

const TITLE_WIDTH: usize = 48;

/// Render one page as a fixed-width table with a header line.
pub fn page_table(page: &PageResult, pin: &SeasonPin, offset: usize, size: usize) -> String {
    let header = if page.total == 0 {
        format!("{pin} - 0 entries")
    } else {
        format!(
            "{pin} - page {offset}/{} ({} entries)",
            page.page_count(size),
            page.total
        )
    };

    if page.data.is_empty() {
        return format!("{header}\nNo matches.");
    }

    let mut lines = vec![
        header,
        format!(
            "{:<TITLE_WIDTH$}  {:<11}  {:<11}  {:>3}",
            "Title", TYPE_GROUP_LABEL, STATUS_GROUP_LABEL, "Ep"
        ),
    ];
    lines.extend(page.data.iter().map(|entry| {
        format!(
            "{:<TITLE_WIDTH$}  {:<11}  {:<11}  {:>3}",
            truncate(&entry.title, TITLE_WIDTH),
            type_label(entry.media_type),
            status_label(entry.status),
            entry.episodes
        )
    }));
    lines.join("\n")
}

pub fn type_list(types: &[MediaType]) -> String {
    types
        .iter()
        .map(|t| format!("{:<8} {}", t.as_str(), type_label(*t)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn status_list(statuses: &[AiringStatus]) -> String {
    statuses
        .iter()
        .map(|s| format!("{:<8} {}", s.as_str(), status_label(*s)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut to `width` characters, marking the cut with an ellipsis.
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use kisetsu_core::models::{AnimeSeason, CatalogEntry, Season};

    use super::*;

    fn page(titles: &[&str], total: usize) -> PageResult {
        PageResult {
            data: titles
                .iter()
                .map(|t| CatalogEntry {
                    title: (*t).into(),
                    media_type: MediaType::Movie,
                    episodes: 1,
                    status: AiringStatus::Upcoming,
                    anime_season: AnimeSeason {
                        season: Season::Fall,
                        year: Some(2023),
                    },
                    picture: None,
                    thumbnail: None,
                    sources: vec![],
                    synonyms: vec![],
                    tags: vec![],
                })
                .collect(),
            total,
        }
    }

    #[test]
    fn test_page_table() {
        let out = page_table(
            &page(&["Kimitachi wa Dou Ikiru ka"], 11),
            &SeasonPin::default(),
            2,
            10,
        );
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "FALL 2023 - page 2/2 (11 entries)");
        assert!(lines[1].starts_with("Title"));
        assert!(lines[2].starts_with("Kimitachi wa Dou Ikiru ka"));
        assert!(lines[2].contains("Film"));
        assert!(lines[2].contains("In arrivo"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_page() {
        let out = page_table(&page(&[], 0), &SeasonPin::default(), 1, 10);
        assert_eq!(out, "FALL 2023 - 0 entries\nNo matches.");
    }

    #[test]
    fn test_page_past_end() {
        let out = page_table(&page(&[], 11), &SeasonPin::default(), 5, 10);
        assert_eq!(out, "FALL 2023 - page 5/2 (11 entries)\nNo matches.");
    }

    #[test]
    fn test_truncate_long_titles() {
        let long = "x".repeat(60);
        let cut = truncate(&long, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate("Pluto", 10), "Pluto");
    }

    #[test]
    fn test_facet_lists() {
        assert_eq!(
            status_list(&[AiringStatus::Finished, AiringStatus::Ongoing]),
            "FINISHED Terminato\nONGOING  In corso"
        );
        assert_eq!(type_list(&[MediaType::Tv]), "TV       TV");
    }
}
