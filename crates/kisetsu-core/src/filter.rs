//! Catalog filtering: season pin, content policy and facet matching.

use crate::models::{CatalogEntry, FilterParams, Season, SeasonPin};

/// Tag that removes an entry from every listing.
pub const DEFAULT_SENSITIVE_TAG: &str = "hentai";

/// Fixed rules applied to every query before facets are considered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPolicy {
    pub pin: SeasonPin,
    pub sensitive_tag: String,
}

impl Default for CatalogPolicy {
    fn default() -> Self {
        Self {
            pin: SeasonPin::default(),
            sensitive_tag: DEFAULT_SENSITIVE_TAG.into(),
        }
    }
}

impl CatalogPolicy {
    pub fn new(pin: SeasonPin, sensitive_tag: impl Into<String>) -> Self {
        Self {
            pin,
            sensitive_tag: sensitive_tag.into(),
        }
    }

    /// Whether an entry is listable at all, ignoring facets.
    pub fn admits(&self, entry: &CatalogEntry) -> bool {
        self.pin.matches(entry) && !entry.has_tag(&self.sensitive_tag)
    }

    /// Entries admitted by the policy and matching `params`, in catalog order.
    pub fn apply<'a>(
        &self,
        entries: &'a [CatalogEntry],
        params: &FilterParams,
    ) -> Vec<&'a CatalogEntry> {
        let subset: Vec<&CatalogEntry> = entries
            .iter()
            .filter(|entry| self.admits(entry))
            .filter(|entry| matches_facets(entry, params))
            .collect();

        tracing::debug!(
            pin = %self.pin,
            scanned = entries.len(),
            matched = subset.len(),
            "Filtered catalog"
        );
        subset
    }
}

/// Filter `entries` to one season under the default content policy.
pub fn filter<'a>(
    entries: &'a [CatalogEntry],
    season_year: u32,
    season_name: Season,
    params: &FilterParams,
) -> Vec<&'a CatalogEntry> {
    CatalogPolicy::new(SeasonPin::new(season_year, season_name), DEFAULT_SENSITIVE_TAG)
        .apply(entries, params)
}

/// Facet test for a single entry.
///
/// When both a type and a status constraint are set, satisfying either one
/// is enough: facets widen the listing rather than narrow it.
pub fn matches_facets(entry: &CatalogEntry, params: &FilterParams) -> bool {
    match (params.type_constraint(), params.status_constraint()) {
        (Some(types), Some(statuses)) => {
            types.contains(&entry.media_type) || statuses.contains(&entry.status)
        }
        (Some(types), None) => types.contains(&entry.media_type),
        (None, Some(statuses)) => statuses.contains(&entry.status),
        (None, None) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AiringStatus, AnimeSeason, MediaType};

    fn entry(title: &str, media_type: MediaType, status: AiringStatus) -> CatalogEntry {
        CatalogEntry {
            title: title.into(),
            media_type,
            episodes: 12,
            status,
            anime_season: AnimeSeason {
                season: Season::Fall,
                year: Some(2023),
            },
            picture: None,
            thumbnail: None,
            sources: vec![],
            synonyms: vec![],
            tags: vec![],
        }
    }

    fn facet_fixture() -> Vec<CatalogEntry> {
        vec![
            entry("One", MediaType::Tv, AiringStatus::Finished),
            entry("Two", MediaType::Movie, AiringStatus::Ongoing),
            entry("Three", MediaType::Ova, AiringStatus::Finished),
        ]
    }

    fn titles(subset: &[&CatalogEntry]) -> Vec<String> {
        subset.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_combined_facets_match_either_dimension() {
        let entries = facet_fixture();
        let params = FilterParams::new()
            .with_types([MediaType::Tv])
            .with_statuses([AiringStatus::Finished]);

        let subset = filter(&entries, 2023, Season::Fall, &params);
        assert_eq!(titles(&subset), vec!["One", "Three"]);
    }

    #[test]
    fn test_combined_facets_widen_rather_than_narrow() {
        let entries = facet_fixture();
        let params = FilterParams::new()
            .with_types([MediaType::Movie])
            .with_statuses([AiringStatus::Finished]);

        // An intersection would be empty here.
        let subset = filter(&entries, 2023, Season::Fall, &params);
        assert_eq!(titles(&subset), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_single_facet_constraints() {
        let entries = facet_fixture();

        let by_type = FilterParams::new().with_types([MediaType::Ova, MediaType::Movie]);
        assert_eq!(
            titles(&filter(&entries, 2023, Season::Fall, &by_type)),
            vec!["Two", "Three"]
        );

        let by_status = FilterParams::new().with_statuses([AiringStatus::Ongoing]);
        assert_eq!(
            titles(&filter(&entries, 2023, Season::Fall, &by_status)),
            vec!["Two"]
        );
    }

    #[test]
    fn test_no_params_matches_everything() {
        let entries = facet_fixture();
        assert_eq!(filter(&entries, 2023, Season::Fall, &FilterParams::default()).len(), 3);

        let empty_sets = FilterParams::new().with_types([]).with_statuses([]);
        assert_eq!(filter(&entries, 2023, Season::Fall, &empty_sets).len(), 3);
    }

    #[test]
    fn test_season_pin_excludes_other_seasons() {
        let mut entries = facet_fixture();
        entries[0].anime_season.season = Season::Summer;
        entries[1].anime_season.year = Some(2024);
        entries[2].anime_season.year = None;

        assert!(filter(&entries, 2023, Season::Fall, &FilterParams::default()).is_empty());
        assert_eq!(
            titles(&filter(&entries, 2023, Season::Summer, &FilterParams::default())),
            vec!["One"]
        );
    }

    #[test]
    fn test_sensitive_tag_is_always_excluded() {
        let mut entries = facet_fixture();
        entries[0].tags = vec!["romance".into(), DEFAULT_SENSITIVE_TAG.into()];

        // Even a facet that targets the entry directly cannot bring it back.
        let params = FilterParams::new().with_types([MediaType::Tv]);
        assert!(filter(&entries, 2023, Season::Fall, &params).is_empty());
        assert_eq!(
            titles(&filter(&entries, 2023, Season::Fall, &FilterParams::default())),
            vec!["Two", "Three"]
        );
    }

    #[test]
    fn test_custom_policy_tag() {
        let mut entries = facet_fixture();
        entries[1].tags = vec!["gore".into()];
        entries[2].tags = vec![DEFAULT_SENSITIVE_TAG.into()];

        let policy = CatalogPolicy::new(SeasonPin::default(), "gore");
        let subset = policy.apply(&entries, &FilterParams::default());
        assert_eq!(titles(&subset), vec!["One", "Three"]);
    }
}
