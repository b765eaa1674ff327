use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Quarter of the broadcast year an entry premiered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    #[serde(other)]
    Undefined,
}

impl Season {
    pub const ALL: &[Season] = &[
        Self::Winter,
        Self::Spring,
        Self::Summer,
        Self::Fall,
        Self::Undefined,
    ];

    /// Snapshot string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "WINTER",
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown season: {s}"))
    }
}

/// Release format of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Tv,
    Movie,
    Ova,
    Ona,
    Special,
    #[serde(other)]
    Unknown,
}

impl MediaType {
    pub const ALL: &[MediaType] = &[
        Self::Tv,
        Self::Movie,
        Self::Ova,
        Self::Ona,
        Self::Special,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tv => "TV",
            Self::Movie => "MOVIE",
            Self::Ova => "OVA",
            Self::Ona => "ONA",
            Self::Special => "SPECIAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown media type: {s}"))
    }
}

/// Broadcast state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AiringStatus {
    Finished,
    Ongoing,
    Upcoming,
    #[serde(other)]
    Unknown,
}

impl AiringStatus {
    pub const ALL: &[AiringStatus] = &[
        Self::Finished,
        Self::Ongoing,
        Self::Upcoming,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finished => "FINISHED",
            Self::Ongoing => "ONGOING",
            Self::Upcoming => "UPCOMING",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for AiringStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiringStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown airing status: {s}"))
    }
}

/// Premiere season of an entry. `year` is absent for undated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeSeason {
    pub season: Season,
    #[serde(default)]
    pub year: Option<u32>,
}

/// One item of the catalog snapshot.
///
/// Field names follow the snapshot's camelCase JSON. Entries are never
/// mutated after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub episodes: u32,
    pub status: AiringStatus,
    pub anime_season: AnimeSeason,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CatalogEntry {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_snapshot_json() {
        let json = r#"{
            "sources": ["https://anilist.co/anime/154587"],
            "title": "Sousou no Frieren",
            "type": "TV",
            "episodes": 28,
            "status": "FINISHED",
            "animeSeason": { "season": "FALL", "year": 2023 },
            "picture": "https://cdn.example/frieren.jpg",
            "synonyms": ["Frieren: Beyond Journey's End"],
            "tags": ["adventure", "fantasy"]
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.media_type, MediaType::Tv);
        assert_eq!(entry.status, AiringStatus::Finished);
        assert_eq!(entry.anime_season.season, Season::Fall);
        assert_eq!(entry.anime_season.year, Some(2023));
        assert!(entry.has_tag("fantasy"));
        assert!(entry.thumbnail.is_none());
    }

    #[test]
    fn test_unrecognized_enum_strings_fall_back() {
        let json = r#"{
            "title": "Mystery",
            "type": "MUSIC",
            "status": "CANCELLED",
            "animeSeason": { "season": "MONSOON" }
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.media_type, MediaType::Unknown);
        assert_eq!(entry.status, AiringStatus::Unknown);
        assert_eq!(entry.anime_season.season, Season::Undefined);
        assert_eq!(entry.anime_season.year, None);
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("tv".parse::<MediaType>().unwrap(), MediaType::Tv);
        assert_eq!("Ongoing".parse::<AiringStatus>().unwrap(), AiringStatus::Ongoing);
        assert_eq!(" fall ".parse::<Season>().unwrap(), Season::Fall);
        assert!("cartoon".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&MediaType::Special).unwrap(), "\"SPECIAL\"");
        assert_eq!(serde_json::to_string(&AiringStatus::Upcoming).unwrap(), "\"UPCOMING\"");
    }
}
