//! Facet enumerations and their display labels.

use serde::{Deserialize, Serialize};

use crate::models::{AiringStatus, MediaType};

/// All media types offered as facets, in display order.
pub fn list_types() -> Vec<MediaType> {
    MediaType::ALL.to_vec()
}

/// All airing statuses offered as facets, in display order.
pub fn list_statuses() -> Vec<AiringStatus> {
    AiringStatus::ALL.to_vec()
}

pub const STATUS_GROUP_LABEL: &str = "Stato";
pub const TYPE_GROUP_LABEL: &str = "Tipo";
pub const STATUS_GROUP_COLOR: &str = "#F6E05E";
pub const TYPE_GROUP_COLOR: &str = "#B794F4";

pub fn status_label(status: AiringStatus) -> &'static str {
    match status {
        AiringStatus::Finished => "Terminato",
        AiringStatus::Ongoing => "In corso",
        AiringStatus::Upcoming => "In arrivo",
        AiringStatus::Unknown => "Sconosciuto",
    }
}

pub fn type_label(media_type: MediaType) -> &'static str {
    match media_type {
        MediaType::Tv => "TV",
        MediaType::Movie => "Film",
        MediaType::Ova => "OVA",
        MediaType::Ona => "ONA",
        MediaType::Special => "Speciale",
        MediaType::Unknown => "Sconosciuto",
    }
}

/// Value carried by a facet toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "lowercase")]
pub enum FacetValue {
    Type(MediaType),
    Status(AiringStatus),
}

/// One toggle in a facet group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub label: &'static str,
    pub value: FacetValue,
    pub active: bool,
}

/// A labelled row of facet toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetGroup {
    pub label: &'static str,
    pub label_color: &'static str,
    pub values: Vec<FacetOption>,
}

impl FacetGroup {
    pub fn statuses(available: &[AiringStatus], active: &[AiringStatus]) -> Self {
        Self {
            label: STATUS_GROUP_LABEL,
            label_color: STATUS_GROUP_COLOR,
            values: available
                .iter()
                .map(|&status| FacetOption {
                    label: status_label(status),
                    value: FacetValue::Status(status),
                    active: active.contains(&status),
                })
                .collect(),
        }
    }

    pub fn types(available: &[MediaType], active: &[MediaType]) -> Self {
        Self {
            label: TYPE_GROUP_LABEL,
            label_color: TYPE_GROUP_COLOR,
            values: available
                .iter()
                .map(|&media_type| FacetOption {
                    label: type_label(media_type),
                    value: FacetValue::Type(media_type),
                    active: active.contains(&media_type),
                })
                .collect(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.values.iter().filter(|v| v.active).count()
    }
}
