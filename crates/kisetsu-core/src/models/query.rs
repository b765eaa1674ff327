use serde::{Deserialize, Serialize};

use crate::error::KisetsuError;
use crate::models::{AiringStatus, CatalogEntry, MediaType, Season};

/// Optional facet constraints for a catalog query.
///
/// A missing or empty field places no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default, rename = "type")]
    pub types: Option<Vec<MediaType>>,
    #[serde(default, rename = "status")]
    pub statuses: Option<Vec<AiringStatus>>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = MediaType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = AiringStatus>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    /// Type constraint, if one is in effect.
    pub fn type_constraint(&self) -> Option<&[MediaType]> {
        self.types.as_deref().filter(|t| !t.is_empty())
    }

    /// Status constraint, if one is in effect.
    pub fn status_constraint(&self) -> Option<&[AiringStatus]> {
        self.statuses.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_unconstrained(&self) -> bool {
        self.type_constraint().is_none() && self.status_constraint().is_none()
    }
}

/// A validated 1-based page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    offset: usize,
    size: usize,
}

impl PageRequest {
    /// Rejects `offset < 1` and `size < 1`.
    pub fn new(offset: usize, size: usize) -> Result<Self, KisetsuError> {
        if offset < 1 {
            return Err(KisetsuError::InvalidArgument(format!(
                "offset must be at least 1, got {offset}"
            )));
        }
        if size < 1 {
            return Err(KisetsuError::InvalidArgument(format!(
                "size must be at least 1, got {size}"
            )));
        }
        Ok(Self { offset, size })
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// One page window plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T = CatalogEntry> {
    pub data: Vec<T>,
    pub total: usize,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }

    /// Number of pages of `size` needed to cover `total`.
    pub fn page_count(&self, size: usize) -> usize {
        crate::paginate::page_count(self.total, size)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// The single season the catalog is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonPin {
    pub year: u32,
    pub season: Season,
}

impl SeasonPin {
    pub fn new(year: u32, season: Season) -> Self {
        Self { year, season }
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        entry.anime_season.year == Some(self.year) && entry.anime_season.season == self.season
    }
}

impl Default for SeasonPin {
    fn default() -> Self {
        Self::new(2023, Season::Fall)
    }
}

impl std::fmt::Display for SeasonPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}
