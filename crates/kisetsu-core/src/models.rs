mod entry;
mod query;

pub use entry::{AiringStatus, AnimeSeason, CatalogEntry, MediaType, Season};
pub use query::{FilterParams, PageRequest, PageResult, SeasonPin};
