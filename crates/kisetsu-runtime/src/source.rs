//! The asynchronous catalog boundary consumed by UI callers.

use std::future::Future;

use kisetsu_core::error::KisetsuError;
use kisetsu_core::models::{AiringStatus, FilterParams, MediaType, PageResult};

/// A source of paginated catalog listings and facet enumerations.
///
/// [`crate::CatalogService`] is the in-process implementation; callers
/// written against this trait can be exercised with a test double.
pub trait CatalogSource: Send + Sync {
    /// Page `offset` (1-based) of `size` entries matching `params`.
    fn get_newest(
        &self,
        offset: usize,
        size: usize,
        params: FilterParams,
    ) -> impl Future<Output = Result<PageResult, KisetsuError>> + Send;

    /// Media types offered as facets.
    fn get_types(&self) -> impl Future<Output = Result<Vec<MediaType>, KisetsuError>> + Send;

    /// Airing statuses offered as facets.
    fn get_statuses(&self)
        -> impl Future<Output = Result<Vec<AiringStatus>, KisetsuError>> + Send;
}
