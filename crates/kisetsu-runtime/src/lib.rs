mod latency;
mod source;

use std::sync::Arc;

use kisetsu_core::browse::{Action, Message};
use kisetsu_core::catalog::Catalog;
use kisetsu_core::config::AppConfig;
use kisetsu_core::error::KisetsuError;
use kisetsu_core::facets;
use kisetsu_core::filter::CatalogPolicy;
use kisetsu_core::models::{
    AiringStatus, CatalogEntry, FilterParams, MediaType, PageRequest, PageResult,
};
use kisetsu_core::paginate::paginate;

pub use latency::{FixedDelay, Latency, NoDelay};
pub use source::CatalogSource;
pub use tokio_util::sync::CancellationToken;

/// In-process catalog service over an injected, read-only catalog.
///
/// Every call waits on the configured [`Latency`] before resolving and can
/// be abandoned early through a [`CancellationToken`].
#[derive(Debug, Clone)]
pub struct CatalogService<L = FixedDelay> {
    catalog: Arc<Catalog>,
    policy: CatalogPolicy,
    latency: L,
}

impl CatalogService<FixedDelay> {
    /// Load the configured snapshot and build a service with the configured delay.
    pub fn from_config(config: &AppConfig) -> Result<Self, KisetsuError> {
        let catalog = Catalog::load_or_bundled(config.catalog_path().as_deref())?;
        tracing::info!(
            entries = catalog.len(),
            pin = %config.policy().pin,
            latency_ms = config.service.latency_ms,
            "Catalog service ready"
        );
        Ok(Self::new(
            Arc::new(catalog),
            config.policy(),
            FixedDelay(config.latency()),
        ))
    }
}

impl<L: Latency> CatalogService<L> {
    pub fn new(catalog: Arc<Catalog>, policy: CatalogPolicy, latency: L) -> Self {
        Self {
            catalog,
            policy,
            latency,
        }
    }

    /// Same catalog and policy, different delay strategy.
    pub fn with_latency<M: Latency>(self, latency: M) -> CatalogService<M> {
        CatalogService {
            catalog: self.catalog,
            policy: self.policy,
            latency,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn policy(&self) -> &CatalogPolicy {
        &self.policy
    }

    pub async fn get_newest(
        &self,
        offset: usize,
        size: usize,
        params: FilterParams,
    ) -> Result<PageResult, KisetsuError> {
        self.get_newest_cancellable(offset, size, params, &CancellationToken::new())
            .await
    }

    /// Validates the page position before waiting, so a bad request fails fast.
    #[tracing::instrument(name = "get_newest", skip(self, cancel))]
    pub async fn get_newest_cancellable(
        &self,
        offset: usize,
        size: usize,
        params: FilterParams,
        cancel: &CancellationToken,
    ) -> Result<PageResult, KisetsuError> {
        let request = PageRequest::new(offset, size)?;
        self.settle(cancel).await?;

        let subset = self.policy.apply(self.catalog.entries(), &params);
        let page = paginate(&subset, request.offset(), request.size()).map(CatalogEntry::clone);
        tracing::debug!(total = page.total, returned = page.data.len(), "Served page");
        Ok(page)
    }

    pub async fn get_types(&self) -> Result<Vec<MediaType>, KisetsuError> {
        self.get_types_cancellable(&CancellationToken::new()).await
    }

    pub async fn get_types_cancellable(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<MediaType>, KisetsuError> {
        self.settle(cancel).await?;
        Ok(facets::list_types())
    }

    pub async fn get_statuses(&self) -> Result<Vec<AiringStatus>, KisetsuError> {
        self.get_statuses_cancellable(&CancellationToken::new()).await
    }

    pub async fn get_statuses_cancellable(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<AiringStatus>, KisetsuError> {
        self.settle(cancel).await?;
        Ok(facets::list_statuses())
    }

    /// Wait out the latency unless cancelled first. The pending timer is
    /// dropped with the losing branch.
    async fn settle(&self, cancel: &CancellationToken) -> Result<(), KisetsuError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Request cancelled");
                Err(KisetsuError::Cancelled)
            }
            _ = self.latency.wait() => Ok(()),
        }
    }
}

impl<L: Latency> CatalogSource for CatalogService<L> {
    async fn get_newest(
        &self,
        offset: usize,
        size: usize,
        params: FilterParams,
    ) -> Result<PageResult, KisetsuError> {
        CatalogService::get_newest(self, offset, size, params).await
    }

    async fn get_types(&self) -> Result<Vec<MediaType>, KisetsuError> {
        CatalogService::get_types(self).await
    }

    async fn get_statuses(&self) -> Result<Vec<AiringStatus>, KisetsuError> {
        CatalogService::get_statuses(self).await
    }
}

/// Perform a browse-state side effect against `source`, returning the
/// messages to feed back into [`kisetsu_core::browse::Newest::update`].
pub async fn perform<S: CatalogSource>(source: &S, action: Action) -> Vec<Message> {
    match action {
        Action::None => Vec::new(),
        Action::FetchFacets => {
            let (types, statuses) = tokio::join!(source.get_types(), source.get_statuses());
            vec![
                Message::TypesLoaded(types.map_err(|e| e.to_string())),
                Message::StatusesLoaded(statuses.map_err(|e| e.to_string())),
            ]
        }
        Action::FetchNewest(query) => {
            let result = source
                .get_newest(query.offset, query.size, query.params.clone())
                .await
                .map_err(|e| e.to_string());
            vec![Message::NewestLoaded { query, result }]
        }
    }
}
