//! Caller-side state for browsing the newest season: active facets,
//! pagination position and the last loaded page.

use serde::{Deserialize, Serialize};

use crate::facets::FacetGroup;
use crate::models::{AiringStatus, CatalogEntry, FilterParams, MediaType, PageResult};
use crate::paginate::page_count;

// ── Pagination ────────────────────────────────────────────────────

/// Pagination position. `offset` is the 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: usize,
    pub size: usize,
    pub offset: usize,
}

impl Pagination {
    pub fn new(size: usize) -> Self {
        Self {
            total: 0,
            size: size.max(1),
            offset: 1,
        }
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total, self.size)
    }

    pub fn has_prev(&self) -> bool {
        self.offset > 1
    }

    pub fn has_next(&self) -> bool {
        self.offset < self.page_count()
    }
}

// ── Search form ───────────────────────────────────────────────────

/// Facet values the user has switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    pub types: Vec<MediaType>,
    pub statuses: Vec<AiringStatus>,
}

impl SearchForm {
    pub fn toggle_type(&mut self, media_type: MediaType) {
        toggle(&mut self.types, media_type);
    }

    pub fn toggle_status(&mut self, status: AiringStatus) {
        toggle(&mut self.statuses, status);
    }

    /// Query parameters; an empty selection places no constraint.
    pub fn params(&self) -> FilterParams {
        FilterParams {
            types: (!self.types.is_empty()).then(|| self.types.clone()),
            statuses: (!self.statuses.is_empty()).then(|| self.statuses.clone()),
        }
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

// ── Messages ──────────────────────────────────────────────────────

/// A page request as issued by [`Newest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewestQuery {
    pub offset: usize,
    pub size: usize,
    pub params: FilterParams,
}

#[derive(Debug, Clone)]
pub enum Message {
    SetType(MediaType),
    SetStatus(AiringStatus),
    PageChanged(usize),
    TypesLoaded(Result<Vec<MediaType>, String>),
    StatusesLoaded(Result<Vec<AiringStatus>, String>),
    NewestLoaded {
        query: NewestQuery,
        result: Result<PageResult, String>,
    },
    Refresh,
}

/// Side effect the owner must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    FetchNewest(NewestQuery),
    FetchFacets,
}

// ── State ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Newest {
    pub pagination: Pagination,
    pub search_form: SearchForm,
    pub types: Vec<MediaType>,
    pub statuses: Vec<AiringStatus>,
    pub entries: Vec<CatalogEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Newest {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            search_form: SearchForm::default(),
            types: Vec::new(),
            statuses: Vec::new(),
            entries: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Effects to run when the screen is first shown.
    pub fn start(&mut self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if self.needs_facets() {
            actions.push(Action::FetchFacets);
        }
        actions.push(self.fetch());
        actions
    }

    /// Facets are fetched once, while neither list has been loaded.
    pub fn needs_facets(&self) -> bool {
        self.types.is_empty() && self.statuses.is_empty()
    }

    /// The query matching the current form and page.
    pub fn query(&self) -> NewestQuery {
        NewestQuery {
            offset: self.pagination.offset,
            size: self.pagination.size,
            params: self.search_form.params(),
        }
    }

    /// Facet groups for the search form, status first.
    pub fn facet_groups(&self) -> Vec<FacetGroup> {
        if self.needs_facets() {
            return Vec::new();
        }
        vec![
            FacetGroup::statuses(&self.statuses, &self.search_form.statuses),
            FacetGroup::types(&self.types, &self.search_form.types),
        ]
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::SetType(media_type) => {
                self.search_form.toggle_type(media_type);
                self.pagination.offset = 1;
                self.fetch()
            }
            Message::SetStatus(status) => {
                self.search_form.toggle_status(status);
                self.pagination.offset = 1;
                self.fetch()
            }
            Message::PageChanged(offset) => {
                let offset = offset.max(1);
                if offset == self.pagination.offset {
                    return Action::None;
                }
                self.pagination.offset = offset;
                self.fetch()
            }
            Message::TypesLoaded(result) => {
                match result {
                    Ok(types) => self.types = types,
                    Err(e) => self.error = Some(e),
                }
                Action::None
            }
            Message::StatusesLoaded(result) => {
                match result {
                    Ok(statuses) => self.statuses = statuses,
                    Err(e) => self.error = Some(e),
                }
                Action::None
            }
            Message::NewestLoaded { query, result } => {
                if query != self.query() {
                    tracing::debug!(offset = query.offset, "Dropping stale page");
                    return Action::None;
                }
                self.loading = false;
                match result {
                    Ok(page) => {
                        self.pagination.total = page.total;
                        self.entries = page.data;
                        self.error = None;
                    }
                    Err(e) => {
                        self.entries.clear();
                        self.error = Some(e);
                    }
                }
                Action::None
            }
            Message::Refresh => self.fetch(),
        }
    }

    fn fetch(&mut self) -> Action {
        self.loading = true;
        self.error = None;
        Action::FetchNewest(self.query())
    }
}
