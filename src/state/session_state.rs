use log::info;
use p360_core::*;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{ApiError, CatalogSource, Credentials, Session};
use crate::config::ResolvedConfig;

/// Owned copy of one page of the filtered catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Item>,
    pub page_number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based positions of the first and last item shown
    pub range: Option<(usize, usize)>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Browsing session state
/// Everything that survives between two user actions lives here
#[derive(Debug)]
pub struct SessionState {
    /// Resolved configuration (registry, page size, endpoints)
    pub config: ResolvedConfig,
    /// Identity returned by the last successful login
    pub session: Option<Session>,
    /// Current catalog snapshot
    pub store: CatalogStore,
    /// Active filters
    pub filters: Filters,
    /// Requested page (1-based, clamped when read)
    pub page: usize,
    /// Optional ordering applied after filtering
    pub sort: Option<SortField>,
}

impl SessionState {
    pub fn new(config: ResolvedConfig) -> Self {
        Self {
            config,
            session: None,
            store: CatalogStore::new(),
            filters: Filters::default(),
            page: 1,
            sort: None,
        }
    }

    /// Authenticate, fetch and replace the catalog
    /// The previous catalog is kept if any step fails
    pub async fn login_and_load(
        &mut self,
        source: &dyn CatalogSource,
        credentials: &Credentials,
    ) -> Result<Arc<Catalog>, ApiError> {
        let session = source.authenticate(credentials).await?;
        info!(
            "Logged in to {} as {} ({})",
            source.name(),
            session.username,
            session.org_name
        );

        let payload = source.fetch(&session).await?;
        let catalog = self.load_payload(&payload)?;
        self.session = Some(session);
        Ok(catalog)
    }

    /// Replace the catalog from a raw payload and go back to the first page
    pub fn load_payload(&mut self, payload: &Value) -> Result<Arc<Catalog>, CatalogError> {
        let catalog = self.store.reload(payload, &self.config.registry)?;
        self.page = 1;
        Ok(catalog)
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.store.current()
    }

    /// Filtered and (optionally) sorted items
    pub fn visible_items(&self) -> Vec<Item> {
        let catalog = self.store.current();
        let mut items = apply_filters(catalog.items(), &self.filters);
        if let Some(field) = self.sort {
            sort_items(&mut items, field);
        }
        items
    }

    /// The requested page of the visible items
    pub fn page_view(&self) -> PageView {
        let items = self.visible_items();
        let page = paginate(&items, self.config.items_per_page, self.page);

        PageView {
            items: page.items.to_vec(),
            page_number: page.page_number,
            total_pages: page.total_pages,
            total_items: page.total_items,
            range: page.range(self.config.items_per_page),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }

    /// Resolve selector names and build the comparison tables
    pub fn compare_names<S: AsRef<str>>(&self, names: &[S]) -> Result<ComparisonResult, CatalogError> {
        let catalog = self.store.current();
        let selected = select_by_names(&catalog, names);
        compare(&selected)
    }

    /// Sidebar line identifying the session
    pub fn identity_line(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| format!("Org: {} | User: {}", s.org_name, s.username))
    }
}
