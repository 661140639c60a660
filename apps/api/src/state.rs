use std::sync::Arc;

use crate::config::Config;
use crate::loader::{JobCatalog, ProfileSource};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Hard/soft skills and bookmarks for the caller. Default: `ProfileApiClient`.
    pub profile: Arc<dyn ProfileSource>,
    /// Active job postings. Default: `PgJobCatalog`.
    pub jobs: Arc<dyn JobCatalog>,
}
