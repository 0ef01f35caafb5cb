use std::sync::Arc;

use crate::classifier::taxonomy::Taxonomy;
use crate::config::Config;
use crate::jobs::queue::JobQueue;
use crate::notify::Notifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The category catalog, built once at startup and read-only afterwards.
    /// Classifier calls are pure functions over it — no locking anywhere.
    pub taxonomy: Arc<Taxonomy>,
    pub jobs: JobQueue,
    /// Workers carry their own notifier clone; this one is reserved for
    /// future admin/test-notification endpoints.
    #[allow(dead_code)]
    pub notifier: Notifier,
    #[allow(dead_code)]
    pub config: Config,
}
