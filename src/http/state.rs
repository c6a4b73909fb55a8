use std::sync::Arc;

use crate::pipeline::PipelineService;
use crate::storage::ArtifactStore;

/// Shared application state for HTTP handlers
///
/// Holds no mutable cross-request state; concurrent requests are safe by
/// construction.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PipelineService>,
    pub store: Arc<ArtifactStore>,
}

impl AppState {
    pub fn new(pipeline: Arc<PipelineService>, store: ArtifactStore) -> Self {
        Self {
            pipeline,
            store: Arc::new(store),
        }
    }
}
