use std::sync::Arc;
use studio_store::StudioStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<StudioStore>,
}
