use crate::storage::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(store: Store, allowed_origins: Vec<String>) -> Self {
        Self {
            store,
            allowed_origins: allowed_origins.into(),
        }
    }

    pub fn origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}
