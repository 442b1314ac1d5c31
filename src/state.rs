use std::sync::Arc;

use crate::config::Config;
use crate::domain::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub api_token: Arc<String>,
    pub docs_path_prefix: Arc<String>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>, config: &Config) -> Self {
        Self {
            store,
            api_token: Arc::new(config.api_token.clone()),
            docs_path_prefix: Arc::new(config.docs_path_prefix.clone()),
        }
    }
}
