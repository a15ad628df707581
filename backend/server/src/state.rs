use std::sync::Arc;

use super::{
    config::Config,
    store::{SharedStore, StoreError, init_store},
};

pub struct AppState {
    pub config: Config,
    pub store: SharedStore,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, StoreError> {
        let store = init_store(&config).await?;

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: SharedStore) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
