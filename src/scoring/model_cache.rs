use crate::scoring::errors::ModelLoadError;
use crate::scoring::{ModelLoader, ScoringModel};
use moka::future::Cache;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::{error, info};

const ACTIVE_MODEL: &str = "active";

/// Lazily loads and then serves a single shared `ScoringModel`.
///
/// The first `get` triggers the load; callers arriving while it is in flight
/// wait on that same load and observe the same model or the same error. A
/// failed load is not cached, so a later call retries. Once loaded, the
/// model is served for the lifetime of the cache.
pub struct ModelCache {
    loader: Arc<dyn ModelLoader>,
    cache: Cache<&'static str, Arc<dyn ScoringModel>>
}

impl ModelCache {
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            loader,
            cache: Cache::builder().max_capacity(1).build()
        }
    }

    pub async fn get(&self) -> Result<Arc<dyn ScoringModel>, Arc<ModelLoadError>> {
        let loader = self.loader.clone();

        self.cache.try_get_with(ACTIVE_MODEL, async move {
            //NOTE: Loaders may touch the filesystem, keep them off the async workers
            let model = spawn_blocking(move || loader.load())
                .await
                .map_err(|error| ModelLoadError::LoaderTask(error.to_string()))?
                .inspect_err(|error| error!("Scoring model failed to load: {error}"))?;

            info!("Scoring model [{}] loaded", model.version());

            Ok::<_, ModelLoadError>(model)
        }).await
    }
}
