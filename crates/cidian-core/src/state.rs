use std::future::Future;
use std::sync::Arc;

use cidian_config::Config;
use tokio::sync::{Mutex, RwLock};

use crate::dictionary::LoadError;

/// Shared application state.
///
/// The dictionary is published as a whole: readers clone the current `Arc`
/// and never observe a half-built index. Loads are serialized by `loading`,
/// so at most one is in flight.
pub struct AppState<D> {
    pub config: Arc<RwLock<Config>>,
    dictionary: RwLock<Option<Arc<D>>>,
    loading: Mutex<()>,
}

impl<D> Default for AppState<D> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<D> AppState<D> {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            dictionary: RwLock::new(None),
            loading: Mutex::new(()),
        }
    }

    /// Snapshot of the currently published dictionary
    pub async fn dictionary(&self) -> Option<Arc<D>> {
        self.dictionary.read().await.clone()
    }

    /// Run `load` and, on success, swap its result in.
    ///
    /// The publish lock is only taken for the swap itself, so queries keep
    /// reading the previous dictionary while the new one is built.
    pub async fn reload<F, Fut>(&self, load: F) -> Result<Arc<D>, LoadError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<D, LoadError>>,
    {
        let _guard = self.loading.lock().await;

        match load().await {
            Ok(dict) => {
                let dict = Arc::new(dict);
                *self.dictionary.write().await = Some(Arc::clone(&dict));
                Ok(dict)
            }
            Err(e) => {
                tracing::warn!("Dictionary load failed, keeping previous state: {e}");
                Err(e)
            }
        }
    }
}
