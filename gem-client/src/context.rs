//! Application context
//!
//! Everything the console needs, built once and passed down. Clones share
//! the same session and loading state.

use std::path::Path;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpTransport, NetworkHttpClient};
use crate::loading::LoadingTracker;
use crate::navigation::RouteGuard;
use crate::session::{AuthService, FileStorage, MemoryStorage, SessionStorage, SessionStore};
use crate::stores::{
    AccountStore, BranchStore, CustomerStore, GemShapeStore, GemStore, GoldSizeStore, GoldStore,
    GoodsReceiptStore, ProductTypeStore, RoleStore, StockStore, WorkerDriverStore,
    WorkerGuideStore, WorkerSaleStore,
};

/// Durable session file name inside the data directory
pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone)]
pub struct AppContext {
    config: ClientConfig,
    session: SessionStore,
    loading: LoadingTracker,
    api: ApiClient,
}

impl AppContext {
    /// Wire a context from explicit parts
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        durable: Arc<dyn SessionStorage>,
        scoped: Arc<dyn SessionStorage>,
    ) -> Self {
        let session = SessionStore::new(durable, scoped, config.storage_keys.clone());
        let loading = LoadingTracker::new(config.max_loading());
        let api = ApiClient::new(transport, session.clone(), loading.clone());
        Self {
            config,
            session,
            loading,
            api,
        }
    }

    /// Network transport, session file under `data_dir`, in-memory scoped
    /// storage; a previous session is restored if one was remembered
    pub fn connect(config: ClientConfig, data_dir: impl AsRef<Path>) -> ClientResult<Self> {
        let transport = Arc::new(NetworkHttpClient::new(&config)?);
        let durable = Arc::new(FileStorage::new(data_dir.as_ref(), SESSION_FILE));
        let context = Self::new(config, transport, durable, Arc::new(MemoryStorage::new()));

        let restored = context.session.restore();
        tracing::info!(
            base_url = %context.config.base_url,
            restored,
            "Client context ready"
        );
        Ok(context)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.api.clone())
    }

    /// Guard over the session as it is right now
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::for_session(&self.session)
    }

    pub fn accounts(&self) -> AccountStore {
        AccountStore::new(self.api.clone())
    }

    pub fn roles(&self) -> RoleStore {
        RoleStore::new(self.api.clone())
    }

    pub fn stock(&self) -> StockStore {
        StockStore::new(self.api.clone())
    }

    pub fn goods_receipts(&self) -> GoodsReceiptStore {
        GoodsReceiptStore::new(self.api.clone())
    }

    pub fn branches(&self) -> BranchStore {
        BranchStore::new(self.api.clone())
    }

    pub fn gems(&self) -> GemStore {
        GemStore::new(self.api.clone())
    }

    pub fn gem_shapes(&self) -> GemShapeStore {
        GemShapeStore::new(self.api.clone())
    }

    pub fn golds(&self) -> GoldStore {
        GoldStore::new(self.api.clone())
    }

    pub fn gold_sizes(&self) -> GoldSizeStore {
        GoldSizeStore::new(self.api.clone())
    }

    pub fn product_types(&self) -> ProductTypeStore {
        ProductTypeStore::new(self.api.clone())
    }

    pub fn customers(&self) -> CustomerStore {
        CustomerStore::new(self.api.clone())
    }

    pub fn worker_guides(&self) -> WorkerGuideStore {
        WorkerGuideStore::new(self.api.clone())
    }

    pub fn worker_sales(&self) -> WorkerSaleStore {
        WorkerSaleStore::new(self.api.clone())
    }

    pub fn worker_drivers(&self) -> WorkerDriverStore {
        WorkerDriverStore::new(self.api.clone())
    }
}
