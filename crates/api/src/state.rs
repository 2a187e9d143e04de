use std::sync::Arc;

use clevio_core::{AuthGate, ContentBus, ContentStore, SyncNotifier, TemplateSource, UploadStore};

use crate::config::AppConfig;

/// Shared application state, passed to all handlers via Axum's `State` extractor.
/// Wrapped in `Arc` so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: AppConfig,
    auth: AuthGate,
    store: ContentStore,
    uploads: UploadStore,
    template: TemplateSource,
    content_bus: ContentBus,
    sync: Option<SyncNotifier>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let auth = AuthGate::new(config.auth());
        let store = ContentStore::new(config.content_path.clone());
        let uploads = UploadStore::new(config.uploads_dir.clone());
        let template = TemplateSource::new(config.template_path.clone());
        let content_bus = ContentBus::new(config.event_bus_capacity);
        let sync = config.sync_webhook_url.clone().map(SyncNotifier::new);

        Self {
            inner: Arc::new(InnerState {
                config,
                auth,
                store,
                uploads,
                template,
                content_bus,
                sync,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn auth(&self) -> &AuthGate {
        &self.inner.auth
    }

    pub fn store(&self) -> &ContentStore {
        &self.inner.store
    }

    pub fn uploads(&self) -> &UploadStore {
        &self.inner.uploads
    }

    pub fn template(&self) -> &TemplateSource {
        &self.inner.template
    }

    pub fn content_bus(&self) -> &ContentBus {
        &self.inner.content_bus
    }

    /// Webhook notified after saves, when configured.
    pub fn sync(&self) -> Option<&SyncNotifier> {
        self.inner.sync.as_ref()
    }
}
