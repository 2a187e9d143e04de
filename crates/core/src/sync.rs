//! Outbound "content changed" notification to an external sync endpoint.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::content::SiteContent;

const SYNC_SCOPE: &str = "clevio-content";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct SyncPayload<'a> {
    scope: &'static str,
    payload: &'a SiteContent,
}

/// Posts the saved document to a webhook without blocking the save.
///
/// Delivery is fire-and-forget: one attempt, failures are logged and
/// dropped.
#[derive(Debug, Clone)]
pub struct SyncNotifier {
    client: reqwest::Client,
    url: String,
}

impl SyncNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Spawn the notification. The returned handle never needs awaiting.
    pub fn notify(&self, content: Arc<SiteContent>) -> JoinHandle<()> {
        let client = self.client.clone();
        let url = self.url.clone();
        tokio::spawn(async move {
            let body = SyncPayload {
                scope: SYNC_SCOPE,
                payload: &content,
            };
            match client.post(&url).json(&body).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!(%url, "Sync webhook notified");
                }
                Ok(response) => {
                    tracing::warn!(%url, status = %response.status(), "Sync webhook rejected notification");
                }
                Err(err) => {
                    tracing::warn!(%url, error = %err, "Sync webhook unreachable");
                }
            }
        })
    }
}
