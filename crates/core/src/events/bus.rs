//! Fan-out of content snapshots to open live previews.
//!
//! Saves and unsaved drafts both land here. Each live preview holds its own
//! receiver and re-renders from the snapshot it gets; a preview that falls
//! too far behind sees `Lagged` and resyncs from the newest snapshot.

use tokio::sync::broadcast;

use super::types::ContentEvent;

const DEFAULT_BACKLOG: usize = 64;

#[derive(Debug, Clone)]
pub struct ContentBus {
    previews: broadcast::Sender<ContentEvent>,
}

impl ContentBus {
    /// `backlog` is how many snapshots a slow preview may trail by.
    pub fn new(backlog: usize) -> Self {
        let (previews, _) = broadcast::channel(backlog);
        Self { previews }
    }

    /// Hand a snapshot to every open preview and report how many got it.
    pub fn publish(&self, event: ContentEvent) -> usize {
        let kind = event.kind();
        let delivered = self.previews.send(event).unwrap_or(0);
        tracing::trace!(kind, delivered, "Content snapshot published");
        delivered
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.previews.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.previews.receiver_count()
    }
}

impl Default for ContentBus {
    fn default() -> Self {
        Self::new(DEFAULT_BACKLOG)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::content::SiteContent;

    fn draft(name: &str) -> ContentEvent {
        let mut content = SiteContent::default();
        content.branding.name = name.to_string();
        ContentEvent::Draft(Arc::new(content))
    }

    #[tokio::test]
    async fn saved_snapshot_is_shared_not_copied() {
        let bus = ContentBus::new(4);
        let mut preview = bus.subscribe();

        let content = Arc::new(SiteContent::default());
        assert_eq!(bus.publish(ContentEvent::Saved(content.clone())), 1);

        let event = preview.recv().await.unwrap();
        assert_eq!(event.kind(), "saved");
        assert!(Arc::ptr_eq(event.content(), &content));
    }

    #[tokio::test]
    async fn every_open_preview_gets_the_draft() {
        let bus = ContentBus::new(4);
        let mut programs = bus.subscribe();
        let mut gallery = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        assert_eq!(bus.publish(draft("Clevio Kids")), 2);

        assert_eq!(programs.recv().await.unwrap().content().branding.name, "Clevio Kids");
        assert_eq!(gallery.recv().await.unwrap().content().branding.name, "Clevio Kids");
    }

    #[tokio::test]
    async fn slow_preview_lags_past_the_backlog() {
        let bus = ContentBus::new(2);
        let mut preview = bus.subscribe();
        for name in ["a", "b", "c"] {
            bus.publish(draft(name));
        }

        assert!(matches!(
            preview.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
        assert_eq!(preview.recv().await.unwrap().content().branding.name, "b");
    }

    #[test]
    fn publishing_with_no_preview_open_delivers_nothing() {
        let bus = ContentBus::default();
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(bus.publish(draft("nobody")), 0);
    }
}
