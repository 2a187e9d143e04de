use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clevio_core::{ContentBus, ContentEvent, SiteContent};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use super::{sandboxed_preview, AllowList};

/// A sandboxed preview kept in sync with the content bus.
///
/// A burst of content events renders once: the task waits until `settle`
/// passes without a new event and renders the newest document. Watchers
/// always see the latest markup. The task stops when the bus closes or the
/// preview and all of its watchers are dropped.
#[derive(Debug)]
pub struct LivePreview {
    markup: watch::Receiver<Arc<str>>,
    renders: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl LivePreview {
    pub fn spawn(
        bus: &ContentBus,
        template: Arc<str>,
        initial: Arc<SiteContent>,
        allow: AllowList,
        settle: Duration,
    ) -> Self {
        let events = bus.subscribe();
        let first = sandboxed_preview(&template, &initial, &allow);
        let (sender, markup) = watch::channel(Arc::<str>::from(first));
        let renders = Arc::new(AtomicUsize::new(1));

        let task = tokio::spawn(resync(
            events,
            sender,
            Resync {
                template,
                allow,
                settle,
                renders: renders.clone(),
            },
        ));

        Self {
            markup,
            renders,
            task,
        }
    }

    /// The most recently rendered markup.
    pub fn current(&self) -> Arc<str> {
        self.markup.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<str>> {
        self.markup.clone()
    }

    /// How many times the preview has been rendered, the initial render
    /// included.
    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

struct Resync {
    template: Arc<str>,
    allow: AllowList,
    settle: Duration,
    renders: Arc<AtomicUsize>,
}

impl Resync {
    fn render(&self, content: &SiteContent) -> Arc<str> {
        self.renders.fetch_add(1, Ordering::Relaxed);
        Arc::from(sandboxed_preview(&self.template, content, &self.allow))
    }
}

enum Next {
    Content(Arc<SiteContent>),
    Skip,
    Closed,
}

fn classify(received: Result<ContentEvent, RecvError>) -> Next {
    match received {
        Ok(event) => Next::Content(event.content().clone()),
        Err(RecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "Live preview lagged behind content events");
            Next::Skip
        }
        Err(RecvError::Closed) => Next::Closed,
    }
}

async fn resync(
    mut events: broadcast::Receiver<ContentEvent>,
    sender: watch::Sender<Arc<str>>,
    resync: Resync,
) {
    loop {
        let mut latest = tokio::select! {
            _ = sender.closed() => break,
            received = events.recv() => match classify(received) {
                Next::Content(content) => content,
                Next::Skip => continue,
                Next::Closed => break,
            },
        };

        let mut bus_closed = false;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(resync.settle) => break,
                received = events.recv() => match classify(received) {
                    Next::Content(content) => latest = content,
                    Next::Skip => {}
                    Next::Closed => {
                        bus_closed = true;
                        break;
                    }
                },
            }
        }

        if sender.send(resync.render(&latest)).is_err() {
            break;
        }
        if bus_closed {
            break;
        }
    }
    tracing::trace!("Live preview stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::preview::preview_keys;

    const SETTLE: Duration = Duration::from_millis(200);

    fn with_title(title: &str) -> Arc<SiteContent> {
        let mut content = fixtures::seed();
        content.programs[0].title = title.to_string();
        Arc::new(content)
    }

    fn spawn(bus: &ContentBus) -> LivePreview {
        LivePreview::spawn(
            bus,
            Arc::from(fixtures::TEMPLATE),
            Arc::new(fixtures::seed()),
            preview_keys("programs"),
            SETTLE,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn renders_initial_markup_immediately() {
        let bus = ContentBus::new(16);
        let preview = spawn(&bus);
        assert_eq!(preview.renders(), 1);
        assert!(preview.current().contains("Creative Play"));
        assert!(!preview.current().contains("hero-section"));
    }

    #[tokio::test(start_paused = true)]
    async fn bursts_coalesce_into_one_render() {
        let bus = ContentBus::new(16);
        let preview = spawn(&bus);
        let mut watcher = preview.subscribe();

        for n in 1..=5 {
            bus.publish(ContentEvent::Draft(with_title(&format!("Draft {n}"))));
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(preview.renders(), 1);

        watcher.changed().await.unwrap();
        assert_eq!(preview.renders(), 2);
        let markup = preview.current();
        assert!(markup.contains("Draft 5"));
        assert!(!markup.contains("Draft 4"));
    }

    #[tokio::test(start_paused = true)]
    async fn separate_edits_render_separately() {
        let bus = ContentBus::new(16);
        let preview = spawn(&bus);
        let mut watcher = preview.subscribe();

        bus.publish(ContentEvent::Draft(with_title("First")));
        watcher.changed().await.unwrap();
        assert!(preview.current().contains("First"));

        bus.publish(ContentEvent::Saved(with_title("Second")));
        watcher.changed().await.unwrap();
        assert!(preview.current().contains("Second"));
        assert_eq!(preview.renders(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_watchers_are_dropped() {
        let bus = ContentBus::new(16);
        let preview = spawn(&bus);
        assert_eq!(bus.subscriber_count(), 1);

        let LivePreview { markup, task, .. } = preview;
        drop(markup);
        task.await.unwrap();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_bus_closes() {
        let bus = ContentBus::new(16);
        let preview = spawn(&bus);
        let mut watcher = preview.subscribe();

        bus.publish(ContentEvent::Draft(with_title("Last")));
        drop(bus);

        watcher.changed().await.unwrap();
        assert!(preview.current().contains("Last"));
        let LivePreview { task, .. } = preview;
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn lagging_resyncs_to_newest() {
        let bus = ContentBus::new(2);
        let preview = spawn(&bus);
        let mut watcher = preview.subscribe();

        for n in 1..=6 {
            bus.publish(ContentEvent::Draft(with_title(&format!("Edit {n}"))));
        }
        watcher.changed().await.unwrap();
        assert!(preview.current().contains("Edit 6"));
        assert_eq!(preview.renders(), 2);
    }
}
