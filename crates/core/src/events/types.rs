use std::sync::Arc;

use crate::content::SiteContent;

/// Content changes broadcast to live preview subscribers.
#[derive(Debug, Clone)]
pub enum ContentEvent {
    /// The document was persisted.
    Saved(Arc<SiteContent>),
    /// An unsaved edit from the admin dashboard.
    Draft(Arc<SiteContent>),
}

impl ContentEvent {
    pub fn content(&self) -> &Arc<SiteContent> {
        match self {
            ContentEvent::Saved(content) | ContentEvent::Draft(content) => content,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ContentEvent::Saved(_) => "saved",
            ContentEvent::Draft(_) => "draft",
        }
    }
}
