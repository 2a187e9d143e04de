//! Content model and persistence for the Clevio kindergarten site.

pub mod auth;
pub mod content;
pub mod events;
pub mod store;
pub mod sync;
pub mod template_source;
pub mod upload;

pub use auth::{AuthConfig, AuthGate};
pub use content::SiteContent;
pub use events::{ContentBus, ContentEvent};
pub use store::{ContentStore, StoreError};
pub use sync::SyncNotifier;
pub use template_source::{TemplateError, TemplateSource};
pub use upload::{NewUpload, UploadError, UploadStore};
