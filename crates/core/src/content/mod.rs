pub mod id;
pub mod model;
pub mod validate;

pub use id::{EntityId, Identified};
pub use model::*;
pub use validate::{assign_missing_ids, validate_content, ContentValidationError};
