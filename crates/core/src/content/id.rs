/// Stable identifiers for list entities.
///
/// Every program, instructor, testimonial, blog post, instagram item,
/// partner, gallery item and event carries one. Identifiers are assigned
/// once, when the entity is created, and never reused.
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        EntityId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id marks an entity that was never assigned one.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Implemented by every list entity that carries an [`EntityId`].
pub trait Identified {
    fn id(&self) -> &EntityId;
    fn id_mut(&mut self) -> &mut EntityId;
}

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id(&self) -> &EntityId {
                    &self.id
                }

                fn id_mut(&mut self) -> &mut EntityId {
                    &mut self.id
                }
            }
        )+
    };
}

identified!(
    super::model::Program,
    super::model::Instructor,
    super::model::Testimonial,
    super::model::BlogPost,
    super::model::InstagramItem,
    super::model::Partner,
    super::model::GalleryItem,
    super::model::EventItem,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn blank_id_counts_as_empty() {
        assert!(EntityId::default().is_empty());
        assert!(EntityId::from("  ").is_empty());
        assert!(!EntityId::from("p1").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = EntityId::from("p1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
        let back: EntityId = serde_json::from_str("\"p1\"").unwrap();
        assert_eq!(back, id);
    }
}
