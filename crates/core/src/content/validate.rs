/// Structural checks applied before a document is persisted.
use std::collections::HashSet;

use thiserror::Error;

use super::id::{EntityId, Identified};
use super::model::{SiteContent, SocialIcon, SocialLink};

#[derive(Debug, Error, PartialEq)]
pub enum ContentValidationError {
    #[error("social icon `{}` appears more than once in {owner}", .icon.as_str())]
    DuplicateSocialIcon { owner: String, icon: SocialIcon },
    #[error("id `{id}` appears more than once in {list}")]
    DuplicateId { list: &'static str, id: EntityId },
}

/// Check the invariants serde cannot express: social icon keys are unique
/// per link list and entity ids are unique per list.
pub fn validate_content(content: &SiteContent) -> Result<(), ContentValidationError> {
    unique_icons("branding.socials", &content.branding.socials)?;
    for instructor in &content.instructors {
        unique_icons(&format!("instructor `{}`", instructor.name), &instructor.socials)?;
    }

    unique_ids("programs", &content.programs)?;
    unique_ids("instructors", &content.instructors)?;
    unique_ids("testimonials", &content.testimonials)?;
    unique_ids("blog.posts", &content.blog.posts)?;
    unique_ids("instagram", &content.instagram)?;
    unique_ids("partners", &content.partners)?;
    unique_ids("gallery.items", &content.gallery.items)?;
    unique_ids("events", &content.events)?;
    Ok(())
}

/// Give every identified entity that has a blank id a freshly generated one.
/// Returns how many ids were assigned.
pub fn assign_missing_ids(content: &mut SiteContent) -> usize {
    let mut assigned = 0;
    assigned += fill_ids(&mut content.programs);
    assigned += fill_ids(&mut content.instructors);
    assigned += fill_ids(&mut content.testimonials);
    assigned += fill_ids(&mut content.blog.posts);
    assigned += fill_ids(&mut content.instagram);
    assigned += fill_ids(&mut content.partners);
    assigned += fill_ids(&mut content.gallery.items);
    assigned += fill_ids(&mut content.events);
    assigned
}

fn unique_icons(owner: &str, links: &[SocialLink]) -> Result<(), ContentValidationError> {
    let mut seen = HashSet::new();
    for link in links {
        if !seen.insert(link.icon) {
            return Err(ContentValidationError::DuplicateSocialIcon {
                owner: owner.to_string(),
                icon: link.icon,
            });
        }
    }
    Ok(())
}

fn unique_ids<T: Identified>(list: &'static str, items: &[T]) -> Result<(), ContentValidationError> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id()) {
            return Err(ContentValidationError::DuplicateId {
                list,
                id: item.id().clone(),
            });
        }
    }
    Ok(())
}

fn fill_ids<T: Identified>(items: &mut [T]) -> usize {
    let mut assigned = 0;
    for item in items.iter_mut().filter(|item| item.id().is_empty()) {
        *item.id_mut() = EntityId::generate();
        assigned += 1;
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{Instructor, Program};

    fn program(id: &str) -> Program {
        Program {
            id: EntityId::from(id),
            title: "Creative Play".into(),
            ..Program::default()
        }
    }

    #[test]
    fn accepts_default_document() {
        assert!(validate_content(&SiteContent::default()).is_ok());
    }

    #[test]
    fn rejects_duplicate_program_ids() {
        let content = SiteContent {
            programs: vec![program("p1"), program("p1")],
            ..SiteContent::default()
        };
        assert_eq!(
            validate_content(&content),
            Err(ContentValidationError::DuplicateId {
                list: "programs",
                id: EntityId::from("p1"),
            })
        );
    }

    #[test]
    fn rejects_duplicate_instructor_social_icons() {
        let link = SocialLink {
            label: "Instagram".into(),
            href: "https://instagram.com/a".into(),
            icon: SocialIcon::Instagram,
        };
        let content = SiteContent {
            instructors: vec![Instructor {
                id: EntityId::from("i1"),
                name: "Ayu".into(),
                socials: vec![link.clone(), link],
                ..Instructor::default()
            }],
            ..SiteContent::default()
        };
        let err = validate_content(&content).unwrap_err();
        assert!(matches!(
            err,
            ContentValidationError::DuplicateSocialIcon { icon: SocialIcon::Instagram, .. }
        ));
        assert!(err.to_string().contains("instructor `Ayu`"));
    }

    #[test]
    fn assigns_only_blank_ids() {
        let mut content = SiteContent {
            programs: vec![program("p1"), program(""), program("")],
            ..SiteContent::default()
        };
        assert_eq!(assign_missing_ids(&mut content), 2);
        assert_eq!(content.programs[0].id, EntityId::from("p1"));
        assert!(!content.programs[1].id.is_empty());
        assert_ne!(content.programs[1].id, content.programs[2].id);
        assert!(validate_content(&content).is_ok());
    }
}
