//! Section-scoped previews of the bound template.
//!
//! Section roots carry a `data-preview` tag. An admin section name maps to
//! an [`AllowList`] of tags; the scoper either hides everything else in
//! place ([`full_page_preview`]) or lifts only the allowed subtrees into a
//! standalone fragment ([`sandboxed_preview`]).

mod assets;
mod live;
mod sandbox;
mod tags;
mod visibility;

use std::collections::BTreeSet;

pub use assets::normalize_asset_paths;
pub use live::LivePreview;
pub use sandbox::{full_page_preview, isolate, sandboxed_preview};
pub use tags::{tag_sections, SectionTag, PREVIEW_ATTR};
pub use visibility::{VisibilityScope, FOCUS_ATTR};

/// Section tags that stay visible in a preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList(BTreeSet<String>);

impl AllowList {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn allows(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tags shown when previewing the admin section `section`. Names without a
/// mapping are used as the tag itself.
pub fn preview_keys(section: &str) -> AllowList {
    let keys: &[&str] = match section {
        "header" | "branding" => &["header", "header-top"],
        "instructors" | "teachers" => &["teachers"],
        "blog" | "news" => &["news"],
        "events" | "work-process" => &["work-process"],
        other => return AllowList::new([other]),
    };
    AllowList::new(keys.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_admin_sections_to_tags() {
        assert_eq!(preview_keys("branding"), AllowList::new(["header", "header-top"]));
        assert_eq!(preview_keys("instructors"), AllowList::new(["teachers"]));
        assert_eq!(preview_keys("events"), AllowList::new(["work-process"]));
        assert_eq!(preview_keys("blog"), AllowList::new(["news"]));
        assert_eq!(preview_keys("hero"), AllowList::new(["hero"]));
    }

    #[test]
    fn unmapped_sections_pass_through() {
        let keys = preview_keys("gallery");
        assert!(keys.allows("gallery"));
        assert_eq!(keys.keys().collect::<Vec<_>>(), ["gallery"]);
    }
}
