//! Template binding and section previews for the Clevio theme.
//!
//! The theme ships as static markup; [`binder`] projects a
//! [`SiteContent`](clevio_core::SiteContent) document onto it and
//! [`preview`] narrows the bound page down to the sections being edited.

pub mod binder;
pub mod dom;
pub mod preview;

pub use binder::{bind, render, BindReport, Binder, BindingPoint, Miss, Target, Write};
pub use dom::Document;
pub use preview::{
    full_page_preview, normalize_asset_paths, preview_keys, sandboxed_preview, tag_sections,
    AllowList, LivePreview, SectionTag, VisibilityScope,
};

#[cfg(test)]
pub(crate) mod fixtures {
    use clevio_core::SiteContent;

    pub const TEMPLATE: &str = include_str!("../../../templates/home.html");
    pub const CONTENT: &str = include_str!("../../../data/content.json");

    pub fn seed() -> SiteContent {
        serde_json::from_str(CONTENT).expect("seed content parses")
    }
}
