use clevio_core::SiteContent;
use kuchikiki::NodeRef;

use super::{normalize_asset_paths, tag_sections, AllowList, VisibilityScope, PREVIEW_ATTR};
use crate::binder;
use crate::dom::{self, Document};

/// Serialize only the allowed tagged subtrees, in document order. A tagged
/// node nested inside another allowed node is emitted once, with its
/// ancestor.
pub fn isolate(document: &Document, allow: &AllowList) -> String {
    let allowed: Vec<NodeRef> = document
        .select_all(&format!("[{PREVIEW_ATTR}]"))
        .into_iter()
        .filter(|node| {
            dom::attr(node, PREVIEW_ATTR)
                .map(|key| allow.allows(&key))
                .unwrap_or(false)
        })
        .collect();

    allowed
        .iter()
        .filter(|node| !dom::has_ancestor_in(node, &allowed))
        .map(|node| node.to_string())
        .collect()
}

fn prepare(template: &str, content: &SiteContent) -> Document {
    let document = Document::parse(template);
    let report = binder::bind(&document, content);
    if !report.is_complete() {
        tracing::debug!(misses = report.misses.len(), "Preview template is missing binding points");
    }
    tag_sections(&document);
    normalize_asset_paths(&document);
    document
}

/// Bound markup reduced to the sections in `allow`, for embedding in an
/// isolated preview pane.
pub fn sandboxed_preview(template: &str, content: &SiteContent, allow: &AllowList) -> String {
    isolate(&prepare(template, content), allow)
}

/// The whole bound page with every section outside `allow` hidden.
pub fn full_page_preview(template: &str, content: &SiteContent, allow: &AllowList) -> String {
    let document = prepare(template, content);
    let scope = VisibilityScope::apply(&document, allow);
    if scope.focus().is_none() {
        tracing::debug!("Preview scope matched no sections");
    }
    document.html()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::preview::{preview_keys, FOCUS_ATTR};

    #[test]
    fn sandbox_holds_only_allowed_sections() {
        let content = fixtures::seed();
        let markup = sandboxed_preview(fixtures::TEMPLATE, &content, &preview_keys("instructors"));

        let doc = Document::parse(&markup);
        let tags: Vec<String> = doc
            .select_all("[data-preview]")
            .iter()
            .filter_map(|node| dom::attr(node, PREVIEW_ATTR))
            .collect();
        assert_eq!(tags, ["teachers"]);
        assert!(markup.contains("Ayu Lestari"));
        assert!(!markup.contains("preloader"));
    }

    #[test]
    fn sandbox_keeps_document_order_and_rewrites_assets() {
        let content = fixtures::seed();
        let markup = sandboxed_preview(fixtures::TEMPLATE, &content, &preview_keys("header"));

        let doc = Document::parse(&markup);
        let tags: Vec<String> = doc
            .select_all("[data-preview]")
            .iter()
            .filter_map(|node| dom::attr(node, PREVIEW_ATTR))
            .collect();
        assert_eq!(tags, ["header", "header-top", "header"]);
        assert!(!markup.contains(r#"src="assets/"#));
    }

    #[test]
    fn nested_allowed_nodes_are_emitted_once() {
        let doc = Document::parse(concat!(
            r#"<section data-preview="news"><div data-preview="news">inner</div></section>"#,
            r#"<section data-preview="hero">hero</section>"#,
        ));
        let markup = isolate(&doc, &AllowList::new(["news"]));
        assert_eq!(markup.matches("inner").count(), 1);
        assert!(!markup.contains("hero"));
    }

    #[test]
    fn untagged_templates_are_tagged_before_isolation() {
        let template = r#"<section class="hero-section"><div class="hero-content"><h5>x</h5></div></section><footer>f</footer>"#;
        let mut content = fixtures::seed();
        content.hero.eyebrow = "Halo".into();
        let markup = sandboxed_preview(template, &content, &AllowList::new(["hero"]));
        assert!(markup.contains(r#"data-preview="hero""#));
        assert!(markup.contains("Halo"));
        assert!(!markup.contains("<footer"));
    }

    #[test]
    fn full_page_preview_hides_other_sections() {
        let content = fixtures::seed();
        let markup = full_page_preview(fixtures::TEMPLATE, &content, &preview_keys("programs"));

        let doc = Document::parse(&markup);
        let programs = doc.select_first(".program-section").expect("programs");
        assert_eq!(dom::attr(&programs, FOCUS_ATTR).as_deref(), Some("true"));
        assert!(dom::attr(&programs, "style").is_none());
        let hero = doc.select_first(".hero-section").expect("hero");
        assert_eq!(dom::attr(&hero, "style").as_deref(), Some("display: none"));
        assert!(markup.contains("Creative Play"));
    }
}
