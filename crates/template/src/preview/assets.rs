use crate::dom::{self, Document};

const ASSET_ATTRS: [(&str, &str); 3] = [
    ("img[src]", "src"),
    ("link[href]", "href"),
    ("script[src]", "src"),
];

/// Make relative `assets/...` references root-relative so markup renders
/// the same from any base path. Returns how many references changed.
pub fn normalize_asset_paths(document: &Document) -> usize {
    let mut rewritten = 0;
    for (selector, name) in ASSET_ATTRS {
        for node in document.select_all(selector) {
            if let Some(value) = dom::attr(&node, name) {
                if value.starts_with("assets/") {
                    dom::set_attr(&node, name, &format!("/{value}"));
                    rewritten += 1;
                }
            }
        }
    }
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_relative_asset_references_only() {
        let doc = Document::parse(concat!(
            r#"<img src="assets/img/a.png">"#,
            r#"<link rel="stylesheet" href="assets/css/main.css">"#,
            r#"<img src="/uploads/b.png">"#,
            r#"<img src="https://cdn.example.com/assets/c.png">"#,
            r#"<script src="assets/js/main.js"></script>"#,
        ));

        assert_eq!(normalize_asset_paths(&doc), 3);
        let html = doc.html();
        assert!(html.contains(r#"href="/assets/css/main.css""#));
        assert!(html.contains(r#"src="/assets/img/a.png""#));
        assert!(html.contains(r#"src="/uploads/b.png""#));
        assert!(html.contains(r#"src="https://cdn.example.com/assets/c.png""#));
        assert!(html.contains(r#"src="/assets/js/main.js""#));
        assert_eq!(normalize_asset_paths(&doc), 0);
    }
}
