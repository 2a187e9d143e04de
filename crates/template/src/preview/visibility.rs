use kuchikiki::NodeRef;

use super::{AllowList, PREVIEW_ATTR};
use crate::dom::{self, Document};

/// Marks the node a full-page preview should scroll to.
pub const FOCUS_ATTR: &str = "data-preview-focus";

const PRELOADER: &str = "#preloader";

fn display_of(style: &str) -> Option<&str> {
    style.split(';').find_map(|declaration| {
        let (name, value) = declaration.split_once(':')?;
        (name.trim().eq_ignore_ascii_case("display")).then(|| value.trim())
    })
}

/// Rewrite `style` with `display` set to `value`, or dropped when `None`.
fn with_display(style: &str, value: Option<&str>) -> String {
    let mut declarations: Vec<String> = style
        .split(';')
        .map(str::trim)
        .filter(|declaration| !declaration.is_empty())
        .filter(|declaration| {
            declaration
                .split_once(':')
                .map_or(true, |(name, _)| !name.trim().eq_ignore_ascii_case("display"))
        })
        .map(str::to_string)
        .collect();
    if let Some(value) = value {
        declarations.push(format!("display: {value}"));
    }
    declarations.join("; ")
}

fn set_display(node: &NodeRef, value: Option<&str>) {
    let current = dom::attr(node, "style");
    let updated = with_display(current.as_deref().unwrap_or_default(), value);
    if updated.is_empty() {
        if current.is_some() {
            dom::remove_attr(node, "style");
        }
    } else {
        dom::set_attr(node, "style", &updated);
    }
}

/// In-place section scoping of a full page.
///
/// Remembers each touched node's original `style` so [`restore`] can undo
/// the scope exactly.
///
/// [`restore`]: VisibilityScope::restore
#[derive(Debug)]
pub struct VisibilityScope {
    originals: Vec<(NodeRef, Option<String>)>,
    focus: Option<NodeRef>,
    hidden: usize,
}

impl VisibilityScope {
    /// Hide the preloader and every tagged node outside `allow`; allowed
    /// nodes keep their original display (or the default one).
    pub fn apply(document: &Document, allow: &AllowList) -> Self {
        let mut scope = Self {
            originals: Vec::new(),
            focus: None,
            hidden: 0,
        };

        if let Some(preloader) = document.select_first(PRELOADER) {
            scope.remember(&preloader);
            set_display(&preloader, Some("none"));
        }

        for node in document.select_all(&format!("[{PREVIEW_ATTR}]")) {
            let key = dom::attr(&node, PREVIEW_ATTR).unwrap_or_default();
            let original = scope.remember(&node);
            if allow.allows(&key) {
                let display = original.as_deref().and_then(display_of).map(str::to_string);
                set_display(&node, display.as_deref());
                if scope.focus.is_none() {
                    scope.focus = Some(node.clone());
                }
            } else {
                set_display(&node, Some("none"));
                scope.hidden += 1;
            }
        }

        if let Some(focus) = &scope.focus {
            dom::set_attr(focus, FOCUS_ATTR, "true");
        }
        tracing::trace!(hidden = scope.hidden, "Applied preview scope");
        scope
    }

    fn remember(&mut self, node: &NodeRef) -> Option<String> {
        let style = dom::attr(node, "style");
        self.originals.push((node.clone(), style.clone()));
        style
    }

    /// First visible allowed node, the scroll target.
    pub fn focus(&self) -> Option<&NodeRef> {
        self.focus.as_ref()
    }

    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// Undo the scope: original styles come back and the focus marker goes.
    pub fn restore(self) {
        if let Some(focus) = &self.focus {
            dom::remove_attr(focus, FOCUS_ATTR);
        }
        for (node, style) in self.originals.iter().rev() {
            match style {
                Some(style) => dom::set_attr(node, "style", style),
                None => dom::remove_attr(node, "style"),
            }
        }
    }
}
