//! Thin DOM layer over `kuchikiki`.
//!
//! Templates are body fragments: they are parsed into a full HTML document
//! and serialized back as the body's children only.

use kuchikiki::traits::TendrilSink;
use kuchikiki::NodeRef;

pub struct Document {
    root: NodeRef,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(markup),
        }
    }

    /// Every element matching `selector`, in document order. An invalid
    /// selector matches nothing.
    pub fn select_all(&self, selector: &str) -> Vec<NodeRef> {
        select_within(&self.root, selector)
    }

    pub fn select_first(&self, selector: &str) -> Option<NodeRef> {
        self.root
            .select_first(selector)
            .ok()
            .map(|found| found.as_node().clone())
    }

    /// Serialize the body's content.
    pub fn html(&self) -> String {
        match self.root.select_first("body") {
            Ok(body) => body.as_node().children().map(|child| child.to_string()).collect(),
            Err(()) => self.root.to_string(),
        }
    }
}

pub fn select_within(scope: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match scope.select(selector) {
        Ok(matches) => matches.map(|found| found.as_node().clone()).collect(),
        Err(()) => {
            tracing::warn!(selector, "Ignoring invalid selector");
            Vec::new()
        }
    }
}

/// Parse markup as body content and return its top-level nodes, detached.
pub fn parse_fragment(markup: &str) -> Vec<NodeRef> {
    let document = kuchikiki::parse_html().one(markup);
    let Ok(body) = document.select_first("body") else {
        return Vec::new();
    };
    let nodes: Vec<NodeRef> = body.as_node().children().collect();
    for node in &nodes {
        node.detach();
    }
    nodes
}

pub fn clear_children(node: &NodeRef) {
    let children: Vec<NodeRef> = node.children().collect();
    for child in children {
        child.detach();
    }
}

pub fn set_text(node: &NodeRef, text: &str) {
    clear_children(node);
    if !text.is_empty() {
        node.append(NodeRef::new_text(text));
    }
}

pub fn set_inner_html(node: &NodeRef, markup: &str) {
    clear_children(node);
    append_html(node, markup);
}

pub fn append_html(node: &NodeRef, markup: &str) {
    for child in parse_fragment(markup) {
        node.append(child);
    }
}

pub fn attr(node: &NodeRef, name: &str) -> Option<String> {
    node.as_element()
        .and_then(|element| element.attributes.borrow().get(name).map(str::to_string))
}

pub fn set_attr(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }
}

pub fn remove_attr(node: &NodeRef, name: &str) {
    if let Some(element) = node.as_element() {
        element.attributes.borrow_mut().remove(name);
    }
}

/// Add each class not already present, keeping existing order.
pub fn add_classes(node: &NodeRef, classes: &[&str]) {
    let current = attr(node, "class").unwrap_or_default();
    let mut tokens: Vec<&str> = current.split_whitespace().collect();
    for class in classes {
        if !tokens.contains(class) {
            tokens.push(class);
        }
    }
    set_attr(node, "class", &tokens.join(" "));
}

/// True when any strict ancestor of `node` is in `candidates`.
pub fn has_ancestor_in(node: &NodeRef, candidates: &[NodeRef]) -> bool {
    node.ancestors()
        .any(|ancestor| candidates.iter().any(|candidate| *candidate == ancestor))
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape a value for use as text content.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
