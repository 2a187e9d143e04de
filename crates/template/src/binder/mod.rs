//! Projects a [`SiteContent`] document onto the theme's static markup.
//!
//! The binder is driven by a typed table of binding points. Each point names
//! where in the markup it writes ([`Target`]) and how it derives the value
//! from the content ([`Projection`]). Applying a point fully overwrites its
//! target; a target that is missing from the markup is a no-op that gets
//! recorded in the [`BindReport`].

mod fragments;
mod table;

use std::sync::OnceLock;

use clevio_core::SiteContent;
use kuchikiki::NodeRef;

use crate::dom::{self, Document};
use crate::preview::SectionTag;

/// How a binding point resolves its target element(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The first match, like `querySelector`.
    First(&'static str),
    /// Every match, like `querySelectorAll`.
    All(&'static str),
    /// The match at a zero-based position.
    Nth(&'static str, usize),
}

impl Target {
    pub fn selector(&self) -> &'static str {
        match self {
            Target::First(selector) | Target::All(selector) | Target::Nth(selector, _) => selector,
        }
    }

    fn resolve(&self, document: &Document) -> Vec<NodeRef> {
        match self {
            Target::First(selector) => document.select_first(selector).into_iter().collect(),
            Target::All(selector) => document.select_all(selector),
            Target::Nth(selector, index) => document
                .select_all(selector)
                .into_iter()
                .nth(*index)
                .into_iter()
                .collect(),
        }
    }
}

/// What a binding point writes into its target.
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    /// Replace the children with a single text node.
    Text(String),
    /// Replace the children with parsed markup.
    Html(String),
    /// Set attributes, leaving the others untouched.
    Attrs(Vec<(&'static str, String)>),
    /// Set `href` and replace the children with parsed markup.
    Anchor { href: String, html: String },
    /// Add classes that are not already present.
    AddClasses(&'static [&'static str]),
    /// Set the text of a child element, creating it from `markup` when the
    /// target has no child matching `selector`.
    ChildText {
        selector: &'static str,
        markup: &'static str,
        text: String,
    },
    /// Detach the target from the document.
    Remove,
    /// Discard the children and append one generated fragment per entry.
    List(Vec<String>),
}

impl Write {
    pub fn src(value: &str) -> Self {
        Write::Attrs(vec![("src", value.to_string())])
    }

    pub fn href(value: &str) -> Self {
        Write::Attrs(vec![("href", value.to_string())])
    }

    fn apply(&self, node: &NodeRef) {
        match self {
            Write::Text(text) => dom::set_text(node, text),
            Write::Html(markup) => dom::set_inner_html(node, markup),
            Write::Attrs(attrs) => {
                for (name, value) in attrs {
                    dom::set_attr(node, name, value);
                }
            }
            Write::Anchor { href, html } => {
                dom::set_attr(node, "href", href);
                dom::set_inner_html(node, html);
            }
            Write::AddClasses(classes) => dom::add_classes(node, classes),
            Write::ChildText {
                selector,
                markup,
                text,
            } => {
                let child = match dom::select_within(node, selector).into_iter().next() {
                    Some(child) => child,
                    None => {
                        dom::append_html(node, markup);
                        match dom::select_within(node, selector).into_iter().next() {
                            Some(child) => child,
                            None => return,
                        }
                    }
                };
                dom::set_text(&child, text);
            }
            Write::Remove => node.detach(),
            Write::List(fragments) => {
                dom::clear_children(node);
                for fragment in fragments {
                    dom::append_html(node, fragment);
                }
            }
        }
    }
}

/// Derives a write from the content; `None` skips the point.
pub type Projection = Box<dyn Fn(&SiteContent) -> Option<Write> + Send + Sync>;

pub struct BindingPoint {
    pub name: &'static str,
    pub section: SectionTag,
    pub target: Target,
    pub projection: Projection,
}

impl BindingPoint {
    pub fn new(
        name: &'static str,
        section: SectionTag,
        target: Target,
        projection: impl Fn(&SiteContent) -> Option<Write> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            section,
            target,
            projection: Box::new(projection),
        }
    }
}

impl std::fmt::Debug for BindingPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingPoint")
            .field("name", &self.name)
            .field("section", &self.section)
            .field("target", &self.target)
            .finish()
    }
}

/// A binding point whose selector matched nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss {
    pub name: &'static str,
    pub section: SectionTag,
    pub selector: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Points that wrote at least one element.
    pub applied: usize,
    /// Points whose projection had nothing to write.
    pub skipped: usize,
    pub misses: Vec<Miss>,
}

impl BindReport {
    pub fn is_complete(&self) -> bool {
        self.misses.is_empty()
    }
}

pub struct Binder {
    points: Vec<BindingPoint>,
}

impl Binder {
    /// The binder for the theme's home page.
    pub fn theme() -> Self {
        Self {
            points: table::binding_points(),
        }
    }

    pub fn with_points(points: Vec<BindingPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[BindingPoint] {
        &self.points
    }

    /// Apply every binding point in table order. Never fails.
    pub fn bind(&self, document: &Document, content: &SiteContent) -> BindReport {
        let mut report = BindReport::default();
        for point in &self.points {
            let Some(write) = (point.projection)(content) else {
                report.skipped += 1;
                continue;
            };

            let targets = point.target.resolve(document);
            if targets.is_empty() {
                tracing::trace!(point = point.name, selector = point.target.selector(), "Binding point missed");
                report.misses.push(Miss {
                    name: point.name,
                    section: point.section,
                    selector: point.target.selector(),
                });
                continue;
            }

            for node in &targets {
                write.apply(node);
            }
            report.applied += 1;
        }
        report
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::theme()
    }
}

fn theme_binder() -> &'static Binder {
    static BINDER: OnceLock<Binder> = OnceLock::new();
    BINDER.get_or_init(Binder::theme)
}

/// Bind `content` into `document` with the theme's binding table.
pub fn bind(document: &Document, content: &SiteContent) -> BindReport {
    theme_binder().bind(document, content)
}

/// Parse `template`, bind `content` into it and serialize the result.
pub fn render(template: &str, content: &SiteContent) -> String {
    let document = Document::parse(template);
    let report = bind(&document, content);
    if !report.is_complete() {
        tracing::debug!(misses = report.misses.len(), "Template is missing binding points");
    }
    document.html()
}
