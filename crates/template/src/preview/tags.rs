use std::fmt;
use std::str::FromStr;

use crate::dom::{self, Document};

/// Attribute that carries a node's section tag.
pub const PREVIEW_ATTR: &str = "data-preview";

/// The fixed vocabulary of page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionTag {
    HeaderTop,
    Header,
    Hero,
    About,
    Programs,
    WorkProcess,
    Activities,
    Teachers,
    Testimonials,
    Partners,
    Cta,
    News,
    Newsletter,
    Instagram,
    Contact,
}

impl SectionTag {
    pub const ALL: [SectionTag; 15] = [
        SectionTag::HeaderTop,
        SectionTag::Header,
        SectionTag::Hero,
        SectionTag::About,
        SectionTag::Programs,
        SectionTag::WorkProcess,
        SectionTag::Activities,
        SectionTag::Teachers,
        SectionTag::Testimonials,
        SectionTag::Partners,
        SectionTag::Cta,
        SectionTag::News,
        SectionTag::Newsletter,
        SectionTag::Instagram,
        SectionTag::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionTag::HeaderTop => "header-top",
            SectionTag::Header => "header",
            SectionTag::Hero => "hero",
            SectionTag::About => "about",
            SectionTag::Programs => "programs",
            SectionTag::WorkProcess => "work-process",
            SectionTag::Activities => "activities",
            SectionTag::Teachers => "teachers",
            SectionTag::Testimonials => "testimonials",
            SectionTag::Partners => "partners",
            SectionTag::Cta => "cta",
            SectionTag::News => "news",
            SectionTag::Newsletter => "newsletter",
            SectionTag::Instagram => "instagram",
            SectionTag::Contact => "contact",
        }
    }

    /// Root element(s) of the section in the theme markup.
    pub fn selector(&self) -> &'static str {
        match self {
            SectionTag::HeaderTop => ".header-top-section",
            SectionTag::Header => "header, .offcanvas__info",
            SectionTag::Hero => ".hero-section",
            SectionTag::About => ".about-section",
            SectionTag::Programs => ".program-section",
            SectionTag::WorkProcess => ".work-process-section",
            SectionTag::Activities => ".about-activities-section",
            SectionTag::Teachers => ".team-section",
            SectionTag::Testimonials => ".testimonial-section",
            SectionTag::Partners => ".partner-section",
            SectionTag::Cta => ".cta-section",
            SectionTag::News => ".news-section",
            SectionTag::Newsletter => ".main-cta-section",
            SectionTag::Instagram => ".instagram-section",
            SectionTag::Contact => "footer",
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| format!("unknown section tag `{s}`"))
    }
}

/// Tag every untagged section root with its section key. Nodes that already
/// carry a tag keep it. Returns how many nodes were tagged.
pub fn tag_sections(document: &Document) -> usize {
    let mut tagged = 0;
    for tag in SectionTag::ALL {
        for node in document.select_all(tag.selector()) {
            if dom::attr(&node, PREVIEW_ATTR).is_none() {
                dom::set_attr(&node, PREVIEW_ATTR, tag.as_str());
                tagged += 1;
            }
        }
    }
    tagged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_tag() {
        for tag in SectionTag::ALL {
            assert_eq!(tag.as_str().parse::<SectionTag>(), Ok(tag));
        }
        assert!("events".parse::<SectionTag>().is_err());
    }

    #[test]
    fn tags_untagged_roots_and_keeps_existing() {
        let doc = Document::parse(concat!(
            r#"<section class="hero-section"></section>"#,
            r#"<section class="team-section" data-preview="custom"></section>"#,
            r#"<footer></footer>"#,
        ));

        assert_eq!(tag_sections(&doc), 2);
        assert_eq!(
            doc.html(),
            concat!(
                r#"<section class="hero-section" data-preview="hero"></section>"#,
                r#"<section class="team-section" data-preview="custom"></section>"#,
                r#"<footer data-preview="contact"></footer>"#,
            )
        );
        assert_eq!(tag_sections(&doc), 0);
    }
}
