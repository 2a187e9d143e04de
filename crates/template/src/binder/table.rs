//! The theme's binding table, in application order.

use clevio_core::content::{BlogPost, SiteContent};

use super::fragments;
use super::{BindingPoint, Target, Write};
use crate::dom::{escape_attr, escape_text};
use crate::preview::SectionTag;

const HERO_DECORATIONS: [(&str, &str, &str); 8] = [
    ("bottom", "hero.decoration.bottom", ".hero-section .bottom-shape img"),
    ("parasuit", "hero.decoration.parasuit", ".hero-section .parasuit-shape img"),
    ("left", "hero.decoration.left", ".hero-section .left-shape img"),
    ("book", "hero.decoration.book", ".hero-section .book-shape img"),
    ("pencil", "hero.decoration.pencil", ".hero-section .pencil-shape img"),
    ("bee", "hero.decoration.bee", ".hero-section .bee-shape img"),
    ("right", "hero.decoration.right", ".hero-section .right-shape img"),
    ("star", "hero.decoration.star", ".hero-section .star-shape img"),
];

const OFFCANVAS_CONTACT: &str = ".offcanvas__contact ul li";
const DEFAULT_HOURS: &str = "Sen-Jum, 07.00-17.00";
const CTA_TEXT_MARKUP: &str = r#"<p class="text-white wow fadeInUp cta-text" data-wow-delay=".35s"></p>"#;

fn line_breaks(title: &str) -> String {
    title.replace('\n', "<br>")
}

/// Keep `+` and digits for a `tel:` link, falling back to the raw value.
fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| *c == '+' || c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        format!("tel:{phone}")
    } else {
        format!("tel:{digits}")
    }
}

fn non_empty(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.clone(),
        _ => fallback.to_string(),
    }
}

fn featured(content: &SiteContent) -> Option<&BlogPost> {
    content.blog.posts.first()
}

pub fn binding_points() -> Vec<BindingPoint> {
    let mut points = Vec::new();
    preloader(&mut points);
    header(&mut points);
    hero(&mut points);
    about(&mut points);
    programs(&mut points);
    work_process(&mut points);
    activities(&mut points);
    testimonials(&mut points);
    partners(&mut points);
    cta(&mut points);
    news(&mut points);
    newsletter(&mut points);
    instructors(&mut points);
    instagram(&mut points);
    footer(&mut points);
    points
}

fn preloader(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "preloader.letters",
        SectionTag::Header,
        Target::First(".txt-loading"),
        |c| {
            let name = escape_attr(&c.branding.name);
            Some(Write::Html(format!(
                r#"<span class="letters-loading" data-text-preloader="{name}">{name}</span>"#
            )))
        },
    ));
    points.push(BindingPoint::new(
        "preloader.caption",
        SectionTag::Header,
        Target::First("#preloader .text-center"),
        |c| Some(Write::Text(format!("Loading {}", c.branding.name))),
    ));
}

fn header(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "header.logos",
        SectionTag::Header,
        Target::All(".header-left .logo img, .header-logo img, .offcanvas__logo img"),
        |c| {
            Some(Write::Attrs(vec![
                ("src", c.branding.logo.clone()),
                ("alt", c.branding.name.clone()),
            ]))
        },
    ));
    points.push(BindingPoint::new(
        "header.menu",
        SectionTag::Header,
        Target::First(".main-menu nav ul"),
        |c| {
            Some(Write::List(
                c.navigation.menu.iter().map(fragments::nav_item).collect(),
            ))
        },
    ));
    points.push(BindingPoint::new(
        "header.cta.label",
        SectionTag::Header,
        Target::All(".header-main .header-button .theme-btn span"),
        |c| Some(Write::Html(fragments::arrow_label_tight(&c.branding.cta_label))),
    ));
    points.push(BindingPoint::new(
        "header.cta.link",
        SectionTag::Header,
        Target::All(".header-main .header-button .theme-btn"),
        |c| Some(Write::href(&c.branding.cta_link)),
    ));
    points.push(BindingPoint::new(
        "header.offcanvas.cta",
        SectionTag::Header,
        Target::All(".offcanvas__contact .header-button .theme-btn"),
        |c| {
            Some(Write::Anchor {
                href: c.branding.cta_link.clone(),
                html: format!(
                    "<span>{}</span>",
                    fragments::arrow_label_tight(&c.branding.cta_label)
                ),
            })
        },
    ));
    points.push(BindingPoint::new(
        "header.offcanvas.address",
        SectionTag::Header,
        Target::Nth(OFFCANVAS_CONTACT, 0),
        |c| {
            Some(Write::Html(format!(
                r##"<div class="offcanvas__contact-icon"><i class="fal fa-map-marker-alt"></i></div><div class="offcanvas__contact-text"><a href="#">{}</a></div>"##,
                c.branding.address
            )))
        },
    ));
    points.push(BindingPoint::new(
        "header.offcanvas.email",
        SectionTag::Header,
        Target::Nth(OFFCANVAS_CONTACT, 1),
        |c| {
            Some(Write::Html(format!(
                r#"<div class="offcanvas__contact-icon"><i class="fal fa-envelope"></i></div><div class="offcanvas__contact-text"><a href="mailto:{}">{}</a></div>"#,
                escape_attr(&c.branding.email),
                c.branding.email
            )))
        },
    ));
    points.push(BindingPoint::new(
        "header.offcanvas.hours",
        SectionTag::Header,
        Target::Nth(OFFCANVAS_CONTACT, 2),
        |c| {
            let hours = match c.contact.hours.first() {
                Some(hours) => format!("{}, {}", hours.days, hours.time),
                None => DEFAULT_HOURS.to_string(),
            };
            Some(Write::Html(format!(
                r##"<div class="offcanvas__contact-icon"><i class="fal fa-clock"></i></div><div class="offcanvas__contact-text"><a href="#">{hours}</a></div>"##
            )))
        },
    ));
    points.push(BindingPoint::new(
        "header.offcanvas.phone",
        SectionTag::Header,
        Target::Nth(OFFCANVAS_CONTACT, 3),
        |_| Some(Write::Remove),
    ));
    points.push(BindingPoint::new(
        "header.top.address",
        SectionTag::HeaderTop,
        Target::Nth(".header-top-section .contact-list li", 0),
        |c| {
            Some(Write::Html(format!(
                r#"<i class="fal fa-map-marker-alt"></i>{}"#,
                c.branding.address
            )))
        },
    ));
    points.push(BindingPoint::new(
        "header.top.email",
        SectionTag::HeaderTop,
        Target::Nth(".header-top-section .contact-list li", 1),
        |c| {
            Some(Write::Html(format!(
                r#"<i class="far fa-envelope"></i><a href="mailto:{}" class="link">{}</a>"#,
                escape_attr(&c.branding.email),
                c.branding.email
            )))
        },
    ));
    points.push(BindingPoint::new(
        "header.top.socials",
        SectionTag::HeaderTop,
        Target::First(".header-top-section .social-icon"),
        |c| {
            Some(Write::Html(format!(
                "<span>Follow Us On:</span>{}",
                fragments::social_links(&c.branding.socials)
            )))
        },
    ));
    points.push(BindingPoint::new(
        "header.offcanvas.socials",
        SectionTag::Header,
        Target::First(".offcanvas__contact .social-icon"),
        |c| Some(Write::Html(fragments::social_links(&c.branding.socials))),
    ));
}

fn hero(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "hero.eyebrow",
        SectionTag::Hero,
        Target::First(".hero-section .hero-content h5"),
        |c| Some(Write::Text(c.hero.eyebrow.clone())),
    ));
    points.push(BindingPoint::new(
        "hero.title",
        SectionTag::Hero,
        Target::First(".hero-section .hero-content h1"),
        |c| Some(Write::Html(c.hero.title.clone())),
    ));
    points.push(BindingPoint::new(
        "hero.description",
        SectionTag::Hero,
        Target::First(".hero-section .hero-content p"),
        |c| Some(Write::Text(c.hero.description.clone())),
    ));
    points.push(BindingPoint::new(
        "hero.cta",
        SectionTag::Hero,
        Target::First(".hero-section .hero-content .theme-btn"),
        |c| {
            Some(Write::Anchor {
                href: c.hero.primary_cta.href.clone(),
                html: fragments::arrow_label(&c.hero.primary_cta.label),
            })
        },
    ));
    points.push(BindingPoint::new(
        "hero.video",
        SectionTag::Hero,
        Target::First(".hero-section .hero-content .video-btn"),
        |c| Some(Write::href(&c.hero.media.video_url)),
    ));
    points.push(BindingPoint::new(
        "hero.image",
        SectionTag::Hero,
        Target::First(".hero-image img"),
        |c| Some(Write::src(&c.hero.media.image)),
    ));
    points.push(BindingPoint::new(
        "hero.shape",
        SectionTag::Hero,
        Target::First(".hero-image .hero-shape img"),
        |c| Some(Write::src(&c.hero.media.shape)),
    ));
    points.push(BindingPoint::new(
        "hero.layout.row",
        SectionTag::Hero,
        Target::First(".hero-section.hero-1 .row"),
        |_| Some(Write::AddClasses(&["align-items-end"])),
    ));
    points.push(BindingPoint::new(
        "hero.layout.content",
        SectionTag::Hero,
        Target::First(".hero-section.hero-1 .col-lg-6:first-child .hero-content"),
        |_| {
            Some(Write::AddClasses(&[
                "d-flex",
                "flex-column",
                "justify-content-end",
                "pb-5",
            ]))
        },
    ));
    for (id, name, selector) in HERO_DECORATIONS {
        points.push(BindingPoint::new(
            name,
            SectionTag::Hero,
            Target::First(selector),
            move |c| {
                c.hero
                    .decorations
                    .iter()
                    .find(|decoration| decoration.id == id)
                    .map(|decoration| Write::src(&decoration.image))
            },
        ));
    }
}

fn about(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "about.image.primary",
        SectionTag::About,
        Target::First(".about-image img"),
        |c| Some(Write::src(&c.about.images.primary)),
    ));
    points.push(BindingPoint::new(
        "about.image.secondary",
        SectionTag::About,
        Target::First(".about-image-2 img"),
        |c| Some(Write::src(&c.about.images.secondary)),
    ));
    points.push(BindingPoint::new(
        "about.tagline",
        SectionTag::About,
        Target::First(".about-content .section-title span"),
        |c| Some(Write::Text(c.about.tagline.clone())),
    ));
    points.push(BindingPoint::new(
        "about.title",
        SectionTag::About,
        Target::First(".about-content .section-title h2"),
        |c| Some(Write::Text(c.about.title.clone())),
    ));
    points.push(BindingPoint::new(
        "about.text",
        SectionTag::About,
        Target::First(".about-content p"),
        |c| Some(Write::Text(c.about.text.clone())),
    ));
    points.push(BindingPoint::new(
        "about.bullets",
        SectionTag::About,
        Target::First(".about-content .about-list"),
        |c| Some(Write::List(fragments::about_columns(&c.about.bullets))),
    ));
    points.push(BindingPoint::new(
        "about.cta",
        SectionTag::About,
        Target::First(".about-content .about-button .theme-btn"),
        |c| {
            let label = non_empty(c.about.cta_label.as_ref(), &c.branding.cta_label);
            Some(Write::Anchor {
                href: non_empty(c.about.cta_link.as_ref(), &c.branding.cta_link),
                html: fragments::arrow_label(&label),
            })
        },
    ));
    points.push(BindingPoint::new(
        "about.phone",
        SectionTag::About,
        Target::First(".about-content .author-icon h5 a"),
        |c| {
            let phone = non_empty(c.about.phone.as_ref(), &c.contact.whatsapp);
            Some(Write::Anchor {
                href: tel_href(&phone),
                html: escape_text(&phone),
            })
        },
    ));
}

fn programs(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "programs.decoration.top",
        SectionTag::Programs,
        Target::First(".program-section .top-shape img"),
        |c| c.program_decorations.top_shape.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "programs.decoration.bottom",
        SectionTag::Programs,
        Target::First(".program-section .bottom-shape img"),
        |c| c.program_decorations.bottom_shape.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "programs.decoration.mask",
        SectionTag::Programs,
        Target::First(".program-section .mask-shape img"),
        |c| c.program_decorations.mask.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "programs.decoration.mask2",
        SectionTag::Programs,
        Target::First(".program-section .mask-shape-2 img"),
        |c| c.program_decorations.mask2.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "programs.decoration.pencil",
        SectionTag::Programs,
        Target::First(".program-section .pencil-shape img"),
        |c| c.program_decorations.pencil.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "programs.decoration.compass",
        SectionTag::Programs,
        Target::First(".program-section .compass-shape img"),
        |c| c.program_decorations.compass.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "programs.tagline",
        SectionTag::Programs,
        Target::First(".program-section .section-title span"),
        |c| Some(Write::Text(c.programs_section.tagline.clone())),
    ));
    points.push(BindingPoint::new(
        "programs.title",
        SectionTag::Programs,
        Target::First(".program-section .section-title h2"),
        |c| Some(Write::Html(line_breaks(&c.programs_section.title))),
    ));
    points.push(BindingPoint::new(
        "programs.cards",
        SectionTag::Programs,
        Target::First(".program-section .row"),
        |c| {
            Some(Write::List(
                c.programs
                    .iter()
                    .enumerate()
                    .map(|(index, program)| fragments::program_card(index, program))
                    .collect(),
            ))
        },
    ));
}

fn work_process(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "work-process.steps",
        SectionTag::WorkProcess,
        Target::First(".work-process-section .row"),
        |c| {
            let items = &c.benefits.items;
            Some(Write::List(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| fragments::work_step(index, items.len(), item))
                    .collect(),
            ))
        },
    ));
}

fn activities(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "activities.decoration.pencil",
        SectionTag::Activities,
        Target::First(".about-activities-section .pencil-shape img"),
        |c| c.activities_decorations.pencil.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "activities.decoration.giraffe",
        SectionTag::Activities,
        Target::First(".about-activities-section .zebra-shape img"),
        |c| c.activities_decorations.giraffe.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "activities.decoration.radius",
        SectionTag::Activities,
        Target::First(".about-activities-section .radius-shape img"),
        |c| c.activities_decorations.radius.as_deref().map(Write::src),
    ));
    points.push(BindingPoint::new(
        "activities.tagline",
        SectionTag::Activities,
        Target::First(".about-activities-section .section-title span"),
        |c| Some(Write::Text(c.activities.tagline.clone())),
    ));
    points.push(BindingPoint::new(
        "activities.title",
        SectionTag::Activities,
        Target::First(".about-activities-section .section-title h2"),
        |c| Some(Write::Text(c.activities.title.clone())),
    ));
    points.push(BindingPoint::new(
        "activities.image",
        SectionTag::Activities,
        Target::First(".activities-image img"),
        |c| Some(Write::src(&c.activities.image)),
    ));
    points.push(BindingPoint::new(
        "activities.items",
        SectionTag::Activities,
        Target::First(".about-activities-section .row.g-4.mt-4"),
        |c| {
            Some(Write::List(
                c.activities
                    .items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| fragments::activity_item(index, item))
                    .collect(),
            ))
        },
    ));
}

fn testimonials(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "testimonials.tagline",
        SectionTag::Testimonials,
        Target::First(".testimonial-section .section-title span"),
        |c| Some(Write::Text(c.testimonials_section.tagline.clone())),
    ));
    points.push(BindingPoint::new(
        "testimonials.title",
        SectionTag::Testimonials,
        Target::First(".testimonial-section .section-title h2"),
        |c| Some(Write::Html(line_breaks(&c.testimonials_section.title))),
    ));
    points.push(BindingPoint::new(
        "testimonials.slides",
        SectionTag::Testimonials,
        Target::First(".testimonial-section .swiper-wrapper"),
        |c| {
            Some(Write::List(
                c.testimonials
                    .iter()
                    .enumerate()
                    .map(|(index, testimonial)| fragments::testimonial_slide(index, testimonial))
                    .collect(),
            ))
        },
    ));
}

fn partners(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "partners.marquee",
        SectionTag::Partners,
        Target::First(".partner-track[data-partner-track]"),
        |c| {
            let logos: Vec<String> = c.partners.iter().map(fragments::partner_logo).collect();
            // The marquee loops by scrolling through two copies of the sequence.
            let mut track = logos.clone();
            track.extend(logos);
            Some(Write::List(track))
        },
    ));
}

fn cta(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "cta.eyebrow",
        SectionTag::Cta,
        Target::First(".cta-section .section-title span"),
        |c| Some(Write::Text(c.call_to_action.eyebrow.clone())),
    ));
    points.push(BindingPoint::new(
        "cta.title",
        SectionTag::Cta,
        Target::First(".cta-section .section-title h2"),
        |c| Some(Write::Html(c.call_to_action.title.clone())),
    ));
    points.push(BindingPoint::new(
        "cta.text",
        SectionTag::Cta,
        Target::First(".cta-section .section-title"),
        |c| {
            Some(Write::ChildText {
                selector: ".cta-text",
                markup: CTA_TEXT_MARKUP,
                text: c.call_to_action.text.clone(),
            })
        },
    ));
    points.push(BindingPoint::new(
        "cta.button",
        SectionTag::Cta,
        Target::First(".cta-section .theme-btn"),
        |c| {
            Some(Write::Anchor {
                href: c.call_to_action.button.href.clone(),
                html: fragments::arrow_label(&c.call_to_action.button.label),
            })
        },
    ));
    points.push(BindingPoint::new(
        "cta.image",
        SectionTag::Cta,
        Target::First(".cta-section .cta-image img"),
        |c| Some(Write::src(&c.call_to_action.image)),
    ));
}

fn news(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "news.tagline",
        SectionTag::News,
        Target::First(".news-section .section-title span"),
        |c| Some(Write::Text(c.blog.tagline.clone())),
    ));
    points.push(BindingPoint::new(
        "news.title",
        SectionTag::News,
        Target::First(".news-section .section-title h2"),
        |c| Some(Write::Html(c.blog.title.clone())),
    ));
    points.push(BindingPoint::new(
        "news.featured.image",
        SectionTag::News,
        Target::First(".news-single-items .news-image img"),
        |c| featured(c).map(|post| Write::src(&post.image)),
    ));
    points.push(BindingPoint::new(
        "news.featured.meta",
        SectionTag::News,
        Target::First(".news-single-items .news-content ul"),
        |c| featured(c).map(|post| Write::Html(fragments::news_meta(post))),
    ));
    points.push(BindingPoint::new(
        "news.featured.title",
        SectionTag::News,
        Target::First(".news-single-items .news-content h3"),
        |c| featured(c).map(|post| Write::Text(post.title.clone())),
    ));
    points.push(BindingPoint::new(
        "news.featured.excerpt",
        SectionTag::News,
        Target::First(".news-single-items .news-content p"),
        |c| featured(c).map(|post| Write::Text(post.excerpt.clone())),
    ));
    points.push(BindingPoint::new(
        "news.featured.author",
        SectionTag::News,
        Target::First(".news-single-items .post-author-items h6"),
        |c| featured(c).map(|post| Write::Text(post.author.clone())),
    ));
    points.push(BindingPoint::new(
        "news.rest",
        SectionTag::News,
        Target::First(".news-section .col-xl-6.mt-5"),
        |c| {
            Some(Write::List(
                c.blog
                    .posts
                    .iter()
                    .skip(1)
                    .enumerate()
                    .map(|(index, post)| fragments::news_item(index, post))
                    .collect(),
            ))
        },
    ));
}

fn newsletter(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "newsletter.eyebrow",
        SectionTag::Newsletter,
        Target::First(".main-cta-section .section-title span"),
        |c| Some(Write::Text(c.newsletter.eyebrow.clone())),
    ));
    points.push(BindingPoint::new(
        "newsletter.title",
        SectionTag::Newsletter,
        Target::First(".main-cta-section .section-title h2"),
        |c| Some(Write::Text(c.newsletter.title.clone())),
    ));
    points.push(BindingPoint::new(
        "newsletter.button",
        SectionTag::Newsletter,
        Target::First(".main-cta-section .theme-btn span"),
        |c| Some(Write::Text(c.newsletter.button_label.clone())),
    ));
}

fn instructors(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "instructors.decoration.love",
        SectionTag::Teachers,
        Target::First(".team-section .love-shape img"),
        |c| Some(Write::src(&c.instructors_decorations.love_shape)),
    ));
    points.push(BindingPoint::new(
        "instructors.decoration.frame",
        SectionTag::Teachers,
        Target::First(".team-section .frame-shape img"),
        |c| Some(Write::src(&c.instructors_decorations.frame_shape)),
    ));
    points.push(BindingPoint::new(
        "instructors.cards",
        SectionTag::Teachers,
        Target::First(".team-grid[data-team-grid]"),
        |c| {
            Some(Write::List(
                c.instructors.iter().map(fragments::instructor_card).collect(),
            ))
        },
    ));
}

fn instagram(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "instagram.grid",
        SectionTag::Instagram,
        Target::First(".instagram-grid[data-instagram-grid]"),
        |c| Some(Write::List(c.instagram.iter().map(fragments::instagram_tile).collect())),
    ));
}

fn footer(points: &mut Vec<BindingPoint>) {
    points.push(BindingPoint::new(
        "footer.contact",
        SectionTag::Contact,
        Target::First(".footer-widget .footer-contact"),
        |c| {
            Some(Write::Html(format!(
                concat!(
                    r#"<li><i class="fa-solid fa-phone"></i>{}</li>"#,
                    r#"<li><i class="fa-solid fa-envelope"></i>{}</li>"#,
                    r#"<li><i class="fa-solid fa-location-dot"></i>{}</li>"#,
                ),
                c.contact.whatsapp, c.contact.email, c.contact.address
            )))
        },
    ));
    points.push(BindingPoint::new(
        "footer.copyright",
        SectionTag::Contact,
        Target::First(".footer-bottom p"),
        |c| Some(Write::Text(c.footer.text.clone())),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_names_are_unique() {
        let points = binding_points();
        let names: HashSet<&str> = points.iter().map(|point| point.name).collect();
        assert_eq!(names.len(), points.len());
    }

    #[test]
    fn every_section_has_points() {
        let points = binding_points();
        for tag in SectionTag::ALL {
            assert!(
                points.iter().any(|point| point.section == tag),
                "no binding points for {tag}"
            );
        }
    }

    #[test]
    fn tel_href_keeps_plus_and_digits() {
        assert_eq!(tel_href("+62 812-3456"), "tel:+628123456");
        assert_eq!(tel_href("call us"), "tel:call us");
    }

    #[test]
    fn optional_about_fields_fall_back() {
        assert_eq!(non_empty(None, "fallback"), "fallback");
        assert_eq!(non_empty(Some(&" ".to_string()), "fallback"), "fallback");
        assert_eq!(non_empty(Some(&"own".to_string()), "fallback"), "own");
    }
}
