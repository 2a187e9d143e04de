//! Markup for repeated blocks, one fragment per entity.
//!
//! Attribute values are escaped; text fields go in as markup so editors can
//! use inline tags such as `<br>`.

use clevio_core::content::{
    ActivityItem, BenefitItem, BlogPost, InstagramItem, Instructor, NavItem, Partner, Program,
    SocialLink, Testimonial,
};

use crate::dom::escape_attr;

const ARROW_ICON: &str = r#"<i class="fa-solid fa-arrow-right-long"></i>"#;
const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// `wow` animation delay for the item at `index`.
fn delay(base: f64, index: usize) -> String {
    let seconds = base + index as f64 * 0.2;
    format!("{}s", (seconds * 10.0).round() / 10.0)
}

/// Variant class for the 2nd and 3rd item of a rotating design.
fn rotation(index: usize, second: &'static str, third: &'static str) -> &'static str {
    match index {
        1 => second,
        2 => third,
        _ => "",
    }
}

pub fn arrow_label(label: &str) -> String {
    format!("{label} {ARROW_ICON}")
}

pub fn arrow_label_tight(label: &str) -> String {
    format!("{label}{ARROW_ICON}")
}

pub fn nav_item(item: &NavItem) -> String {
    format!(
        r#"<li><a href="{}">{}</a></li>"#,
        escape_attr(&item.href),
        item.label
    )
}

/// Icon links for the header bars; links without a target are omitted.
pub fn social_links(socials: &[SocialLink]) -> String {
    socials
        .iter()
        .filter(|social| social.is_present())
        .map(|social| {
            format!(
                r#"<a href="{}" target="_blank" rel="noreferrer" aria-label="{}"><i class="fab fa-{}"></i></a>"#,
                escape_attr(&social.href),
                escape_attr(&social.label),
                social.icon.as_str()
            )
        })
        .collect()
}

/// Split bullets into two columns by alternating index.
pub fn about_columns(bullets: &[String]) -> Vec<String> {
    let mut columns: [Vec<&str>; 2] = [Vec::new(), Vec::new()];
    for (index, bullet) in bullets.iter().enumerate() {
        columns[index % 2].push(bullet);
    }
    columns
        .iter()
        .enumerate()
        .map(|(column, items)| {
            let items: String = items
                .iter()
                .map(|item| format!(r#"<li><i class="fa-regular fa-circle-check"></i>{item}</li>"#))
                .collect();
            let delay = if column == 0 { ".3s" } else { ".5s" };
            format!(r#"<ul class="wow fadeInUp" data-wow-delay="{delay}">{items}</ul>"#)
        })
        .collect()
}

pub fn program_card(index: usize, program: &Program) -> String {
    format!(
        concat!(
            r#"<div class="col-xl-4 col-lg-6 col-md-6 wow fadeInUp" data-wow-delay="{delay}">"#,
            r#"<div class="program-box-items">"#,
            r#"<div class="program-bg {bg}"></div>"#,
            r#"<div class="program-image"><img src="{image}" alt="{alt}"></div>"#,
            r#"<div class="program-content text-center {style}">"#,
            r##"<h4><a href="#programs">{title}</a></h4>"##,
            r#"<span>{age}</span>"#,
            r#"<p>{description}</p>"#,
            r##"<a href="#programs" class="arrow-icon {color}">{arrow}</a>"##,
            r#"</div></div></div>"#,
        ),
        delay = delay(0.3, index),
        bg = rotation(index, "bg-2", "bg-3"),
        image = escape_attr(&program.image),
        alt = escape_attr(&program.title),
        style = if index == 2 { "style-2" } else { "" },
        title = program.title,
        age = program.age_range,
        description = program.description,
        color = if index == 1 { "color-2" } else { "" },
        arrow = ARROW_ICON,
    )
}

fn is_image_icon(icon: &str) -> bool {
    let lower = icon.to_ascii_lowercase();
    icon.starts_with("http")
        || icon.starts_with('/')
        || IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// A work-process step. Odd steps zig-zag; every step but the last gets a
/// connector line.
pub fn work_step(index: usize, total: usize, item: &BenefitItem) -> String {
    let is_last = index + 1 == total;
    let zigzag = index % 2 == 1;
    let item_style = if zigzag || is_last { "style-2" } else { "" };

    let line = if is_last {
        String::new()
    } else {
        let (class, image) = if zigzag {
            ("line-shape-2", "line-2.png")
        } else {
            ("line-shape", "line.png")
        };
        format!(r#"<div class="{class}"><img src="/assets/img/process/{image}" alt="shape"></div>"#)
    };

    let icon = if !item.icon.is_empty() && is_image_icon(&item.icon) {
        format!(
            r#"<div class="icon icon-uploaded"><img src="{}" alt="{} icon"></div>"#,
            escape_attr(&item.icon),
            escape_attr(&item.title)
        )
    } else {
        let class = if item.icon.is_empty() {
            format!("icon-icon-{}", index % 4 + 1)
        } else {
            item.icon.clone()
        };
        format!(
            r#"<div class="icon bg-cover" style="background-image: url('/assets/img/process/icon-bg.png');"><i class="{}"></i></div>"#,
            escape_attr(&class)
        )
    };

    format!(
        concat!(
            r#"<div class="col-xl-3 col-lg-4 col-md-6 wow fadeInUp" data-wow-delay="{delay}">"#,
            r#"<div class="work-process-items text-center {style}">"#,
            "{line}{icon}",
            r#"<div class="content"><h4>{title}</h4><p>{description}</p></div>"#,
            r#"</div></div>"#,
        ),
        delay = delay(0.3, index),
        style = item_style,
        line = line,
        icon = icon,
        title = item.title,
        description = item.description,
    )
}

pub fn activity_item(index: usize, item: &ActivityItem) -> String {
    let icon = match item.icon.as_deref() {
        Some(icon) if !icon.is_empty() => icon.to_string(),
        _ => format!("icon-icon-{}", index % 8 + 1),
    };
    format!(
        concat!(
            r#"<div class="col-xl-6 col-lg-8 col-md-6 wow fadeInUp" data-wow-delay="{delay}">"#,
            r#"<div class="icon-items">"#,
            r#"<div class="icon box-color-{color}"><i class="{icon}"></i></div>"#,
            r#"<div class="content"><h5>{title}</h5><p>{description}</p></div>"#,
            r#"</div></div>"#,
        ),
        delay = delay(0.3, index),
        color = index % 4 + 1,
        icon = escape_attr(&icon),
        title = item.title,
        description = item.description,
    )
}

pub fn testimonial_slide(index: usize, testimonial: &Testimonial) -> String {
    format!(
        concat!(
            r#"<div class="swiper-slide">"#,
            r#"<div class="testimonial-items {style}">"#,
            r#"<div class="icon"><img src="/assets/img/quote{quote}.png" alt="quote"></div>"#,
            r#"<div class="testimonial-bg {bg}"></div>"#,
            r#"<div class="testimonial-content"><p>{message}</p><h6>{name}</h6><span>{role}</span></div>"#,
            r#"</div></div>"#,
        ),
        style = rotation(index, "style-2", "style-3"),
        quote = rotation(index, "-2", "-3"),
        bg = rotation(index, "bg-2", "bg-3"),
        message = testimonial.message,
        name = testimonial.name,
        role = testimonial.role,
    )
}

pub fn partner_logo(partner: &Partner) -> String {
    format!(
        r#"<div class="partner-logo"><img src="{}" alt="partner logo"></div>"#,
        escape_attr(&partner.logo)
    )
}

/// Author and date line shared by the featured and secondary news items.
pub fn news_meta(post: &BlogPost) -> String {
    format!(
        r#"<li><i class="fas fa-tag"></i>{}</li><li><i class="fa-solid fa-calendar-days"></i>{}</li>"#,
        post.author, post.date
    )
}

pub fn news_item(index: usize, post: &BlogPost) -> String {
    format!(
        concat!(
            r#"<div class="news-right-items wow fadeInUp" data-wow-delay="{delay}">"#,
            r#"<div class="news-thumb"><img src="{image}" alt="{alt}"></div>"#,
            r#"<div class="news-content">"#,
            r#"<ul>{meta}</ul>"#,
            r#"<h3>{title}</h3>"#,
            r#"<div class="post-items">"#,
            r#"<div class="thumb"><img src="/assets/img/news/author.png" alt="author"></div>"#,
            r#"<div class="content"><span>By Admin</span><h6>{author}</h6></div>"#,
            r#"</div></div></div>"#,
        ),
        delay = delay(0.4, index),
        image = escape_attr(&post.image),
        alt = escape_attr(&post.title),
        meta = news_meta(post),
        title = post.title,
        author = post.author,
    )
}

pub fn instructor_card(instructor: &Instructor) -> String {
    let socials: String = instructor
        .socials
        .iter()
        .filter(|social| social.is_present())
        .map(|social| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noreferrer"><i class="fab fa-{}"></i></a></li>"#,
                escape_attr(&social.href),
                social.icon.as_str()
            )
        })
        .collect();
    format!(
        concat!(
            r#"<div class="team-items">"#,
            r#"<div class="team-image"><img src="{avatar}" alt="{alt}">"#,
            r#"<div class="social-profile"><span class="plus-btn"><i class="fas fa-share-alt"></i></span>"#,
            r#"<ul>{socials}</ul></div></div>"#,
            r##"<div class="team-content"><h3><a href="#instructors">{name}</a></h3><p>{role}</p></div>"##,
            r#"</div>"#,
        ),
        avatar = escape_attr(&instructor.avatar),
        alt = escape_attr(&instructor.name),
        socials = socials,
        name = instructor.name,
        role = instructor.role,
    )
}

pub fn instagram_tile(item: &InstagramItem) -> String {
    format!(
        concat!(
            r#"<div class="instagram-banner-items"><div class="banner-image">"#,
            r#"<img src="{image}" alt="instagram">"#,
            r#"<a href="{link}" target="_blank" rel="noreferrer" class="icon"><i class="fa-brands fa-instagram"></i></a>"#,
            r#"</div></div>"#,
        ),
        image = escape_attr(&item.image),
        link = escape_attr(&item.link),
    )
}
