use serde::{Deserialize, Serialize};

use super::id::EntityId;

/// The whole site, persisted as a single JSON document.
///
/// Every struct defaults missing fields so that an older or hand-edited
/// file still loads with the full shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub branding: Branding,
    pub navigation: Navigation,
    pub programs_section: SectionHeading,
    pub hero: HeroContent,
    pub programs: Vec<Program>,
    pub program_decorations: ProgramDecorations,
    pub instructors_decorations: InstructorsDecorations,
    pub testimonials_section: SectionHeading,
    pub partners: Vec<Partner>,
    pub about: AboutSection,
    pub benefits: BenefitsSection,
    pub activities: ActivitiesSection,
    pub activities_decorations: ActivitiesDecorations,
    pub gallery: GallerySection,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub events: Vec<EventItem>,
    pub blog: BlogSection,
    pub call_to_action: CallToAction,
    pub newsletter: NewsletterSection,
    pub instagram: Vec<InstagramItem>,
    pub instructors: Vec<Instructor>,
    pub contact: ContactInfo,
    pub footer: FooterContent,
}

/// Icon keys the theme's icon font knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialIcon {
    #[default]
    #[serde(rename = "facebook-f")]
    FacebookF,
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "linkedin-in")]
    LinkedinIn,
    #[serde(rename = "x-twitter")]
    XTwitter,
    #[serde(rename = "youtube")]
    Youtube,
    #[serde(rename = "tiktok")]
    Tiktok,
    #[serde(rename = "whatsapp")]
    Whatsapp,
}

impl SocialIcon {
    pub const ALL: [SocialIcon; 7] = [
        SocialIcon::FacebookF,
        SocialIcon::Instagram,
        SocialIcon::LinkedinIn,
        SocialIcon::XTwitter,
        SocialIcon::Youtube,
        SocialIcon::Tiktok,
        SocialIcon::Whatsapp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::FacebookF => "facebook-f",
            SocialIcon::Instagram => "instagram",
            SocialIcon::LinkedinIn => "linkedin-in",
            SocialIcon::XTwitter => "x-twitter",
            SocialIcon::Youtube => "youtube",
            SocialIcon::Tiktok => "tiktok",
            SocialIcon::Whatsapp => "whatsapp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialIcon::FacebookF => "Facebook",
            SocialIcon::Instagram => "Instagram",
            SocialIcon::LinkedinIn => "LinkedIn",
            SocialIcon::XTwitter => "X",
            SocialIcon::Youtube => "YouTube",
            SocialIcon::Tiktok => "TikTok",
            SocialIcon::Whatsapp => "WhatsApp",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: SocialIcon,
}

impl SocialLink {
    /// A link without a target is omitted from the page, not rendered blank.
    pub fn is_present(&self) -> bool {
        !self.href.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branding {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub cta_label: String,
    pub cta_link: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Navigation {
    pub menu: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub label: String,
    pub href: String,
}

/// Tagline plus title; the title may contain `\n` line breaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionHeading {
    pub tagline: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroMedia {
    pub image: String,
    pub shape: String,
    pub video_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroDecoration {
    pub id: String,
    pub label: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroContent {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub highlight: String,
    pub badges: Vec<String>,
    pub stats: Vec<Stat>,
    pub media: HeroMedia,
    pub decorations: Vec<HeroDecoration>,
    pub primary_cta: CtaButton,
    pub secondary_cta: CtaButton,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub age_range: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramDecorations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_shape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pencil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compass: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorsDecorations {
    pub love_shape: String,
    pub frame_shape: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    pub id: EntityId,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutImages {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutSection {
    pub tagline: String,
    pub title: String,
    pub text: String,
    pub bullets: Vec<String>,
    pub stats: Vec<Stat>,
    /// Falls back to `branding.ctaLabel` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_label: Option<String>,
    /// Falls back to `branding.ctaLink` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
    /// Falls back to `contact.whatsapp` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub images: AboutImages,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitItem {
    pub title: String,
    pub description: String,
    /// Either an icon-font class or an image path/URL.
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenefitsSection {
    pub tagline: String,
    pub title: String,
    pub items: Vec<BenefitItem>,
}

/// Activity items have no id; they are identified by position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitiesSection {
    pub tagline: String,
    pub title: String,
    pub image: String,
    pub items: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivitiesDecorations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pencil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub giraffe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    pub id: EntityId,
    pub image: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GallerySection {
    pub tagline: String,
    pub title: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub message: String,
    pub avatar: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventItem {
    pub id: EntityId,
    pub date: String,
    pub time: String,
    pub title: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: String,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogSection {
    pub tagline: String,
    pub title: String,
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CallToAction {
    pub eyebrow: String,
    pub title: String,
    pub text: String,
    pub button: CtaButton,
    pub stats: Vec<Stat>,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningHours {
    pub days: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub whatsapp: String,
    pub email: String,
    pub address: String,
    pub hours: Vec<OpeningHours>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterNewsletter {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterContent {
    pub text: String,
    pub quick_links: Vec<NavItem>,
    pub policies: Vec<NavItem>,
    pub newsletter: FooterNewsletter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsletterSection {
    pub eyebrow: String,
    pub title: String,
    pub button_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstagramItem {
    pub id: EntityId,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instructor {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub socials: Vec<SocialLink>,
}
