//! Display model for the landing page.
//!
//! `Page::build` decides what every section shows (text, card order, footer
//! year); the components in `sections` only turn it into markup.

use crate::content::SiteContent;

pub const BOOK_NOW_LABEL: &str = "Book Now";
pub const GALLERY_HEADING: &str = "Gallery";
pub const TEAM_HEADING: &str = "Meet Our Team";
pub const CONTACT_HEADING: &str = "Contact Us";

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub header: HeaderView,
    pub hero: HeroView,
    pub services: Vec<Card>,
    pub gallery: Vec<Thumbnail>,
    pub team: Vec<Card>,
    pub contact: Vec<ContactLine>,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub logo_src: String,
    pub logo_alt: String,
    pub brand: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub heading: String,
    pub tagline: String,
    pub background: String,
    pub cta_label: &'static str,
}

/// Title + body card, used for services (description) and team (role).
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactLine {
    pub icon: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub year: i32,
    pub brand: String,
}

impl FooterView {
    pub fn text(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.brand)
    }
}

impl Page {
    pub fn build(content: &SiteContent, year: i32) -> Self {
        let header = HeaderView {
            logo_src: content.logo.clone(),
            logo_alt: format!("{} Logo", content.brand),
            brand: content.brand.clone(),
            tagline: content.tagline.clone(),
        };

        let hero = HeroView {
            heading: format!("Welcome to {}", content.brand),
            tagline: content.tagline.clone(),
            background: content.hero_image.clone(),
            cta_label: BOOK_NOW_LABEL,
        };

        let services = content
            .services
            .iter()
            .map(|s| Card {
                title: s.title.clone(),
                body: s.description.clone(),
            })
            .collect();

        // alt text is 1-based, matching how a visitor would count them
        let gallery = content
            .gallery
            .iter()
            .enumerate()
            .map(|(i, src)| Thumbnail {
                src: src.clone(),
                alt: format!("Gallery {}", i + 1),
            })
            .collect();

        let team = content
            .team
            .iter()
            .map(|m| Card {
                title: m.name.clone(),
                body: m.role.clone(),
            })
            .collect();

        let contact = vec![
            ContactLine {
                icon: "📞",
                text: content.contact.phone.clone(),
            },
            ContactLine {
                icon: "📧",
                text: content.contact.email.clone(),
            },
            ContactLine {
                icon: "📍",
                text: content.contact.address.clone(),
            },
        ];

        let footer = FooterView {
            year,
            brand: content.brand.clone(),
        };

        Page {
            header,
            hero,
            services,
            gallery,
            team,
            contact,
            footer,
        }
    }
}
