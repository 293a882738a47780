use serde::Deserialize;

use crate::error::ContentError;

/// Authored content shipped inside the binary; the same file Trunk copies next
/// to index.html, so an offline page still shows something.
const BUNDLED_JSON: &str = include_str!("../site.json");

const DEFAULT_HERO_IMAGE: &str = "/assets/hero-bg.jpg";

/// Everything the page shows. List order is display order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub tagline: String,
    pub logo: String,
    #[serde(default = "default_hero_image")]
    pub hero_image: String,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Service {
    pub title: String,
    #[serde(rename = "desc", alias = "description")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

fn default_hero_image() -> String {
    DEFAULT_HERO_IMAGE.to_string()
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_JSON)
    }

    /// Blank page shell, shown only when the bundled copy fails to parse.
    pub fn empty() -> Self {
        Self {
            brand: String::new(),
            tagline: String::new(),
            logo: String::new(),
            hero_image: default_hero_image(),
            services: Vec::new(),
            gallery: Vec::new(),
            team: Vec::new(),
            contact: Contact {
                phone: String::new(),
                email: String::new(),
                address: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::from_json(BUNDLED_JSON).expect("bundled site.json");
        assert_eq!(content.brand, "TajRoyal");
        assert_eq!(content.tagline, "Experience Luxury & Modern Living");
        assert_eq!(content.logo, "/assets/tajroyal-logo.png");
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.gallery.len(), 4);
        assert_eq!(content.team.len(), 3);
        assert_eq!(content.contact.email, "info@tajroyal.com");
        assert_eq!(SiteContent::bundled().expect("bundled"), content);
    }

    #[test]
    fn lists_keep_authored_order() {
        let content = SiteContent::bundled().expect("bundled");
        let titles: Vec<&str> = content.services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Luxury Suites", "Fine Dining", "Event Spaces", "Wellness & Spa"]
        );
        let names: Vec<&str> = content.team.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Taj Khan", "Sarah Lee", "David Miller"]);
        assert_eq!(content.gallery[0], "/assets/gallery-1.jpg");
        assert_eq!(content.gallery[3], "/assets/gallery-4.jpg");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let json = r#"{
            "brand": "Minimal",
            "tagline": "Just the basics",
            "logo": "/logo.png",
            "contact": { "phone": "1", "email": "a@b.c", "address": "Here" }
        }"#;
        let content = SiteContent::from_json(json).expect("minimal content");
        assert!(content.services.is_empty());
        assert!(content.gallery.is_empty());
        assert!(content.team.is_empty());
        assert_eq!(content.hero_image, "/assets/hero-bg.jpg");
    }

    #[test]
    fn empty_shell_has_no_cards() {
        let content = SiteContent::empty();
        assert!(content.brand.is_empty());
        assert!(content.services.is_empty());
        assert!(content.gallery.is_empty());
        assert!(content.team.is_empty());
        assert_eq!(content.hero_image, "/assets/hero-bg.jpg");
    }

    #[test]
    fn description_alias_is_accepted() {
        let json = r#"{ "title": "Spa", "description": "Relax." }"#;
        let service: Service = serde_json::from_str(json).expect("service");
        assert_eq!(service.description, "Relax.");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteContent::from_json("{ \"brand\": ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));

        let err = SiteContent::from_json(r#"{ "brand": "NoContact" }"#).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("site content is not valid JSON"));
    }
}
