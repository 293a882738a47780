mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod services;
mod team;

pub use contact::ContactSection;
pub use footer::SiteFooter;
pub use gallery::GallerySection;
pub use header::SiteHeader;
pub use hero::Hero;
pub use services::ServicesSection;
pub use team::TeamSection;
