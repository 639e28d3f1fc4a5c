pub mod external_link;
pub mod footer;
pub mod icons;
pub mod logo;

pub use external_link::ExternalLink;
pub use footer::Footer;
pub use icons::SocialIconGlyph;
pub use logo::GolemLogo;
