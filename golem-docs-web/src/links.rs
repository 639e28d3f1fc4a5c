//! Static link tables rendered by the footer.
//!
//! Slice order is display order. Nothing here is built or changed at runtime.

use std::collections::HashSet;
use thiserror::Error;

/// Glyphs available to the social strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    GitHub,
    Twitter,
    Email,
    Discord,
}

impl SocialIcon {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Twitter => "twitter",
            Self::Email => "email",
            Self::Discord => "discord",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialEntry {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub heading: &'static str,
    pub entries: &'static [LinkEntry],
}

pub static GOLEM_LINKS: &[LinkEntry] = &[
    LinkEntry {
        label: "About",
        url: "https://www.golem.cloud",
    },
    LinkEntry {
        label: "Console",
        url: "https://console.golem.cloud",
    },
];

pub static SUPPORT_LINKS: &[LinkEntry] = &[
    LinkEntry {
        label: "Blog",
        url: "https://www.golem.cloud/blog",
    },
    LinkEntry {
        label: "Help Center",
        url: "https://support.golem.cloud",
    },
];

pub static SOCIAL_LINKS: &[SocialEntry] = &[
    SocialEntry {
        label: "Github",
        url: "https://github.com/golemcloud",
        icon: SocialIcon::GitHub,
    },
    SocialEntry {
        label: "Twitter",
        url: "https://twitter.com/golemcloud",
        icon: SocialIcon::Twitter,
    },
    SocialEntry {
        label: "Email",
        url: "mailto:contact@golem.cloud",
        icon: SocialIcon::Email,
    },
    SocialEntry {
        label: "Discord",
        url: "https://discord.gg/UjXeH8uG4x",
        icon: SocialIcon::Discord,
    },
];

/// Navigation columns, left to right.
pub static NAV_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        heading: "Golem",
        entries: GOLEM_LINKS,
    },
    LinkGroup {
        heading: "Support",
        entries: SUPPORT_LINKS,
    },
];

/// Heading used for the social strip in validation errors.
pub const SOCIAL_GROUP: &str = "Social";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{group}: link {label:?} has a relative or unsupported target {url:?}")]
    UnsupportedUrl {
        group: &'static str,
        label: &'static str,
        url: &'static str,
    },
    #[error("{group}: label {label:?} appears more than once")]
    DuplicateLabel {
        group: &'static str,
        label: &'static str,
    },
    #[error("{group}: entry with empty label")]
    EmptyLabel { group: &'static str },
}

/// `https://host...` or `mailto:user@host`.
#[must_use]
pub fn is_supported_target(url: &str) -> bool {
    if let Some(rest) = url.strip_prefix("https://") {
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        return !host.is_empty() && !host.contains(char::is_whitespace);
    }
    if let Some(address) = url.strip_prefix("mailto:") {
        return address
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'));
    }
    false
}

fn check_entries(
    group: &'static str,
    entries: impl IntoIterator<Item = (&'static str, &'static str)>,
) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for (label, url) in entries {
        if label.trim().is_empty() {
            return Err(RegistryError::EmptyLabel { group });
        }
        if !seen.insert(label) {
            return Err(RegistryError::DuplicateLabel { group, label });
        }
        if !is_supported_target(url) {
            return Err(RegistryError::UnsupportedUrl { group, label, url });
        }
    }
    Ok(())
}

/// # Errors
///
/// Returns the first entry with an empty or repeated label or an unsupported URL.
pub fn validate_group(group: &LinkGroup) -> Result<(), RegistryError> {
    check_entries(group.heading, group.entries.iter().map(|e| (e.label, e.url)))
}

/// # Errors
///
/// Same rules as [`validate_group`], applied to the social strip.
pub fn validate_socials(entries: &'static [SocialEntry]) -> Result<(), RegistryError> {
    check_entries(SOCIAL_GROUP, entries.iter().map(|e| (e.label, e.url)))
}

/// # Errors
///
/// Returns the first defect found across the navigation groups and the social strip.
pub fn validate_registry() -> Result<(), RegistryError> {
    for group in NAV_GROUPS {
        validate_group(group)?;
    }
    validate_socials(SOCIAL_LINKS)
}
