//! Deriving the ordered social link list from a details record.

use serde::{Deserialize, Serialize};

use crate::domain::types::{BrandDetails, SocialPlatform};

/// One resolved social link, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub href: String,
    pub label: String,
}

impl SocialLink {
    fn new(platform: SocialPlatform, href: impl Into<String>) -> Self {
        Self {
            platform,
            href: href.into(),
            label: platform.label().to_string(),
        }
    }
}

/// Map a details record's contact fields to social links.
///
/// Emission order is fixed: website, linkedin, email, github, twitter,
/// discord. Absent fields are skipped. The gmail value gains a `mailto:`
/// prefix unless it already carries one; href safety is the caller's
/// concern (feed this normalized details, as `build_shell_view_model` does).
pub fn details_to_social_links(details: &BrandDetails) -> Vec<SocialLink> {
    let mut links = Vec::new();

    if let Some(website) = &details.website {
        links.push(SocialLink::new(SocialPlatform::Website, website));
    }
    if let Some(linkedin) = &details.linkedin {
        links.push(SocialLink::new(SocialPlatform::Linkedin, linkedin));
    }
    if let Some(gmail) = &details.gmail {
        let href = if gmail.starts_with("mailto:") {
            gmail.clone()
        } else {
            format!("mailto:{gmail}")
        };
        links.push(SocialLink::new(SocialPlatform::Email, href));
    }
    if let Some(github) = &details.github {
        links.push(SocialLink::new(SocialPlatform::Github, github));
    }
    if let Some(twitter) = &details.twitter {
        links.push(SocialLink::new(SocialPlatform::Twitter, twitter));
    }
    if let Some(discord) = &details.discord {
        links.push(SocialLink::new(SocialPlatform::Discord, discord));
    }

    links
}
