//! Brand shell data model: the caller-facing aggregates and value objects.
//!
//! # Design
//!
//! The aggregates (`BrandDetails`, `BrandTheme`) mirror the JSON wire shape
//! consumed by every renderer, so all fields serialize camelCase and optional
//! fields disappear when `None`. They carry NO normalization logic — that
//! lives in `links.rs`, `shell.rs`, `theme.rs`, and `social.rs`. Value enums
//! (`LinkTarget`, `CtaVariant`, `CtaLayout`, `SocialPlatform`) are `Copy`,
//! equality-by-value, and define their wire strings exactly once via
//! `as_str` + the serde renames.
//!
//! # Lifecycle
//!
//! All of these are ephemeral: built fresh from caller data on every call,
//! never mutated in place, never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LinkTarget ───────────────────────────────────────────────────────────────

/// Anchor `target` attribute values accepted by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_blank")]
    Blank,
    #[default]
    #[serde(rename = "_self")]
    SelfFrame,
    #[serde(rename = "_parent")]
    Parent,
    #[serde(rename = "_top")]
    Top,
}

impl LinkTarget {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "_blank",
            Self::SelfFrame => "_self",
            Self::Parent => "_parent",
            Self::Top => "_top",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "_blank" => Ok(Self::Blank),
            "_self" => Ok(Self::SelfFrame),
            "_parent" => Ok(Self::Parent),
            "_top" => Ok(Self::Top),
            other => Err(format!("unknown link target: {other}")),
        }
    }
}

// ── CtaVariant ───────────────────────────────────────────────────────────────

/// Style variant for call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Primary,
    Secondary,
    Ghost,
}

impl CtaVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
        }
    }
}

impl fmt::Display for CtaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtaVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "ghost" => Ok(Self::Ghost),
            other => Err(format!("unknown cta variant: {other}")),
        }
    }
}

// ── CtaLayout ────────────────────────────────────────────────────────────────

/// Mobile CTA arrangement: side-by-side (`inline`) or one-per-row (`stacked`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaLayout {
    Inline,
    Stacked,
}

impl CtaLayout {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Stacked => "stacked",
        }
    }
}

impl fmt::Display for CtaLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CtaLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(Self::Inline),
            "stacked" => Ok(Self::Stacked),
            other => Err(format!("unknown cta layout: {other}")),
        }
    }
}

// ── SocialPlatform ───────────────────────────────────────────────────────────

/// The social platforms a `BrandDetails` record can point at.
///
/// Variant order here is also the emission order of
/// [`crate::domain::social::details_to_social_links`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Website,
    Linkedin,
    Email,
    Github,
    Twitter,
    Discord,
}

impl SocialPlatform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Linkedin => "linkedin",
            Self::Email => "email",
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Discord => "discord",
        }
    }

    /// The fixed human-readable label renderers show for this platform.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Website => "Website",
            Self::Linkedin => "LinkedIn",
            Self::Email => "Email",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Discord => "Discord",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Aggregates ───────────────────────────────────────────────────────────────

/// One navigation entry in the header/footer text nav.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandNavLink {
    /// Visible label (e.g. Blog, Docs, About).
    pub label: String,
    /// Destination URL or path.
    pub href: String,
    /// Optional custom aria-label for accessibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Optional target attribute (defaults to `_self`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    /// Optional rel attribute (e.g. noopener).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

/// A call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandAction {
    /// Visible label on the CTA button.
    pub label: String,
    /// URL the CTA points to.
    pub href: String,
    /// Optional aria-label override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Optional target attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    /// Optional rel attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    /// Style variant hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<CtaVariant>,
}

/// Header/footer content. Callers pass this per render; nothing is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDetails {
    /// Display name (shown in header and footer).
    pub name: String,
    /// Optional home URL (the header name links here when set).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_href: Option<String>,
    /// Primary nav links shown in the header/footer text nav.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_links: Option<Vec<BrandNavLink>>,
    /// Optional highlighted CTA button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<BrandAction>,
    /// Optional secondary CTA button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<BrandAction>,
    /// Personal or site website URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// LinkedIn profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    /// Email address (`mailto:` or plain).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmail: Option<String>,
    /// GitHub profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Twitter/X profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Discord community or profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    /// Optional tagline (shown in the footer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// Optional theme override, applied as CSS custom properties on the shell root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTheme {
    /// Accent/link hover and active state color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Header/footer background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Main text color (name, nav labels).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Font stack for header/footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Link default color (derived from `primary_color` when omitted).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    /// Size for social icon buttons (e.g. `2rem`, `32px`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_icon_size: Option<String>,
    /// Optional override for primary CTA text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    /// Mobile CTA arrangement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_layout: Option<CtaLayout>,
}

impl BrandTheme {
    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.background_color.is_none()
            && self.text_color.is_none()
            && self.font_family.is_none()
            && self.link_color.is_none()
            && self.social_icon_size.is_none()
            && self.button_text_color.is_none()
            && self.cta_layout.is_none()
    }
}
