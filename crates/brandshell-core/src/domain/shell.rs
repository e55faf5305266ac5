//! The shell view model: nav, CTA, and social links resolved into their
//! final render-ready form.
//!
//! Every builder here consumes already-parsed data and applies the safety
//! filter from `links.rs` itself, so a view model never contains an unsafe
//! href regardless of which entry point produced it. Unsafe links are
//! dropped, not reported — lossy on purpose. The validator is the path that
//! reports them.

use serde::{Deserialize, Serialize};

use crate::domain::links::{normalize_rel, normalize_safe_href};
use crate::domain::social::{SocialLink, details_to_social_links};
use crate::domain::types::{BrandAction, BrandDetails, BrandNavLink, CtaVariant, LinkTarget};

// ── Resolved link types ──────────────────────────────────────────────────────

/// A nav link with aria label, target, and rel fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellNavLink {
    pub label: String,
    pub href: String,
    pub aria_label: String,
    pub target: LinkTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

/// A CTA with aria label, target, rel, and variant fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellActionLink {
    pub label: String,
    pub href: String,
    pub aria_label: String,
    pub target: LinkTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    pub variant: CtaVariant,
}

/// An action after detail-level normalization: attributes resolved, the
/// variant still the caller's hint (resolution happens in
/// [`normalize_cta_links`], where ordering context exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAction {
    pub label: String,
    pub href: String,
    pub aria_label: String,
    pub target: LinkTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<CtaVariant>,
}

/// A details record with every href-bearing field safety-filtered and every
/// link's attributes resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBrandDetails {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_href: Option<String>,
    pub nav_links: Vec<ShellNavLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<NormalizedAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<NormalizedAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gmail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// Everything a renderer needs: one flat view model per shell render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellViewModel {
    pub nav_links: Vec<ShellNavLink>,
    pub cta_links: Vec<ShellActionLink>,
    pub social_links: Vec<SocialLink>,
}

// ── Builders ─────────────────────────────────────────────────────────────────

/// Resolve nav links, dropping any whose href fails the safety filter.
pub fn normalize_nav_links(nav_links: &[BrandNavLink]) -> Vec<ShellNavLink> {
    nav_links
        .iter()
        .filter_map(|link| {
            let href = normalize_safe_href(&link.href)?;
            let target = link.target.unwrap_or_default();
            Some(ShellNavLink {
                label: link.label.clone(),
                href,
                aria_label: link
                    .aria_label
                    .clone()
                    .unwrap_or_else(|| link.label.clone()),
                target,
                rel: normalize_rel(target, link.rel.as_deref()),
            })
        })
        .collect()
}

/// Resolve the CTA list.
///
/// Order is fixed as `[secondary, primary]` — the secondary action always
/// renders first. Explicit variants are kept; otherwise the explicit primary
/// action (or the last remaining action when no explicit primary survives)
/// resolves to `primary` and everything else to `secondary`. Actions with
/// unsafe hrefs are dropped before variant resolution.
pub fn normalize_cta_links(
    primary_action: Option<&BrandAction>,
    secondary_action: Option<&BrandAction>,
) -> Vec<ShellActionLink> {
    let actions: Vec<(&BrandAction, String, bool)> = [
        (secondary_action, false),
        (primary_action, true),
    ]
    .into_iter()
    .filter_map(|(action, is_primary)| {
        let action = action?;
        let href = normalize_safe_href(&action.href)?;
        Some((action, href, is_primary))
    })
    .collect();

    let last = actions.len().saturating_sub(1);
    actions
        .into_iter()
        .enumerate()
        .map(|(index, (action, href, is_primary))| {
            let target = action.target.unwrap_or_default();
            let variant = action.variant.unwrap_or(if is_primary || index == last {
                CtaVariant::Primary
            } else {
                CtaVariant::Secondary
            });
            ShellActionLink {
                label: action.label.clone(),
                href,
                aria_label: action
                    .aria_label
                    .clone()
                    .unwrap_or_else(|| action.label.clone()),
                target,
                rel: normalize_rel(target, action.rel.as_deref()),
                variant,
            }
        })
        .collect()
}

/// Normalize an email field into a safe `mailto:` href.
///
/// Accepts a plain address or a `mailto:`-prefixed value; a bare `mailto:`
/// with nothing after it is rejected. The result always round-trips through
/// the safe-href filter.
pub fn normalize_gmail_href(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let href = match trimmed.strip_prefix("mailto:") {
        Some(address) => {
            if address.trim().is_empty() {
                return None;
            }
            trimmed.to_string()
        }
        None => format!("mailto:{trimmed}"),
    };

    normalize_safe_href(&href)
}

/// Safety-filter every href-bearing field of a details record.
///
/// Unsafe values vanish (`None` / dropped list entries); actions whose href
/// is unsafe are dropped entirely.
pub fn normalize_brand_details(details: &BrandDetails) -> NormalizedBrandDetails {
    NormalizedBrandDetails {
        name: details.name.clone(),
        home_href: details.home_href.as_deref().and_then(normalize_safe_href),
        nav_links: normalize_nav_links(details.nav_links.as_deref().unwrap_or_default()),
        primary_action: details.primary_action.as_ref().and_then(normalize_action),
        secondary_action: details.secondary_action.as_ref().and_then(normalize_action),
        website: details.website.as_deref().and_then(normalize_safe_href),
        linkedin: details.linkedin.as_deref().and_then(normalize_safe_href),
        gmail: details.gmail.as_deref().and_then(normalize_gmail_href),
        github: details.github.as_deref().and_then(normalize_safe_href),
        twitter: details.twitter.as_deref().and_then(normalize_safe_href),
        discord: details.discord.as_deref().and_then(normalize_safe_href),
        tagline: details.tagline.clone(),
    }
}

/// Build the complete view model for one shell render.
///
/// Details are normalized first; nav, CTA, and social lists all derive from
/// the normalized record, never from raw input.
pub fn build_shell_view_model(details: &BrandDetails) -> ShellViewModel {
    let normalized = normalize_brand_details(details);
    let safe: BrandDetails = normalized.clone().into();

    ShellViewModel {
        nav_links: normalized.nav_links,
        cta_links: normalize_cta_links(safe.primary_action.as_ref(), safe.secondary_action.as_ref()),
        social_links: details_to_social_links(&safe),
    }
}

fn normalize_action(action: &BrandAction) -> Option<NormalizedAction> {
    let href = normalize_safe_href(&action.href)?;
    let target = action.target.unwrap_or_default();
    Some(NormalizedAction {
        label: action.label.clone(),
        href,
        aria_label: action
            .aria_label
            .clone()
            .unwrap_or_else(|| action.label.clone()),
        target,
        rel: normalize_rel(target, action.rel.as_deref()),
        variant: action.variant,
    })
}

// ── Back-conversions ─────────────────────────────────────────────────────────
//
// Normalized values convert back into caller-shaped aggregates so a
// normalization pass can be re-run over its own output (idempotence) and so
// downstream builders take one input type.

impl From<ShellNavLink> for BrandNavLink {
    fn from(link: ShellNavLink) -> Self {
        Self {
            label: link.label,
            href: link.href,
            aria_label: Some(link.aria_label),
            target: Some(link.target),
            rel: link.rel,
        }
    }
}

impl From<NormalizedAction> for BrandAction {
    fn from(action: NormalizedAction) -> Self {
        Self {
            label: action.label,
            href: action.href,
            aria_label: Some(action.aria_label),
            target: Some(action.target),
            rel: action.rel,
            variant: action.variant,
        }
    }
}

impl From<NormalizedBrandDetails> for BrandDetails {
    fn from(details: NormalizedBrandDetails) -> Self {
        Self {
            name: details.name,
            home_href: details.home_href,
            nav_links: Some(details.nav_links.into_iter().map(Into::into).collect()),
            primary_action: details.primary_action.map(Into::into),
            secondary_action: details.secondary_action.map(Into::into),
            website: details.website,
            linkedin: details.linkedin,
            gmail: details.gmail,
            github: details.github,
            twitter: details.twitter,
            discord: details.discord,
            tagline: details.tagline,
        }
    }
}
