//! End-to-end behavior of the validation → normalization → view-model
//! pipeline, exercised through the public API only.

use brandshell_core::prelude::*;
use serde_json::json;

fn sample_payload() -> serde_json::Value {
    json!({
        "name": "Brand Shell",
        "homeHref": "/",
        "tagline": "Ship the shell once.",
        "navLinks": [
            {"label": "Docs", "href": "/docs"},
            {"label": "GitHub", "href": "https://github.com/org/repo", "target": "_blank"},
        ],
        "primaryAction": {"label": "Hire Me", "href": "mailto:hello@example.com"},
        "secondaryAction": {"label": "Read Case Studies", "href": "/work"},
        "website": "https://b.dev",
        "linkedin": "https://linkedin.com/in/b",
        "gmail": "hello@example.com",
        "github": "https://github.com/b",
        "twitter": "https://x.com/b",
        "discord": "https://discord.gg/b",
    })
}

#[test]
fn accepted_payload_flows_through_to_a_complete_view_model() {
    let result = validate_brand_details(&sample_payload());
    assert!(result.valid, "errors: {:?}", result.errors);

    let normalized = result.normalized.unwrap();
    let details: BrandDetails = normalized.into();
    let view = build_shell_view_model(&details);

    assert_eq!(view.nav_links.len(), 2);
    assert_eq!(view.nav_links[1].rel.as_deref(), Some("noopener noreferrer"));

    // Secondary renders first, primary resolves to the primary variant.
    let labels: Vec<&str> = view.cta_links.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Read Case Studies", "Hire Me"]);
    assert_eq!(view.cta_links[1].variant, CtaVariant::Primary);

    let platforms: Vec<SocialPlatform> = view.social_links.iter().map(|l| l.platform).collect();
    assert_eq!(
        platforms,
        vec![
            SocialPlatform::Website,
            SocialPlatform::Linkedin,
            SocialPlatform::Email,
            SocialPlatform::Github,
            SocialPlatform::Twitter,
            SocialPlatform::Discord,
        ]
    );
}

#[test]
fn normalization_is_idempotent_over_accepted_payloads() {
    let result = validate_brand_details(&sample_payload());
    let once = result.normalized.unwrap();
    let twice = normalize_brand_details(&BrandDetails::from(once.clone()));
    assert_eq!(once, twice);
}

#[test]
fn validation_accepts_iff_normalization_is_lossless() {
    // Accepted payload: no href field may be dropped by normalization.
    let accepted = validate_brand_details(&sample_payload());
    assert!(accepted.valid);
    let normalized = accepted.normalized.unwrap();
    assert!(normalized.home_href.is_some());
    assert!(normalized.website.is_some());
    assert_eq!(normalized.nav_links.len(), 2);

    // Rejected payload: the silent path would lose the same fields the
    // validator reports.
    let payload = json!({
        "name": "Brand Shell",
        "website": "javascript:alert(1)",
        "navLinks": [{"label": "Evil", "href": "data:text/plain,x"}],
    });
    let rejected = validate_brand_details(&payload);
    assert!(!rejected.valid);

    let typed: BrandDetails = serde_json::from_value(payload).unwrap();
    let silently = normalize_brand_details(&typed);
    assert_eq!(silently.website, None);
    assert!(silently.nav_links.is_empty());
}

#[test]
fn safety_invariant_holds_for_known_attack_shapes() {
    for href in [
        "javascript:alert(1)",
        "JAVASCRIPT:alert(1)",
        "data:text/html,<script>1</script>",
        "vbscript:msgbox(1)",
        "//evil.example/path",
        "/ok\u{0000}",
        "\u{0001}https://x.dev",
    ] {
        assert!(
            brandshell_core::domain::normalize_safe_href(href).is_none(),
            "accepted {href:?}"
        );
    }
}

#[test]
fn blank_targets_always_carry_the_hardening_tokens() {
    for rel in [None, Some(""), Some("author"), Some("NOOPENER me")] {
        let resolved = brandshell_core::domain::normalize_rel(LinkTarget::Blank, rel).unwrap();
        let tokens: Vec<String> = resolved
            .split_whitespace()
            .map(|t| t.to_ascii_lowercase())
            .collect();
        assert!(tokens.contains(&"noopener".to_string()), "rel: {rel:?}");
        assert!(tokens.contains(&"noreferrer".to_string()), "rel: {rel:?}");
    }
}

#[test]
fn theme_pipeline_from_raw_json_to_css_variables() {
    let result = validate_brand_theme(&json!({
        "primaryColor": "#0ea5e9",
        "ctaLayout": "stacked",
    }));
    assert!(result.valid);

    let theme = result.normalized.unwrap();
    let variables = theme_to_css_variables(theme.as_ref());
    assert_eq!(variables["--brand-primary"], "#0ea5e9");
    assert_eq!(variables["--brand-button-text"], "#0f172a");
    assert_eq!(theme.unwrap().cta_layout, Some(CtaLayout::Stacked));
}

#[test]
fn exact_error_strings_are_stable() {
    let result = validate_brand_details(&json!({
        "name": "",
        "navLinks": [{"label": "Docs"}],
        "primaryAction": {"label": "Contact", "href": "/contact", "target": "_new"},
    }));

    assert_eq!(
        result.errors,
        vec![
            "details.name must be a non-empty string.".to_string(),
            "details.navLinks[0].href must be a non-empty string.".to_string(),
            "details.primaryAction.target must be one of: _blank, _self, _parent, _top.".to_string(),
        ]
    );
}

#[test]
fn assert_error_message_aggregates_everything() {
    let err = assert_valid_brand_details(&json!({"name": "", "website": "//x"}), "demo shell")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "demo shell validation failed:\n\
         - details.name must be a non-empty string.\n\
         - details.website must use a safe URL/path (http, https, mailto, tel, or relative path)."
    );
}
