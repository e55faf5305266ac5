//! Field-by-field validation of untrusted input.
//!
//! The validator walks raw JSON (`serde_json::Value`) and accumulates every
//! error before returning — callers need the complete list to fix a payload
//! in one pass, so nothing fails fast. The message strings are part of the
//! public contract; tests pin them verbatim.
//!
//! Validation and normalization deliberately share no input-walking code:
//! on success the normalized result is produced by re-running the `shell.rs`
//! / `theme.rs` builders over the decoded payload, and the agreement between
//! the two paths is covered by the round-trip tests in
//! `tests/integration_tests.rs`.

use serde_json::Value;
use thiserror::Error;

use crate::domain::shell::{NormalizedBrandDetails, normalize_brand_details, normalize_gmail_href};
use crate::domain::links::is_safe_href;
use crate::domain::theme::normalize_brand_theme;
use crate::domain::types::{BrandDetails, BrandTheme, CtaVariant, LinkTarget};

/// Theme keys holding free-form string values.
const THEME_STRING_KEYS: [&str; 7] = [
    "primaryColor",
    "backgroundColor",
    "textColor",
    "fontFamily",
    "linkColor",
    "socialIconSize",
    "buttonTextColor",
];

/// Outcome of a validation call: all errors, plus the normalized payload
/// when (and only when) the input was accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandValidationResult<T> {
    pub valid: bool,
    pub errors: Vec<String>,
    pub normalized: Option<T>,
}

impl<T> BrandValidationResult<T> {
    fn accepted(normalized: T) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            normalized: Some(normalized),
        }
    }

    fn rejected(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
            normalized: None,
        }
    }
}

/// Aggregated validation failure, carrying the context string callers pass
/// to the assert entry points and the full error list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", format_validation_errors(.context, .errors))]
pub struct ValidationError {
    pub context: String,
    pub errors: Vec<String>,
}

impl ValidationError {
    pub fn new(context: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            context: context.into(),
            errors,
        }
    }
}

/// Render an error list as the canonical multi-line failure message.
pub fn format_validation_errors(context: &str, errors: &[String]) -> String {
    let mut message = format!("{context} validation failed:");
    for error in errors {
        message.push_str("\n- ");
        message.push_str(error);
    }
    message
}

/// Validate a raw details payload, normalizing on acceptance.
pub fn validate_brand_details(details: &Value) -> BrandValidationResult<NormalizedBrandDetails> {
    let Some(record) = details.as_object() else {
        return BrandValidationResult::rejected(vec!["details must be an object.".into()]);
    };

    let mut errors = Vec::new();

    validate_required_string(record.get("name"), "details.name", &mut errors);
    validate_optional_string(record.get("homeHref"), "details.homeHref", &mut errors);
    validate_safe_href(record.get("homeHref"), "details.homeHref", &mut errors);
    validate_optional_string(record.get("website"), "details.website", &mut errors);
    validate_safe_href(record.get("website"), "details.website", &mut errors);
    validate_optional_string(record.get("linkedin"), "details.linkedin", &mut errors);
    validate_safe_href(record.get("linkedin"), "details.linkedin", &mut errors);
    validate_optional_string(record.get("gmail"), "details.gmail", &mut errors);
    validate_gmail(record.get("gmail"), "details.gmail", &mut errors);
    validate_optional_string(record.get("github"), "details.github", &mut errors);
    validate_safe_href(record.get("github"), "details.github", &mut errors);
    validate_optional_string(record.get("twitter"), "details.twitter", &mut errors);
    validate_safe_href(record.get("twitter"), "details.twitter", &mut errors);
    validate_optional_string(record.get("discord"), "details.discord", &mut errors);
    validate_safe_href(record.get("discord"), "details.discord", &mut errors);
    validate_optional_string(record.get("tagline"), "details.tagline", &mut errors);

    match record.get("navLinks") {
        None | Some(Value::Null) => {}
        Some(Value::Array(links)) => {
            for (index, link) in links.iter().enumerate() {
                validate_nav_link(link, &format!("details.navLinks[{index}]"), &mut errors);
            }
        }
        Some(_) => errors.push("details.navLinks must be an array.".into()),
    }

    if let Some(action) = present(record.get("primaryAction")) {
        validate_action(action, "details.primaryAction", &mut errors);
    }
    if let Some(action) = present(record.get("secondaryAction")) {
        validate_action(action, "details.secondaryAction", &mut errors);
    }

    if !errors.is_empty() {
        return BrandValidationResult::rejected(errors);
    }

    match serde_json::from_value::<BrandDetails>(details.clone()) {
        Ok(decoded) => BrandValidationResult::accepted(normalize_brand_details(&decoded)),
        // Unreachable after a clean walk; kept as a reported error rather
        // than a panic.
        Err(_) => BrandValidationResult::rejected(vec![
            "details payload could not be decoded.".into(),
        ]),
    }
}

/// Validate a raw theme payload. Absence (`null`) is always valid.
pub fn validate_brand_theme(theme: &Value) -> BrandValidationResult<Option<BrandTheme>> {
    if theme.is_null() {
        return BrandValidationResult::accepted(None);
    }

    let Some(record) = theme.as_object() else {
        return BrandValidationResult::rejected(vec![
            "theme must be an object when provided.".into(),
        ]);
    };

    let mut errors = Vec::new();
    for (key, value) in record {
        if THEME_STRING_KEYS.contains(&key.as_str()) {
            validate_optional_string(Some(value), &format!("theme.{key}"), &mut errors);
        } else if key == "ctaLayout" {
            let layout_ok = value
                .as_str()
                .is_some_and(|s| s.parse::<crate::domain::types::CtaLayout>().is_ok());
            if !value.is_null() && !layout_ok {
                errors.push("theme.ctaLayout must be one of: inline, stacked.".into());
            }
        } else {
            errors.push(format!("theme.{key} is not a supported theme key."));
        }
    }

    if !errors.is_empty() {
        return BrandValidationResult::rejected(errors);
    }

    match serde_json::from_value::<BrandTheme>(theme.clone()) {
        Ok(decoded) => BrandValidationResult::accepted(normalize_brand_theme(Some(&decoded))),
        Err(_) => BrandValidationResult::rejected(vec!["theme payload could not be decoded.".into()]),
    }
}

/// Validate a details payload, failing with one aggregated error.
pub fn assert_valid_brand_details(details: &Value, context: &str) -> Result<(), ValidationError> {
    let result = validate_brand_details(details);
    if result.valid {
        Ok(())
    } else {
        Err(ValidationError::new(context, result.errors))
    }
}

/// Validate a theme payload, failing with one aggregated error.
pub fn assert_valid_brand_theme(theme: &Value, context: &str) -> Result<(), ValidationError> {
    let result = validate_brand_theme(theme);
    if result.valid {
        Ok(())
    } else {
        Err(ValidationError::new(context, result.errors))
    }
}

// ── Field validators ─────────────────────────────────────────────────────────

fn present(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn validate_nav_link(link: &Value, path: &str, errors: &mut Vec<String>) {
    let Some(record) = link.as_object() else {
        errors.push(format!("{path} must be an object."));
        return;
    };

    validate_required_string(record.get("label"), &format!("{path}.label"), errors);
    validate_required_string(record.get("href"), &format!("{path}.href"), errors);
    validate_safe_href(record.get("href"), &format!("{path}.href"), errors);
    validate_optional_string(record.get("ariaLabel"), &format!("{path}.ariaLabel"), errors);
    validate_optional_string(record.get("rel"), &format!("{path}.rel"), errors);
    validate_target(record.get("target"), &format!("{path}.target"), errors);
}

fn validate_action(action: &Value, path: &str, errors: &mut Vec<String>) {
    let Some(record) = action.as_object() else {
        errors.push(format!("{path} must be an object."));
        return;
    };

    validate_required_string(record.get("label"), &format!("{path}.label"), errors);
    validate_required_string(record.get("href"), &format!("{path}.href"), errors);
    validate_safe_href(record.get("href"), &format!("{path}.href"), errors);
    validate_optional_string(record.get("ariaLabel"), &format!("{path}.ariaLabel"), errors);
    validate_optional_string(record.get("rel"), &format!("{path}.rel"), errors);
    validate_target(record.get("target"), &format!("{path}.target"), errors);

    if let Some(variant) = present(record.get("variant")) {
        let variant_ok = variant
            .as_str()
            .is_some_and(|s| s.parse::<CtaVariant>().is_ok());
        if !variant_ok {
            errors.push(format!(
                "{path}.variant must be one of: primary, secondary, ghost."
            ));
        }
    }
}

fn validate_target(target: Option<&Value>, path: &str, errors: &mut Vec<String>) {
    let Some(target) = present(target) else {
        return;
    };
    let target_ok = target
        .as_str()
        .is_some_and(|s| s.parse::<LinkTarget>().is_ok());
    if !target_ok {
        errors.push(format!(
            "{path} must be one of: _blank, _self, _parent, _top."
        ));
    }
}

fn validate_required_string(value: Option<&Value>, path: &str, errors: &mut Vec<String>) {
    let ok = value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());
    if !ok {
        errors.push(format!("{path} must be a non-empty string."));
    }
}

fn validate_optional_string(value: Option<&Value>, path: &str, errors: &mut Vec<String>) {
    let Some(value) = present(value) else {
        return;
    };
    let ok = value.as_str().is_some_and(|s| !s.trim().is_empty());
    if !ok {
        errors.push(format!("{path} must be a non-empty string when provided."));
    }
}

fn validate_safe_href(value: Option<&Value>, path: &str, errors: &mut Vec<String>) {
    // Wrong types and blanks are the optional-string validator's concern.
    let Some(href) = present(value).and_then(Value::as_str) else {
        return;
    };
    if href.trim().is_empty() {
        return;
    }
    if !is_safe_href(href) {
        errors.push(format!(
            "{path} must use a safe URL/path (http, https, mailto, tel, or relative path)."
        ));
    }
}

fn validate_gmail(value: Option<&Value>, path: &str, errors: &mut Vec<String>) {
    let Some(gmail) = present(value).and_then(Value::as_str) else {
        return;
    };
    if gmail.trim().is_empty() {
        return;
    }
    if normalize_gmail_href(gmail).is_none() {
        errors.push(format!("{path} must be a valid email or mailto URL."));
    }
}
