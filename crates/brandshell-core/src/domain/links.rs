//! Safe-link normalization: href allowlisting and anti-tabnabbing rel policy.
//!
//! Rejected hrefs are *dropped*, never surfaced — an unsafe caller value must
//! not survive into any rendered attribute. The validator reports the same
//! rejections as error messages; this module stays silent.

use crate::domain::types::LinkTarget;

/// Schemes allowed in absolute URIs. Everything else (`javascript:`,
/// `data:`, `vbscript:`, ...) is rejected.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];

/// Tokens force-appended to every `_blank` rel.
const REQUIRED_BLANK_REL_TOKENS: [&str; 2] = ["noopener", "noreferrer"];

/// Validate and normalize an href candidate.
///
/// Returns the trimmed value when safe, `None` otherwise:
/// - empty after trim → `None`
/// - contains control characters (U+0000–U+001F, U+007F) → `None`
/// - protocol-relative (`//…`) → `None`; the scheme would be inherited from
///   the embedding page
/// - absolute URI with a scheme outside the allowlist → `None`
/// - schemeless (relative path) → accepted as-is
pub fn normalize_safe_href(href: &str) -> Option<String> {
    let trimmed = href.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed
        .chars()
        .any(|c| matches!(c, '\u{0000}'..='\u{001f}' | '\u{007f}'))
    {
        return None;
    }
    if trimmed.starts_with("//") {
        return None;
    }

    match absolute_scheme(trimmed) {
        None => Some(trimmed.to_string()),
        Some(scheme) => {
            let scheme = scheme.to_ascii_lowercase();
            if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
                Some(trimmed.to_string())
            } else {
                None
            }
        }
    }
}

/// Boolean wrapper over [`normalize_safe_href`].
pub fn is_safe_href(href: &str) -> bool {
    normalize_safe_href(href).is_some()
}

/// Resolve the final `rel` attribute for a link.
///
/// For non-`_blank` targets the caller's rel is trimmed and passed through
/// (`None` when empty). For `_blank`, the caller's whitespace-separated
/// tokens are kept in order and `noopener` / `noreferrer` are appended
/// unless already present (case-insensitive match), so externally-opening
/// links always resist tab-nabbing.
pub fn normalize_rel(target: LinkTarget, rel: Option<&str>) -> Option<String> {
    let trimmed = rel.map(str::trim).unwrap_or_default();

    if target != LinkTarget::Blank {
        return if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();
    for required in REQUIRED_BLANK_REL_TOKENS {
        if !tokens.iter().any(|t| t.eq_ignore_ascii_case(required)) {
            tokens.push(required);
        }
    }

    Some(tokens.join(" "))
}

/// Extract the scheme of an absolute URI (`scheme:` per RFC 3986), if any.
fn absolute_scheme(value: &str) -> Option<&str> {
    let mut chars = value.char_indices();
    match chars.next() {
        Some((_, first)) if first.is_ascii_alphabetic() => {}
        _ => return None,
    }
    for (index, c) in chars {
        match c {
            ':' => return Some(&value[..index]),
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') => {}
            _ => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_allowlisted_schemes() {
        for href in [
            "https://example.com",
            "http://example.com",
            "mailto:hello@example.com",
            "tel:+15550100",
            "HTTPS://EXAMPLE.COM",
        ] {
            assert_eq!(normalize_safe_href(href).as_deref(), Some(href));
        }
    }

    #[test]
    fn accepts_relative_paths() {
        assert_eq!(normalize_safe_href("/docs").as_deref(), Some("/docs"));
        assert_eq!(normalize_safe_href("docs/intro").as_deref(), Some("docs/intro"));
        assert_eq!(normalize_safe_href("#top").as_deref(), Some("#top"));
        assert_eq!(normalize_safe_href("?q=1").as_deref(), Some("?q=1"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_safe_href("  /docs  ").as_deref(), Some("/docs"));
    }

    #[test]
    fn rejects_dangerous_schemes() {
        for href in [
            "javascript:alert(1)",
            "JavaScript:alert(1)",
            "data:text/html,<h1>xss</h1>",
            "vbscript:msgbox(1)",
            "file:///etc/passwd",
        ] {
            assert_eq!(normalize_safe_href(href), None, "accepted {href}");
        }
    }

    #[test]
    fn rejects_protocol_relative() {
        assert_eq!(normalize_safe_href("//evil.example"), None);
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(normalize_safe_href("/docs\u{0000}"), None);
        assert_eq!(normalize_safe_href("java\u{0009}script:alert(1)"), None);
        assert_eq!(normalize_safe_href("/docs\u{007f}"), None);
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(normalize_safe_href(""), None);
        assert_eq!(normalize_safe_href("   "), None);
    }

    #[test]
    fn colon_in_path_is_not_a_scheme() {
        // First segment stops being a scheme as soon as a non-scheme char
        // appears before the colon.
        assert!(is_safe_href("/a:b"));
        assert!(is_safe_href("docs/a:b"));
    }

    #[test]
    fn rel_passthrough_for_non_blank_targets() {
        assert_eq!(normalize_rel(LinkTarget::SelfFrame, None), None);
        assert_eq!(normalize_rel(LinkTarget::SelfFrame, Some("  ")), None);
        assert_eq!(
            normalize_rel(LinkTarget::Parent, Some(" author ")).as_deref(),
            Some("author")
        );
    }

    #[test]
    fn rel_blank_appends_required_tokens() {
        assert_eq!(
            normalize_rel(LinkTarget::Blank, None).as_deref(),
            Some("noopener noreferrer")
        );
        assert_eq!(
            normalize_rel(LinkTarget::Blank, Some("author noreferrer")).as_deref(),
            Some("author noreferrer noopener")
        );
    }

    #[test]
    fn rel_blank_dedupes_case_insensitively() {
        assert_eq!(
            normalize_rel(LinkTarget::Blank, Some("NoOpener")).as_deref(),
            Some("NoOpener noreferrer")
        );
    }

    #[test]
    fn rel_blank_preserves_caller_token_order() {
        assert_eq!(
            normalize_rel(LinkTarget::Blank, Some("me external")).as_deref(),
            Some("me external noopener noreferrer")
        );
    }
}
