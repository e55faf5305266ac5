//! Theme normalization and the CSS custom-property mapping.
//!
//! Two layers:
//! - [`normalize_brand_theme`] is the data-level pass: trim string values,
//!   drop blanks, collapse an all-empty theme to `None`.
//! - [`theme_to_css_variables`] is the presentation mapping consumed by every
//!   renderer, including the derived accessible button-text color.

use std::collections::BTreeMap;

use crate::domain::types::BrandTheme;

/// CSS variable name/value pairs, ordered deterministically.
pub type ThemeVariables = BTreeMap<String, String>;

/// Hex of the dark text anchor, rgb(15, 23, 42).
const DARK_TEXT_ANCHOR: &str = "#0f172a";
/// Hex of the light text anchor, rgb(248, 250, 252).
const LIGHT_TEXT_ANCHOR: &str = "#f8fafc";

const DARK_ANCHOR_RGB: Rgb = Rgb {
    red: 15,
    green: 23,
    blue: 42,
};
const LIGHT_ANCHOR_RGB: Rgb = Rgb {
    red: 248,
    green: 250,
    blue: 252,
};

/// Whitelist/trim pass over a caller theme.
///
/// String values are trimmed and dropped when blank; `cta_layout` passes
/// through untouched. A theme with nothing left normalizes to `None`, which
/// callers must treat as "no theme override" (distinct from an empty map).
pub fn normalize_brand_theme(theme: Option<&BrandTheme>) -> Option<BrandTheme> {
    let theme = theme?;

    let normalized = BrandTheme {
        primary_color: trim_to_option(theme.primary_color.as_deref()),
        background_color: trim_to_option(theme.background_color.as_deref()),
        text_color: trim_to_option(theme.text_color.as_deref()),
        font_family: trim_to_option(theme.font_family.as_deref()),
        link_color: trim_to_option(theme.link_color.as_deref()),
        social_icon_size: trim_to_option(theme.social_icon_size.as_deref()),
        button_text_color: trim_to_option(theme.button_text_color.as_deref()),
        cta_layout: theme.cta_layout,
    };

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Map a theme to the CSS custom properties renderers set on the shell root.
///
/// The input is normalized first, so blank values never emit a variable.
/// When `button_text_color` is not set but `primary_color` parses as a 3- or
/// 6-digit hex color, `--brand-button-text` is derived: whichever of the
/// fixed dark/light anchors has the higher WCAG contrast ratio against the
/// primary color wins. Non-hex primaries derive nothing.
pub fn theme_to_css_variables(theme: Option<&BrandTheme>) -> ThemeVariables {
    let mut variables = ThemeVariables::new();
    let Some(theme) = normalize_brand_theme(theme) else {
        return variables;
    };

    let mappings = [
        ("--brand-primary", &theme.primary_color),
        ("--brand-bg", &theme.background_color),
        ("--brand-text", &theme.text_color),
        ("--brand-font", &theme.font_family),
        ("--brand-link", &theme.link_color),
        ("--brand-social-size", &theme.social_icon_size),
        ("--brand-button-text", &theme.button_text_color),
    ];
    for (name, value) in mappings {
        if let Some(value) = value {
            variables.insert(name.to_string(), value.clone());
        }
    }

    if theme.button_text_color.is_none() {
        if let Some(derived) = theme
            .primary_color
            .as_deref()
            .and_then(accessible_button_text_color)
        {
            variables.insert("--brand-button-text".to_string(), derived.to_string());
        }
    }

    variables
}

/// Pick the anchor color with the higher contrast against `primary`.
fn accessible_button_text_color(primary: &str) -> Option<&'static str> {
    let rgb = parse_hex_color(primary)?;
    let primary_luminance = rgb.relative_luminance();

    let dark = contrast_ratio(primary_luminance, DARK_ANCHOR_RGB.relative_luminance());
    let light = contrast_ratio(primary_luminance, LIGHT_ANCHOR_RGB.relative_luminance());

    if dark > light {
        Some(DARK_TEXT_ANCHOR)
    } else {
        Some(LIGHT_TEXT_ANCHOR)
    }
}

fn trim_to_option(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ── Color math ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// WCAG 2.x relative luminance with sRGB gamma correction.
    fn relative_luminance(self) -> f64 {
        fn channel(value: u8) -> f64 {
            let c = f64::from(value) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * channel(self.red) + 0.7152 * channel(self.green) + 0.0722 * channel(self.blue)
    }
}

/// WCAG contrast ratio between two relative luminances.
fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parse `#rgb` or `#rrggbb`. Anything else is rejected silently.
fn parse_hex_color(value: &str) -> Option<Rgb> {
    let digits = value.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let mut channels = digits.chars().map(|c| {
                let nibble = c.to_digit(16).unwrap_or(0) as u8;
                nibble << 4 | nibble
            });
            Some(Rgb {
                red: channels.next()?,
                green: channels.next()?,
                blue: channels.next()?,
            })
        }
        6 => Some(Rgb {
            red: u8::from_str_radix(&digits[0..2], 16).ok()?,
            green: u8::from_str_radix(&digits[2..4], 16).ok()?,
            blue: u8::from_str_radix(&digits[4..6], 16).ok()?,
        }),
        _ => None,
    }
}
