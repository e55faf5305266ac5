//! Core domain layer for the brand shell.
//!
//! Pure business logic over plain data: no I/O, no async, no environment
//! reads, no shared mutable state. Every function is referentially
//! transparent over its arguments and safe to call concurrently. The one
//! impure concern — the dev-mode flag — lives in the application layer,
//! never here.
//!
//! Data flow through this module:
//!
//! ```text
//! raw caller input (serde_json::Value)
//!        │
//!        ▼
//!   validation.rs  ── reject with the full error list, or accept
//!        │
//!        ▼
//!   shell.rs / theme.rs  ── safety-filter + resolve into normalized values
//!        │
//!        ▼
//!   ShellViewModel (nav / cta / social)  ── consumed by render adapters
//! ```

pub mod links;
pub mod shell;
pub mod social;
pub mod theme;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use links::{is_safe_href, normalize_rel, normalize_safe_href};
pub use shell::{
    NormalizedAction, NormalizedBrandDetails, ShellActionLink, ShellNavLink, ShellViewModel,
    build_shell_view_model, normalize_brand_details, normalize_cta_links, normalize_gmail_href,
    normalize_nav_links,
};
pub use social::{SocialLink, details_to_social_links};
pub use theme::{ThemeVariables, normalize_brand_theme, theme_to_css_variables};
pub use types::{
    BrandAction, BrandDetails, BrandNavLink, BrandTheme, CtaLayout, CtaVariant, LinkTarget,
    SocialPlatform,
};
pub use validation::{
    BrandValidationResult, ValidationError, assert_valid_brand_details, assert_valid_brand_theme,
    format_validation_errors, validate_brand_details, validate_brand_theme,
};
