//! Brandshell Core — validation and normalization engine for the brand shell.
//!
//! This crate is the single source of truth for every business rule the
//! header/footer shell enforces. Render adapters (HTML, or framework
//! bindings built on top of it) consume its outputs and contain no rules of
//! their own.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      brandshell-cli / host apps         │
//! │        (drive the ShellService)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           Application Layer             │
//! │   (ShellService, ValidationMode)        │
//! │   strict = validate, lenient = drop     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Port (Trait)           │
//! │          (ShellRenderer)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   brandshell-render (Infrastructure)    │
//! │          (HtmlRenderer, ...)            │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (links, shell, social, theme,          │
//! │   validation — no I/O, no env reads)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use brandshell_core::domain::{
//!     BrandDetails, build_shell_view_model, validate_brand_details,
//! };
//! use serde_json::json;
//!
//! // Untrusted input goes through the validator first.
//! let result = validate_brand_details(&json!({
//!     "name": "Brand Shell",
//!     "navLinks": [{"label": "Docs", "href": "/docs"}],
//! }));
//! assert!(result.valid);
//!
//! // Trusted, typed input can go straight to the view-model builder.
//! let details = BrandDetails {
//!     name: "Brand Shell".into(),
//!     ..Default::default()
//! };
//! let view = build_shell_view_model(&details);
//! assert!(view.nav_links.is_empty());
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (render port + guarded render workflow)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ShellRenderer, ShellService, ValidationMode};
    pub use crate::domain::{
        BrandAction, BrandDetails, BrandNavLink, BrandTheme, BrandValidationResult, CtaLayout,
        CtaVariant, LinkTarget, NormalizedBrandDetails, ShellActionLink, ShellNavLink,
        ShellViewModel, SocialLink, SocialPlatform, ThemeVariables, ValidationError,
        assert_valid_brand_details, assert_valid_brand_theme, build_shell_view_model,
        details_to_social_links, normalize_brand_details, normalize_brand_theme,
        theme_to_css_variables, validate_brand_details, validate_brand_theme,
    };
    pub use crate::error::{BrandShellError, BrandShellResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
