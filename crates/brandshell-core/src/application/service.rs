//! Shell service — the guarded render workflow.
//!
//! This is the path every adapter follows:
//! 1. In strict mode, validate the caller payload and fail with the full
//!    aggregated error list.
//! 2. Normalize (details and theme) — in lenient mode this silently drops
//!    whatever validation would have reported.
//! 3. Build the view model and delegate to the injected renderer.

use tracing::{debug, instrument, warn};

use crate::application::{ShellRenderer, ValidationMode};
use crate::domain::{
    BrandDetails, BrandTheme, ValidationError, build_shell_view_model, normalize_brand_details,
    normalize_brand_theme, validate_brand_details, validate_brand_theme,
};
use crate::error::{BrandShellError, BrandShellResult};

/// Renders brand shells through an injected adapter.
pub struct ShellService {
    renderer: Box<dyn ShellRenderer>,
}

impl ShellService {
    pub fn new(renderer: Box<dyn ShellRenderer>) -> Self {
        Self { renderer }
    }

    /// Validate (per `mode`), normalize, build the view model, render.
    #[instrument(skip_all, fields(brand = %details.name, mode = ?mode))]
    pub fn render(
        &self,
        details: &BrandDetails,
        theme: Option<&BrandTheme>,
        mode: ValidationMode,
    ) -> BrandShellResult<String> {
        if mode.is_strict() {
            self.check(details, theme)?;
        } else {
            debug!("lenient mode: skipping validation, normalizing silently");
        }

        let normalized = normalize_brand_details(details);
        let shell = build_shell_view_model(details);
        if shell.nav_links.is_empty() && shell.cta_links.is_empty() && shell.social_links.is_empty()
        {
            warn!("view model is empty after normalization");
        }

        let normalized_theme = normalize_brand_theme(theme);
        self.renderer
            .render(&normalized, &shell, normalized_theme.as_ref())
    }

    /// Run the full validator over typed input by round-tripping it through
    /// its JSON wire shape — the same acceptance rules as untrusted input.
    fn check(
        &self,
        details: &BrandDetails,
        theme: Option<&BrandTheme>,
    ) -> BrandShellResult<()> {
        let details_value = serde_json::to_value(details).map_err(|e| {
            BrandShellError::Payload {
                message: format!("details could not be encoded: {e}"),
            }
        })?;
        let result = validate_brand_details(&details_value);
        if !result.valid {
            return Err(ValidationError::new("BrandDetails", result.errors).into());
        }

        let theme_value = match theme {
            Some(theme) => serde_json::to_value(theme).map_err(|e| BrandShellError::Payload {
                message: format!("theme could not be encoded: {e}"),
            })?,
            None => serde_json::Value::Null,
        };
        let result = validate_brand_theme(&theme_value);
        if !result.valid {
            return Err(ValidationError::new("BrandTheme", result.errors).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NormalizedBrandDetails, ShellViewModel};
    use crate::error::BrandShellResult;
    use mockall::mock;

    mock! {
        Renderer {}

        impl ShellRenderer for Renderer {
            fn render<'a>(
                &self,
                details: &NormalizedBrandDetails,
                shell: &ShellViewModel,
                theme: Option<&'a BrandTheme>,
            ) -> BrandShellResult<String>;
        }
    }

    fn valid_details() -> BrandDetails {
        BrandDetails {
            name: "Brand Shell".into(),
            gmail: Some("hello@example.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn strict_mode_renders_valid_input() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_, shell, _| Ok(format!("social={}", shell.social_links.len())));

        let service = ShellService::new(Box::new(renderer));
        let html = service
            .render(&valid_details(), None, ValidationMode::Strict)
            .unwrap();
        assert_eq!(html, "social=1");
    }

    #[test]
    fn strict_mode_rejects_invalid_input_before_rendering() {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().times(0);

        let service = ShellService::new(Box::new(renderer));
        let err = service
            .render(
                &BrandDetails::default(), // empty name
                None,
                ValidationMode::Strict,
            )
            .unwrap_err();

        match err {
            BrandShellError::Validation(err) => {
                assert_eq!(err.context, "BrandDetails");
                assert!(
                    err.errors
                        .contains(&"details.name must be a non-empty string.".to_string())
                );
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn lenient_mode_renders_degraded_output() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(|_, shell, _| Ok(format!("nav={}", shell.nav_links.len())));

        let service = ShellService::new(Box::new(renderer));
        let details = BrandDetails {
            name: "Brand Shell".into(),
            website: Some("javascript:alert(1)".into()), // dropped silently
            ..Default::default()
        };
        let html = service
            .render(&details, None, ValidationMode::Lenient)
            .unwrap();
        assert_eq!(html, "nav=0");
    }

    #[test]
    fn strict_mode_checks_the_theme_too() {
        let mut renderer = MockRenderer::new();
        renderer.expect_render().times(0);

        let service = ShellService::new(Box::new(renderer));
        let theme = BrandTheme {
            primary_color: Some("   ".into()), // blank string is a validation error
            ..Default::default()
        };
        let err = service
            .render(&valid_details(), Some(&theme), ValidationMode::Strict)
            .unwrap_err();

        match err {
            BrandShellError::Validation(err) => assert_eq!(err.context, "BrandTheme"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
