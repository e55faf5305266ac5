//! Driven (output) ports — implemented by render adapters.
//!
//! Every framework adapter is an independent implementation of one shared
//! capability: turn a view model plus an optional theme into UI output.
//! Adapters consume only the core's exported pure functions; no shared base
//! type exists beyond this trait.

use crate::domain::{BrandTheme, NormalizedBrandDetails, ShellViewModel};
use crate::error::BrandShellResult;

/// Port for shell rendering.
///
/// Implemented by:
/// - `brandshell_render::HtmlRenderer` (HTML strings)
/// - test doubles (mocked in service tests)
pub trait ShellRenderer: Send + Sync {
    /// Render one shell from an already-normalized details record and its
    /// view model.
    ///
    /// The theme, when present, is already normalized too — implementations
    /// never re-run business rules, they only lay out what they are given.
    fn render(
        &self,
        details: &NormalizedBrandDetails,
        shell: &ShellViewModel,
        theme: Option<&BrandTheme>,
    ) -> BrandShellResult<String>;
}
