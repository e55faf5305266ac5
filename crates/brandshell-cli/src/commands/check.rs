//! Implementation of the `brandshell check` command.

use tracing::{debug, instrument};

use brandshell_core::domain::{validate_brand_details, validate_brand_theme};

use crate::{
    cli::{CheckArgs, GlobalArgs},
    commands::load_brand_file,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: CheckArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let brand = load_brand_file(&args.file)?;
    output.header(&format!("Checking {}", args.file.display()))?;

    let details = validate_brand_details(&brand.details);
    let theme = validate_brand_theme(&brand.theme);
    debug!(
        details_valid = details.valid,
        theme_valid = theme.valid,
        "validation finished"
    );

    let mut errors = details.errors;
    errors.extend(theme.errors);

    if !errors.is_empty() {
        for error in &errors {
            output.error(error)?;
        }
        return Err(CliError::InvalidInput {
            message: format!(
                "{} validation error(s) in {}",
                errors.len(),
                args.file.display()
            ),
        });
    }

    output.success(&format!("{} is valid", args.file.display()))?;
    if let Some(normalized) = details.normalized {
        output.print(&format!(
            "  brand: {} ({} nav link(s), {} social link(s))",
            normalized.name,
            normalized.nav_links.len(),
            [
                &normalized.website,
                &normalized.linkedin,
                &normalized.gmail,
                &normalized.github,
                &normalized.twitter,
                &normalized.discord,
            ]
            .iter()
            .filter(|v| v.is_some())
            .count(),
        ))?;
    }
    Ok(())
}
