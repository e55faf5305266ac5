//! Implementation of the `brandshell vars` command.

use tracing::instrument;

use brandshell_core::domain::{theme_to_css_variables, validate_brand_theme};
use brandshell_core::error::BrandShellError;

use crate::{
    cli::{GlobalArgs, OutputFormat, VarsArgs},
    commands::load_brand_file,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: VarsArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let brand = load_brand_file(&args.file)?;

    let result = validate_brand_theme(&brand.theme);
    if !result.valid {
        for error in &result.errors {
            output.error(error)?;
        }
        return Err(CliError::InvalidInput {
            message: format!(
                "{} theme error(s) in {}",
                result.errors.len(),
                args.file.display()
            ),
        });
    }

    let theme = result.normalized.flatten();
    let variables = theme_to_css_variables(theme.as_ref());

    if variables.is_empty() {
        output.warning("theme resolves to no CSS variables")?;
        return Ok(());
    }

    // Variable listings go straight to stdout so they stay parseable in
    // pipes, mirroring how JSON output bypasses the OutputManager.
    match output.format() {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&variables).map_err(|e| {
                CliError::Core(BrandShellError::Payload {
                    message: format!("variables could not be encoded: {e}"),
                })
            })?;
            println!("{json}");
        }
        _ => {
            for (name, value) in &variables {
                println!("{name}: {value}");
            }
        }
    }

    Ok(())
}
