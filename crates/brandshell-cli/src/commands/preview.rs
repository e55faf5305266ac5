//! Implementation of the `brandshell preview` command.

use std::fs;

use tracing::{debug, instrument};

use brandshell_core::application::{ShellService, ValidationMode};
use brandshell_core::domain::{BrandDetails, BrandTheme};
use brandshell_render::HtmlRenderer;

use crate::{
    cli::{GlobalArgs, PreviewArgs, SectionArg},
    commands::load_brand_file,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display(), section = %args.section))]
pub fn execute(
    args: PreviewArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let brand = load_brand_file(&args.file)?;

    let details: BrandDetails =
        serde_json::from_value(brand.details).map_err(|e| CliError::InvalidInput {
            message: format!("details payload could not be decoded: {e}"),
        })?;
    let theme: Option<BrandTheme> = if brand.theme.is_null() {
        None
    } else {
        serde_json::from_value(brand.theme).map_err(|e| CliError::InvalidInput {
            message: format!("theme payload could not be decoded: {e}"),
        })?
    };

    // --force drops unsafe fields silently; otherwise the service validates
    // per BRANDSHELL_ENV (strict unless the environment says production).
    let mode = if args.force {
        ValidationMode::Lenient
    } else {
        ValidationMode::from_env()
    };
    debug!(?mode, "render mode resolved");

    let year = args.year.or(config.preview.year);
    let class = args.class.or(config.preview.class);

    let mut sections = Vec::new();
    for renderer in build_renderers(args.section, year, class.as_deref()) {
        let service = ShellService::new(Box::new(renderer));
        sections.push(service.render(&details, theme.as_ref(), mode)?);
    }
    let html = sections.join("\n");

    match args.out {
        Some(path) => {
            fs::write(&path, format!("{html}\n")).map_err(|e| CliError::IoError {
                message: format!("could not write {}", path.display()),
                source: e,
            })?;
            output.success(&format!("wrote {}", path.display()))?;
        }
        None => println!("{html}"),
    }

    Ok(())
}

fn build_renderers(
    section: SectionArg,
    year: Option<i32>,
    class: Option<&str>,
) -> Vec<HtmlRenderer> {
    let mut renderers = match section {
        SectionArg::Header => vec![HtmlRenderer::header()],
        SectionArg::Footer => vec![HtmlRenderer::footer()],
        SectionArg::Both => vec![HtmlRenderer::header(), HtmlRenderer::footer()],
    };
    if let Some(year) = year {
        renderers = renderers.into_iter().map(|r| r.with_year(year)).collect();
    }
    if let Some(class) = class {
        renderers = renderers
            .into_iter()
            .map(|r| r.with_class(class))
            .collect();
    }
    renderers
}
