//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "brandshell",
    bin_name = "brandshell",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f6e1} Validate and preview brand shells",
    long_about = "Brandshell validates brand configuration files, resolves \
                  their theme into CSS custom properties, and renders \
                  header/footer previews as HTML.",
    after_help = "EXAMPLES:\n\
        \x20 brandshell check brand.json\n\
        \x20 brandshell vars brand.json --output-format json\n\
        \x20 brandshell preview brand.json --out shell.html",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a brand configuration file.
    #[command(
        visible_alias = "c",
        about = "Validate a brand configuration file",
        after_help = "EXAMPLES:\n\
            \x20 brandshell check brand.json\n\
            \x20 brandshell check brand.json --quiet"
    )]
    Check(CheckArgs),

    /// Print the CSS variables a theme resolves to.
    #[command(
        about = "Print resolved CSS variables",
        after_help = "EXAMPLES:\n\
            \x20 brandshell vars brand.json\n\
            \x20 brandshell vars brand.json --output-format json"
    )]
    Vars(VarsArgs),

    /// Render an HTML preview of the shell.
    #[command(
        visible_alias = "p",
        about = "Render an HTML preview",
        after_help = "EXAMPLES:\n\
            \x20 brandshell preview brand.json\n\
            \x20 brandshell preview brand.json --section header\n\
            \x20 brandshell preview brand.json --out shell.html --year 2026"
    )]
    Preview(PreviewArgs),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `brandshell check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Brand configuration file (JSON with `details` and optional `theme`).
    #[arg(value_name = "FILE", help = "Brand configuration file")]
    pub file: PathBuf,
}

// ── vars ──────────────────────────────────────────────────────────────────────

/// Arguments for `brandshell vars`.
#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Brand configuration file.
    #[arg(value_name = "FILE", help = "Brand configuration file")]
    pub file: PathBuf,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `brandshell preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Brand configuration file.
    #[arg(value_name = "FILE", help = "Brand configuration file")]
    pub file: PathBuf,

    /// Write the HTML to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help = "Output file (default: stdout)"
    )]
    pub out: Option<PathBuf>,

    /// Which shell section(s) to render.
    #[arg(
        short = 's',
        long = "section",
        value_enum,
        default_value = "both",
        help = "Shell section to render"
    )]
    pub section: SectionArg,

    /// Copyright year for the footer.
    #[arg(long = "year", value_name = "YEAR", help = "Footer copyright year")]
    pub year: Option<i32>,

    /// Extra class appended to each section root.
    #[arg(long = "class", value_name = "CLASS", help = "Extra root class")]
    pub class: Option<String>,

    /// Render even when validation fails (unsafe fields are dropped).
    #[arg(long = "force", help = "Skip validation; drop unsafe fields silently")]
    pub force: bool,
}

/// Shell sections the preview command can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SectionArg {
    Header,
    Footer,
    Both,
}

impl std::fmt::Display for SectionArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Footer => write!(f, "footer"),
            Self::Both => write!(f, "both"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
