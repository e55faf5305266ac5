//! HTML shell renderer.
//!
//! Produces server-renderable markup for the two shell sections, header and
//! footer, from an already-normalized view model. Class names follow a BEM
//! scheme (`brand-shell-header__nav`, `brand-shell-button--primary`) so that
//! a single stylesheet covers every host page. Theme values are emitted as
//! CSS custom properties on the section root.

use brandshell_core::application::ShellRenderer;
use brandshell_core::domain::{
    BrandTheme, CtaLayout, NormalizedBrandDetails, ShellActionLink, ShellViewModel,
    theme_to_css_variables,
};
use brandshell_core::error::BrandShellResult;
use tracing::instrument;

use crate::escape::escape_html;

// ── Configuration ────────────────────────────────────────────────────────────

/// Which shell section to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellSection {
    #[default]
    Header,
    Footer,
}

impl ShellSection {
    /// BEM block name for this section.
    pub const fn block(self) -> &'static str {
        match self {
            ShellSection::Header => "brand-shell-header",
            ShellSection::Footer => "brand-shell-footer",
        }
    }
}

/// Renders one shell section as an HTML string.
///
/// The renderer is layout-only: href safety, rel hardening, CTA ordering,
/// and theme derivation all happened in the core before it is called. Its
/// own responsibility is escaping and structure.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    section: ShellSection,
    extra_class: Option<String>,
    year: Option<i32>,
}

impl HtmlRenderer {
    pub fn header() -> Self {
        Self {
            section: ShellSection::Header,
            ..Default::default()
        }
    }

    pub fn footer() -> Self {
        Self {
            section: ShellSection::Footer,
            ..Default::default()
        }
    }

    /// Append a host-supplied class to the section root.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let trimmed = class.trim();
        self.extra_class = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Set the copyright year printed by the footer. Taking the year from
    /// the caller keeps rendered output deterministic.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

impl ShellRenderer for HtmlRenderer {
    #[instrument(skip_all, fields(section = ?self.section))]
    fn render(
        &self,
        details: &NormalizedBrandDetails,
        shell: &ShellViewModel,
        theme: Option<&BrandTheme>,
    ) -> BrandShellResult<String> {
        let out = match self.section {
            ShellSection::Header => self.render_header(details, shell, theme),
            ShellSection::Footer => self.render_footer(details, shell, theme),
        };
        Ok(out)
    }
}

// ── Section layouts ──────────────────────────────────────────────────────────

impl HtmlRenderer {
    fn render_header(
        &self,
        details: &NormalizedBrandDetails,
        shell: &ShellViewModel,
        theme: Option<&BrandTheme>,
    ) -> String {
        let block = ShellSection::Header.block();
        let mut out = String::with_capacity(1024);

        out.push_str(&self.open_root("header", "banner", theme));
        out.push_str(&format!("<div class=\"{block}__inner\">"));

        let name = escape_html(&details.name);
        match &details.home_href {
            Some(home) => out.push_str(&format!(
                "<a class=\"{block}__name\" href=\"{}\" aria-label=\"{name} home\">{name}</a>",
                escape_html(home)
            )),
            None => out.push_str(&format!("<span class=\"{block}__name\">{name}</span>")),
        }

        out.push_str(&format!("<div class=\"{block}__actions\">"));
        out.push_str(&nav_markup(block, "Primary", shell));
        out.push_str(&cta_markup(block, &shell.cta_links, theme));
        out.push_str(&social_markup(block, shell));
        out.push_str("</div>");

        out.push_str("</div></header>");
        out
    }

    fn render_footer(
        &self,
        details: &NormalizedBrandDetails,
        shell: &ShellViewModel,
        theme: Option<&BrandTheme>,
    ) -> String {
        let block = ShellSection::Footer.block();
        let mut out = String::with_capacity(1024);

        out.push_str(&self.open_root("footer", "contentinfo", theme));
        out.push_str(&format!("<div class=\"{block}__inner\">"));
        out.push_str(&format!("<div class=\"{block}__top\">"));

        let name = escape_html(&details.name);
        out.push_str(&format!("<div class=\"{block}__brand\">"));
        out.push_str(&format!("<p class=\"{block}__name\">{name}</p>"));
        if let Some(tagline) = &details.tagline {
            out.push_str(&format!(
                "<p class=\"{block}__tagline\">{}</p>",
                escape_html(tagline)
            ));
        }
        out.push_str("</div>");

        out.push_str(&nav_markup(block, "Footer", shell));
        out.push_str(&cta_markup(block, &shell.cta_links, theme));
        out.push_str(&social_markup(block, shell));
        out.push_str("</div>");

        let copy = match self.year {
            Some(year) => format!("&copy; {year} {name}"),
            None => format!("&copy; {name}"),
        };
        out.push_str(&format!("<p class=\"{block}__copy\">{copy}</p>"));

        out.push_str("</div></footer>");
        out
    }

    /// Opening tag of the section root, with classes, landmark role, and the
    /// theme's CSS custom properties inlined.
    fn open_root(&self, tag: &str, role: &str, theme: Option<&BrandTheme>) -> String {
        let block = self.section.block();
        let mut classes = block.to_string();
        if let Some(extra) = &self.extra_class {
            classes.push(' ');
            classes.push_str(&escape_html(extra));
        }

        let style = style_attribute(theme);
        format!("<{tag} class=\"{classes}\" role=\"{role}\"{style}>")
    }
}

// ── Shared fragments ─────────────────────────────────────────────────────────

fn style_attribute(theme: Option<&BrandTheme>) -> String {
    let variables = theme_to_css_variables(theme);
    if variables.is_empty() {
        return String::new();
    }
    let declarations: Vec<String> = variables
        .iter()
        .map(|(name, value)| format!("{name}: {}", escape_html(value)))
        .collect();
    format!(" style=\"{}\"", declarations.join("; "))
}

fn nav_markup(block: &str, aria_label: &str, shell: &ShellViewModel) -> String {
    if shell.nav_links.is_empty() {
        return String::new();
    }
    let mut out = format!("<nav class=\"{block}__nav\" aria-label=\"{aria_label}\">");
    out.push_str(&format!("<ul class=\"{block}__list\">"));
    for link in &shell.nav_links {
        out.push_str("<li>");
        out.push_str(&format!(
            "<a class=\"{block}__link\" href=\"{}\" aria-label=\"{}\" target=\"{}\"",
            escape_html(&link.href),
            escape_html(&link.aria_label),
            link.target.as_str(),
        ));
        if let Some(rel) = &link.rel {
            out.push_str(&format!(" rel=\"{}\"", escape_html(rel)));
        }
        out.push_str(&format!(">{}</a>", escape_html(&link.label)));
        out.push_str("</li>");
    }
    out.push_str("</ul></nav>");
    out
}

fn cta_markup(block: &str, cta_links: &[ShellActionLink], theme: Option<&BrandTheme>) -> String {
    if cta_links.is_empty() {
        return String::new();
    }
    let stacked = theme
        .and_then(|t| t.cta_layout)
        .map(|layout| layout == CtaLayout::Stacked)
        .unwrap_or(false);
    let mut classes = format!("{block}__ctas");
    if stacked {
        classes.push_str(&format!(" {block}__ctas--stacked"));
    }

    let mut out = format!("<div class=\"{classes}\">");
    for cta in cta_links {
        out.push_str(&format!(
            "<a class=\"brand-shell-button brand-shell-button--{}\" href=\"{}\" aria-label=\"{}\" target=\"{}\"",
            cta.variant.as_str(),
            escape_html(&cta.href),
            escape_html(&cta.aria_label),
            cta.target.as_str(),
        ));
        if let Some(rel) = &cta.rel {
            out.push_str(&format!(" rel=\"{}\"", escape_html(rel)));
        }
        out.push_str(&format!(">{}</a>", escape_html(&cta.label)));
    }
    out.push_str("</div>");
    out
}

fn social_markup(block: &str, shell: &ShellViewModel) -> String {
    if shell.social_links.is_empty() {
        return String::new();
    }
    let mut out = format!("<div class=\"{block}__social\" aria-label=\"Social links\">");
    for link in &shell.social_links {
        // Social links always open a new tab, hardened.
        out.push_str(&format!(
            "<a class=\"{block}__social-link\" href=\"{}\" aria-label=\"{}\" \
             target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            escape_html(&link.href),
            escape_html(&link.label),
            escape_html(&link.label),
        ));
    }
    out.push_str("</div>");
    out
}
