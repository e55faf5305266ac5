//! Infrastructure adapters for Brandshell.
//!
//! This crate implements the `ShellRenderer` port defined in
//! `brandshell_core::application::ports`. It lays out already-normalized
//! view models as HTML strings; every business rule (href safety, rel
//! hardening, CTA ordering, theme derivation) already ran in the core.

pub mod escape;
pub mod html;

// Re-export commonly used adapters
pub use html::{HtmlRenderer, ShellSection};
