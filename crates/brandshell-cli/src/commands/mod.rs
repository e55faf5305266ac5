//! Command handlers.
//!
//! Each submodule owns one subcommand.  The shared brand-file loader lives
//! here because every command starts from the same input shape.

pub mod check;
pub mod preview;
pub mod vars;

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{CliError, CliResult};

/// A parsed brand configuration file.
///
/// The canonical file shape is `{"details": {...}, "theme": {...}}`.  A file
/// whose top level has no `details` key is treated as the details object
/// itself, so bare exports keep working.
#[derive(Debug)]
pub(crate) struct BrandFile {
    pub details: Value,
    pub theme: Value,
}

pub(crate) fn load_brand_file(path: &Path) -> CliResult<BrandFile> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::from_read(path, e))?;
    let value: Value = serde_json::from_str(&raw).map_err(|source| CliError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let (details, theme) = match &value {
        Value::Object(map) if map.contains_key("details") => (
            map["details"].clone(),
            map.get("theme").cloned().unwrap_or(Value::Null),
        ),
        _ => (value, Value::Null),
    };

    Ok(BrandFile { details, theme })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn wrapped_shape_splits_details_and_theme() {
        let file =
            write_temp(r##"{"details": {"name": "B"}, "theme": {"primaryColor": "#fff"}}"##);
        let brand = load_brand_file(file.path()).unwrap();
        assert_eq!(brand.details["name"], "B");
        assert_eq!(brand.theme["primaryColor"], "#fff");
    }

    #[test]
    fn bare_details_shape_gets_a_null_theme() {
        let file = write_temp(r#"{"name": "B"}"#);
        let brand = load_brand_file(file.path()).unwrap();
        assert_eq!(brand.details["name"], "B");
        assert!(brand.theme.is_null());
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = load_brand_file(Path::new("/nonexistent/brand.json")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_json_maps_to_user_error() {
        let file = write_temp("{not json");
        let err = load_brand_file(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
