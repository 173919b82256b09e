//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::BuildContext};
use crate::{Error, Result, SourceContext};

/// Filename reported for manifests parsed from a string
const DEFAULT_FILENAME: &str = "class.toml";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, DEFAULT_FILENAME)
    }
}

impl Manifest {
    /// Parse a manifest file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let mut manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    manifest.source = source;
    validate_manifest(&manifest)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest) -> Result<()> {
    let ctx = BuildContext::new(&manifest.source);

    if manifest.generator.width == Some(0) {
        return Err(ctx.validation_error(
            "indentation width must be at least 1",
            ctx.find_key_span("width"),
        ));
    }

    ctx.validate_name(&manifest.class.name, "class", true)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_manifest() {
        let manifest = Manifest::from_str("[class]\nname = \"MyClass\"\n").unwrap();
        assert_eq!(manifest.class.name, "MyClass");
        assert_eq!(manifest.indent(), classgen_codegen::Indent::PHP);
        assert_eq!(manifest.source().filename(), "class.toml");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Manifest::from_str("[class\nname = 1").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_class() {
        let err = Manifest::from_str("[generator]\nwidth = 2\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_zero_width() {
        let err = Manifest::from_str_with_filename(
            "[generator]\nwidth = 0\n\n[class]\nname = \"MyClass\"\n",
            "my.toml",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "indentation width must be at least 1");
    }

    #[test]
    fn test_invalid_class_name() {
        let err = Manifest::from_str("[class]\nname = \"1Class\"\n").unwrap_err();
        assert!(matches!(
            err.model(),
            Some(classgen_model::Error::InvalidIdentifier { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my_class.toml");
        std::fs::write(&path, "[class]\nname = 'vendor\\MyClass'\n").unwrap();

        let manifest = Manifest::from_file(&path).unwrap();
        assert_eq!(manifest.class.name, "vendor\\MyClass");
        assert_eq!(manifest.source().filename(), path.display().to_string());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
