//! Generator settings of the `[generator]` table.

use classgen_codegen::Indent;
use serde::Deserialize;

/// Character used for one level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Spaces,
    Tabs,
}

/// How generated classes are laid out.
///
/// `width` defaults to 4 for spaces and 1 for tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub style: IndentStyle,
    pub width: Option<u8>,
}

impl GeneratorSettings {
    /// The indentation unit these settings describe.
    pub fn indent(&self) -> Indent {
        match self.style {
            IndentStyle::Spaces => Indent::Spaces(self.width.unwrap_or(4)),
            IndentStyle::Tabs => Indent::Tabs(self.width.unwrap_or(1)),
        }
    }
}

impl From<GeneratorSettings> for Indent {
    fn from(settings: GeneratorSettings) -> Self {
        settings.indent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> GeneratorSettings {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse("").indent(), Indent::Spaces(4));
        assert_eq!(parse("style = \"tabs\"").indent(), Indent::Tabs(1));
    }

    #[test]
    fn test_width() {
        assert_eq!(parse("width = 2").indent(), Indent::Spaces(2));
        assert_eq!(
            parse("style = \"tabs\"\nwidth = 2").indent(),
            Indent::Tabs(2)
        );
    }

    #[test]
    fn test_unknown_style() {
        assert!(toml::from_str::<GeneratorSettings>("style = \"dots\"").is_err());
    }
}
