//! Language-agnostic code generation traits.

use classgen_model::{Class, Result, code};

/// Trait for language-specific class generators.
///
/// Implement this trait to add support for rendering classes in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "php")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "php")
    fn file_extension(&self) -> &'static str;

    /// Render the complete source file of a class.
    fn generate_class(&self, class: &Class) -> Result<String>;

    /// Render a class together with the relative path it would be stored at.
    ///
    /// The path follows the namespace, one directory per segment.
    fn preview(&self, class: &Class) -> Result<PreviewFile> {
        let content = self.generate_class(class)?;
        Ok(PreviewFile {
            path: class_path(class.name(), self.file_extension()),
            content,
        })
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path, using `/` separators
    pub path: String,
    /// File content
    pub content: String,
}

/// Relative file path of a qualified class name.
pub fn class_path(name: &str, extension: &str) -> String {
    let segments: Vec<&str> = name
        .split(code::NAMESPACE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect();
    format!("{}.{}", segments.join("/"), extension)
}
