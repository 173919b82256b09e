//! PHP documentation comment builder.

use classgen_codegen::{CodeFragment, Renderable};
use classgen_model::code::{NAMESPACE_SEPARATOR, UNION_SEPARATOR};

/// Type as written in documentation: every namespaced alternative is rooted
/// with a leading separator.
///
/// # Example
///
/// ```
/// use classgen_php::ast::doc_type;
///
/// assert_eq!(doc_type("vendor\\Data"), "\\vendor\\Data");
/// assert_eq!(doc_type("string|vendor\\Data"), "string|\\vendor\\Data");
/// assert_eq!(doc_type("\\Data"), "\\Data");
/// ```
pub fn doc_type(ty: &str) -> String {
    ty.split(UNION_SEPARATOR)
        .map(|part| {
            if part.contains(NAMESPACE_SEPARATOR) && !part.starts_with(NAMESPACE_SEPARATOR) {
                format!("{NAMESPACE_SEPARATOR}{part}")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(&UNION_SEPARATOR.to_string())
}

/// Builder for `/** ... */` comments.
#[derive(Debug, Clone, Default)]
pub struct DocComment {
    lines: Vec<String>,
}

impl DocComment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add free text as written; empty text is ignored.
    pub fn text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.lines.push(text.to_string());
        }
        self
    }

    /// Add a tag line such as `@var string`.
    pub fn tag(mut self, tag: &str, value: impl AsRef<str>) -> Self {
        self.lines.push(format!("@{} {}", tag, value.as_ref()));
        self
    }
}

impl Renderable for DocComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.lines.is_empty() {
            Vec::new()
        } else {
            vec![CodeFragment::DocBlock(self.lines.clone())]
        }
    }
}
