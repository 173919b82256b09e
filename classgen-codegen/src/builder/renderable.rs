//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declaration nodes describe themselves as fragments and never touch a
//! [`CodeBuilder`](super::CodeBuilder) directly.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// Multi-line text; every line is indented at the current level.
    Text(String),
    /// A header, body fragments one level deeper, and an optional closing
    /// line. The header may span several lines.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A `/** ... */` documentation block, one entry per line.
    DocBlock(Vec<String>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn doc_block(lines: Vec<String>) -> Self {
        Self::DocBlock(lines)
    }
}

/// Trait for nodes that can be converted to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(CodeFragment::line("x"), CodeFragment::Line("x".into()));
        assert_eq!(CodeFragment::text("a\nb"), CodeFragment::Text("a\nb".into()));
        assert_eq!(
            CodeFragment::block("{", vec![], Some("}".into())),
            CodeFragment::Block {
                header: "{".into(),
                body: vec![],
                close: Some("}".into()),
            }
        );
    }
}
