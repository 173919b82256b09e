//! Indentation configuration for code generation.

/// Indentation unit for generated code: a character repeated `width` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab characters with the specified width, usually 1.
    Tabs(u8),
}

impl Indent {
    /// 4-space indentation (PHP, PSR style).
    pub const PHP: Self = Self::Spaces(4);

    /// A single tab per level.
    pub const TAB: Self = Self::Tabs(1);

    /// The string for one indent level.
    pub fn unit(&self) -> String {
        match *self {
            Self::Spaces(width) => " ".repeat(width.into()),
            Self::Tabs(width) => "\t".repeat(width.into()),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}
