//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Line writer that tracks the current indentation depth.
///
/// Every line written goes through the indentation of the current level,
/// including each line of multi-line text, so nested output stays aligned.
///
/// # Example
///
/// ```
/// use classgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::php();
/// builder
///     .push_line("function main() {")
///     .push_indent()
///     .push_text("$a = 1;\nreturn $a;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "function main() {\n    $a = 1;\n    return $a;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// A builder indenting with 4 spaces.
    pub fn php() -> Self {
        Self::new(Indent::PHP)
    }

    /// Write one line at the current depth.
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent.unit());
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self
    }

    /// Write an empty line, never indented.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Write multi-line text with every line at the current depth.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        for line in text.split('\n') {
            self.push_line(line);
        }
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write a `/** ... */` block.
    ///
    /// Each entry may itself span several lines; every line gets the ` * `
    /// prefix and trailing whitespace is dropped.
    pub fn push_doc_block<S: AsRef<str>>(&mut self, lines: &[S]) -> &mut Self {
        self.push_line("/**");
        for line in lines.iter().flat_map(|entry| entry.as_ref().split('\n')) {
            self.push_line(format!(" * {line}").trim_end());
        }
        self.push_line(" */")
    }

    /// Write every fragment of a node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Text(text) => {
                self.push_text(&text);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_text(&header);
                self.push_indent();
                for fragment in body {
                    self.apply_fragment(fragment);
                }
                self.push_dedent();
                if let Some(close) = close {
                    self.push_line(&close);
                }
            }
            CodeFragment::DocBlock(lines) => {
                self.push_doc_block(&lines);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nodes(Vec<CodeFragment>);

    impl Renderable for Nodes {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            self.0.clone()
        }
    }

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::php();
        builder.push_line("$x = 1;");
        assert_eq!(builder.build(), "$x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::php();
        builder
            .push_line("function main() {")
            .push_indent()
            .push_line("echo 'Hello';")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "function main() {\n    echo 'Hello';\n}\n");
    }

    #[test]
    fn test_dedent_stops_at_zero() {
        let mut builder = CodeBuilder::php();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_blank_is_not_indented() {
        let mut builder = CodeBuilder::php();
        builder.push_indent().push_line("a").push_blank().push_line("b");
        assert_eq!(builder.build(), "    a\n\n    b\n");
    }

    #[test]
    fn test_text_indents_every_line() {
        let mut builder = CodeBuilder::new(Indent::Spaces(2));
        builder.push_indent().push_text("a;\n\nb;");
        assert_eq!(builder.build(), "  a;\n  \n  b;\n");
    }

    #[test]
    fn test_doc_block() {
        let mut builder = CodeBuilder::php();
        builder
            .push_indent()
            .push_doc_block(&["Checks the data\nin two lines", "@return boolean "]);

        assert_eq!(
            builder.build(),
            "    /**\n     * Checks the data\n     * in two lines\n     * @return boolean\n     */\n"
        );
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::TAB);
        builder
            .push_line("{")
            .push_indent()
            .push_line("return 1;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "{\n\treturn 1;\n}\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        let mut builder = CodeBuilder::php();
        builder.emit(&Nodes(vec![CodeFragment::block(
            "function main() {",
            vec![CodeFragment::line("return;")],
            Some("}".to_string()),
        )]));
        assert_eq!(builder.build(), "function main() {\n    return;\n}\n");
    }

    #[test]
    fn test_block_header_lines_are_all_indented() {
        let mut builder = CodeBuilder::php();
        builder.push_indent().emit(&Nodes(vec![CodeFragment::block(
            "function run($tags = array (\n  0 => 'a',\n)) {",
            vec![],
            Some("}".to_string()),
        )]));
        assert_eq!(
            builder.build(),
            "    function run($tags = array (\n      0 => 'a',\n    )) {\n    }\n"
        );
    }

    #[test]
    fn test_emit_doc_fragment() {
        let mut builder = CodeBuilder::php();
        builder.emit(&Nodes(vec![
            CodeFragment::doc_block(vec!["@var string".to_string()]),
            CodeFragment::text("public $name;"),
        ]));
        assert_eq!(builder.build(), "/**\n * @var string\n */\npublic $name;\n");
    }
}
