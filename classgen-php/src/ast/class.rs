//! PHP class declaration header.

use classgen_codegen::{CodeFragment, Renderable};
use classgen_model::ClassKind;

use super::DocComment;

/// The opening line of a class, interface or abstract class, with its
/// documentation.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    kind: ClassKind,
    name: String,
    doc: DocComment,
    extends: Option<String>,
    implements: Vec<String>,
}

impl ClassDecl {
    pub fn new(kind: ClassKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            doc: DocComment::new(),
            extends: None,
            implements: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: DocComment) -> Self {
        self.doc = doc;
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Add an implemented interface; repeated names are listed once.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        let interface = interface.into();
        if !self.implements.contains(&interface) {
            self.implements.push(interface);
        }
        self
    }

    fn keyword(&self) -> &'static str {
        match self.kind {
            ClassKind::Interface => "interface",
            ClassKind::Abstract => "abstract class",
            ClassKind::Concrete => "class",
        }
    }

    /// Format the declaration line, ending with the opening brace.
    pub fn format(&self) -> String {
        let mut header = format!("{} {} ", self.keyword(), self.name);
        if let Some(parent) = &self.extends {
            header.push_str(&format!("extends {} ", parent));
        }
        if !self.implements.is_empty() {
            header.push_str(&format!("implements {} ", self.implements.join(", ")));
        }
        header.push('{');
        header
    }
}

impl Renderable for ClassDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.doc.to_fragments();
        fragments.push(CodeFragment::Line(self.format()));
        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(
            ClassDecl::new(ClassKind::Interface, "MyInterface").format(),
            "interface MyInterface {"
        );
        assert_eq!(
            ClassDecl::new(ClassKind::Abstract, "Base").format(),
            "abstract class Base {"
        );
        assert_eq!(ClassDecl::new(ClassKind::Concrete, "MyClass").format(), "class MyClass {");
    }

    #[test]
    fn test_extends_and_implements() {
        let decl = ClassDecl::new(ClassKind::Abstract, "MyAbstractProvider")
            .extends("AbstractProvider")
            .implements("Provider1")
            .implements("Provider2")
            .implements("Provider1");
        assert_eq!(
            decl.format(),
            "abstract class MyAbstractProvider extends AbstractProvider implements Provider1, Provider2 {"
        );
    }

    #[test]
    fn test_doc_precedes_declaration() {
        let decl = ClassDecl::new(ClassKind::Concrete, "MyClass")
            .doc(DocComment::new().text(Some("My class")));
        let fragments = decl.to_fragments();
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[1], CodeFragment::line("class MyClass {"));
    }
}
