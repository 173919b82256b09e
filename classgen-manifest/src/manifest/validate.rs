//! Build context and span lookup for manifest errors.

use classgen_model::{Error as ModelError, Literal, code};
use miette::SourceSpan;
use serde::de::DeserializeOwned;

use crate::{Error, Result, SourceContext};

/// Context carried while turning a manifest into a class model.
///
/// Tracks the path through the manifest (e.g. `checkData.arguments`) so
/// errors say where the offending entry sits.
#[derive(Debug, Clone)]
pub(crate) struct BuildContext<'a> {
    source: &'a SourceContext,
    path: Vec<String>,
}

impl<'a> BuildContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: self.source,
            path,
        }
    }

    /// Describe `kind` at the current path, e.g. "argument of 'checkData'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} of '{}'", kind, self.path.join("."))
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    pub fn validation_error(&self, message: impl Into<String>, span: Option<SourceSpan>) -> Box<Error> {
        self.source.validation_error(message, span)
    }

    /// Wrap a model error, pointing at `name` in the source.
    pub fn model_error(&self, error: ModelError, name: &str) -> Box<Error> {
        self.source.model_error(error, self.find_span(name))
    }

    /// Check a name before the model sees it, for a precise diagnostic.
    pub fn validate_name(&self, name: &str, kind: &str, allow_qualified: bool) -> Result<()> {
        if code::is_valid_name(name, allow_qualified) {
            Ok(())
        } else {
            Err(self.model_error(
                ModelError::InvalidIdentifier {
                    kind: self.context_for(kind),
                    name: name.to_string(),
                },
                name,
            ))
        }
    }

    /// Read a description, which must be a string when present.
    pub fn description(&self, value: Option<&toml::Value>, kind: &str) -> Result<Option<String>> {
        match value {
            None => Ok(None),
            Some(toml::Value::String(text)) => Ok(Some(text.clone())),
            Some(_) => Err(self.source.model_error(
                ModelError::InvalidDescription {
                    context: self.context_for(kind),
                },
                self.find_key_span("description"),
            )),
        }
    }

    /// Decode one entry of a member list, which must be a table.
    pub fn entry<T: DeserializeOwned>(
        &self,
        value: &toml::Value,
        collection: &str,
        index: usize,
        expected: &str,
    ) -> Result<T> {
        if !value.is_table() {
            return Err(self.source.model_error(
                ModelError::HeterogeneousCollection {
                    collection: self.context_for(collection),
                    index,
                    expected: expected.to_string(),
                },
                self.find_key_span(collection),
            ));
        }

        value.clone().try_into().map_err(|e: toml::de::Error| {
            self.validation_error(
                format!("{} {}: {}", self.context_for(expected), index, e.message()),
                self.find_key_span(collection),
            )
        })
    }
}

/// Convert a TOML value to a default value literal.
///
/// Tables become keyed arrays and datetimes become strings.
pub(crate) fn literal(value: &toml::Value) -> Literal {
    match value {
        toml::Value::String(s) => Literal::String(s.clone()),
        toml::Value::Integer(i) => Literal::Int(*i),
        toml::Value::Float(f) => Literal::Float(*f),
        toml::Value::Boolean(b) => Literal::Bool(*b),
        toml::Value::Datetime(dt) => Literal::String(dt.to_string()),
        toml::Value::Array(items) => Literal::list(items.iter().map(literal)),
        toml::Value::Table(table) => {
            Literal::map(table.iter().map(|(key, value)| (key.as_str(), literal(value))))
        }
    }
}

/// Find the span of a name in the TOML source.
/// Searches for `name = "value"` first, then any occurrence.
fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("name = {quote}{name}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // skip `name = ` and the opening quote
            return Some(SourceSpan::from((pos + 8, name.len())));
        }
    }

    // Names with escapes do not appear verbatim; no span is better than a wrong one
    src.find(name)
        .filter(|_| !name.is_empty())
        .map(|pos| SourceSpan::from((pos, name.len())))
}

/// Find the span of a key at the start of a line, or of a table header
/// ending with it.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if trimmed.starts_with(key) && trimmed[key.len()..].trim_start().starts_with('=') {
            return Some(SourceSpan::from((offset + indent, key.len())));
        }
        if let Some(pos) = trimmed.find(&format!(".{key}]")) {
            return Some(SourceSpan::from((offset + indent + pos + 1, key.len())));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_name_span() {
        let src = "[class]\nname = \"MyClass\"\n";
        let span = find_name_span(src, "MyClass").unwrap();
        assert_eq!(span.offset(), 16);
        assert_eq!(span.len(), 7);
        assert!(find_name_span(src, "Other").is_none());
    }

    #[test]
    fn test_find_key_span() {
        let src = "[class]\nname = \"A\"\n  description = 1\n\n[[class.methods]]\n";
        assert_eq!(find_key_span(src, "description").unwrap().offset(), 21);
        assert_eq!(find_key_span(src, "methods").unwrap().offset(), 46);
        assert!(find_key_span(src, "width").is_none());
    }

    #[test]
    fn test_literal() {
        let value: toml::Value = toml::from_str::<toml::Table>("v = [1, 'a', { k = true }]")
            .unwrap()
            .remove("v")
            .unwrap();
        assert_eq!(
            literal(&value),
            Literal::list([
                Literal::Int(1),
                Literal::from("a"),
                Literal::map([("k", true)]),
            ])
        );
    }

    #[test]
    fn test_context_for() {
        let source = SourceContext::new("", "class.toml");
        let ctx = BuildContext::new(&source);
        assert_eq!(ctx.context_for("class"), "class");
        assert_eq!(
            ctx.push("checkData").push("arguments").context_for("argument"),
            "argument of 'checkData.arguments'"
        );
    }
}
