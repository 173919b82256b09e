use miette::Diagnostic;
use thiserror::Error;

/// Result type for model and generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a class model or rendering it.
///
/// Every variant is a programmer error: it is raised at the call that
/// caused it and there is no recovery path.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {kind} '{name}'")]
    #[diagnostic(
        code(classgen::invalid_identifier),
        help(
            "use only letters, digits and underscores, not starting with a digit; \
             type names may also contain '\\' and be joined with '|'"
        )
    )]
    InvalidIdentifier { kind: String, name: String },

    #[error("invalid visibility '{value}'")]
    #[diagnostic(
        code(classgen::invalid_scope),
        help("only public, protected and private are allowed")
    )]
    InvalidScope { value: String },

    #[error("invalid description for {context}")]
    #[diagnostic(
        code(classgen::invalid_description),
        help("a description must be a string or left out")
    )]
    InvalidDescription { context: String },

    #[error("cannot use '{reference}' as '{requested}', it is already imported as '{existing}'")]
    #[diagnostic(
        code(classgen::type_conflict),
        help("use a single alias for each referenced type")
    )]
    TypeConflict {
        reference: String,
        existing: String,
        requested: String,
    },

    #[error("cannot import '{reference}' as '{name}', the name is already used by '{existing}'")]
    #[diagnostic(
        code(classgen::name_collision),
        help("pick an alias that no other imported type or the class itself uses")
    )]
    NameCollision {
        reference: String,
        name: String,
        existing: String,
    },

    #[error("constant '{constant}' has no default value")]
    #[diagnostic(
        code(classgen::missing_default_value),
        help("set a default value on every constant before generating")
    )]
    MissingDefaultValue { constant: String },

    #[error("entry {index} of {collection} is not a {expected}")]
    #[diagnostic(code(classgen::heterogeneous_collection))]
    HeterogeneousCollection {
        collection: String,
        index: usize,
        expected: String,
    },
}

impl Error {
    pub(crate) fn invalid_identifier(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a conflict between two aliases of the same reference.
    pub fn type_conflict(
        reference: impl Into<String>,
        existing: impl Into<String>,
        requested: impl Into<String>,
    ) -> Self {
        Self::TypeConflict {
            reference: reference.into(),
            existing: existing.into(),
            requested: requested.into(),
        }
    }

    /// Create a clash between two references imported under one name.
    pub fn name_collision(
        reference: impl Into<String>,
        name: impl Into<String>,
        existing: impl Into<String>,
    ) -> Self {
        Self::NameCollision {
            reference: reference.into(),
            name: name.into(),
            existing: existing.into(),
        }
    }
}
