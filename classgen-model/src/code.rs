//! Identifier, type and visibility predicates shared by the model and the generator.

use std::sync::LazyLock;

use regex::Regex;

/// Separator between the segments of a qualified name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Separator between the alternatives of a union type.
pub const UNION_SEPARATOR: char = '|';

/// Scalar and pseudo types that are documented but never used as a type hint.
pub const UNDEFINABLE_TYPES: &[&str] = &[
    "bool", "boolean", "int", "integer", "double", "float", "string", "datetime", "time", "mixed",
];

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid name pattern"));

static QUALIFIED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_\\][A-Za-z0-9_\\]*$").expect("valid qualified name pattern")
});

/// Check whether `name` is a valid identifier.
///
/// When `allow_qualified` is set, the namespace separator is accepted as well,
/// so `vendor\library\MyClass` passes.
///
/// # Example
///
/// ```
/// use classgen_model::code::is_valid_name;
///
/// assert!(is_valid_name("variable", false));
/// assert!(is_valid_name("vendor\\MyClass", true));
/// assert!(!is_valid_name("vendor\\MyClass", false));
/// assert!(!is_valid_name("1noNumberToStart", false));
/// ```
pub fn is_valid_name(name: &str, allow_qualified: bool) -> bool {
    if allow_qualified {
        QUALIFIED_NAME.is_match(name)
    } else {
        NAME.is_match(name)
    }
}

/// Check whether `ty` is a valid type: one qualified name or a `|` union of them.
pub fn is_valid_type(ty: &str) -> bool {
    !ty.is_empty() && ty.split(UNION_SEPARATOR).all(|part| is_valid_name(part, true))
}

/// Check whether `ty` is a union of several types.
pub fn is_union_type(ty: &str) -> bool {
    ty.contains(UNION_SEPARATOR)
}

/// Check whether `ty` is a scalar or pseudo type which can't be used as a type hint.
///
/// The comparison is case-sensitive.
pub fn is_undefinable_type(ty: &str) -> bool {
    UNDEFINABLE_TYPES.contains(&ty)
}

/// Check whether `value` is one of `public`, `protected` or `private`.
pub fn is_valid_scope(value: &str) -> bool {
    matches!(value, "public" | "protected" | "private")
}

/// Split a qualified name into its namespace and short name.
///
/// The split happens on the last separator. A name without separator, or
/// with a single leading separator, has no namespace.
///
/// # Example
///
/// ```
/// use classgen_model::code::resolve_qualified_name;
///
/// assert_eq!(resolve_qualified_name("MyClass"), (None, "MyClass"));
/// assert_eq!(
///     resolve_qualified_name("ride\\library\\StringHelper"),
///     (Some("ride\\library"), "StringHelper")
/// );
/// assert_eq!(resolve_qualified_name("\\MyClass"), (None, "MyClass"));
/// ```
pub fn resolve_qualified_name(full: &str) -> (Option<&str>, &str) {
    match full.rfind(NAMESPACE_SEPARATOR) {
        None => (None, full),
        Some(0) => (None, &full[1..]),
        Some(pos) => (Some(&full[..pos]), &full[pos + 1..]),
    }
}

/// Short name of a qualified type, e.g. `DataContainer` for `vendor\data\DataContainer`.
pub fn short_name(full: &str) -> &str {
    resolve_qualified_name(full).1
}
