//! PHP literal encoding of default values.
//!
//! Follows the output of PHP's `var_export`, except for the empty array
//! which [`export_default`] writes as `array()`.

use classgen_model::{ArrayKey, Literal};

/// Encode a default value; an empty array becomes `array()`.
pub fn export_default(value: &Literal) -> String {
    if value.is_empty_array() {
        "array()".to_string()
    } else {
        export_literal(value)
    }
}

/// Encode any literal the way `var_export` does.
///
/// # Example
///
/// ```
/// use classgen_model::Literal;
/// use classgen_php::export::export_literal;
///
/// assert_eq!(export_literal(&Literal::from("it's")), r"'it\'s'");
/// assert_eq!(export_literal(&Literal::list([1, 2])), "array (\n  0 => 1,\n  1 => 2,\n)");
/// ```
pub fn export_literal(value: &Literal) -> String {
    let mut out = String::new();
    write_literal(&mut out, value, 1);
    out
}

fn write_literal(out: &mut String, value: &Literal, level: usize) {
    match value {
        Literal::Null => out.push_str("NULL"),
        Literal::Bool(true) => out.push_str("true"),
        Literal::Bool(false) => out.push_str("false"),
        // the minimum can't be written as a single integer literal
        Literal::Int(i64::MIN) => out.push_str("-9223372036854775807-1"),
        Literal::Int(i) => out.push_str(&i.to_string()),
        Literal::Float(f) => out.push_str(&export_float(*f)),
        Literal::String(s) => out.push_str(&quote(s)),
        Literal::Array(entries) => {
            if level > 1 {
                out.push('\n');
                push_spaces(out, level - 1);
            }
            out.push_str("array (\n");
            for (key, entry) in entries {
                push_spaces(out, level + 1);
                match key {
                    ArrayKey::Index(index) => out.push_str(&index.to_string()),
                    ArrayKey::Name(name) => out.push_str(&quote(name)),
                }
                out.push_str(" => ");
                write_literal(out, entry, level + 2);
                out.push_str(",\n");
            }
            if level > 1 {
                push_spaces(out, level - 1);
            }
            out.push(')');
        }
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}

/// Single-quote a string, escaping backslashes and quotes.
fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\0', "' . \"\\0\" . '");
    format!("'{escaped}'")
}

/// Shortest round-trip form, always recognizable as a float.
fn export_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "INF" } else { "-INF" }.to_string();
    }

    let scientific = format!("{f:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    // position of the decimal point relative to the first digit
    let decpt = exponent + 1;
    if decpt < -3 || decpt > 17 {
        let mantissa = if mantissa.contains('.') {
            mantissa.to_string()
        } else {
            format!("{mantissa}.0")
        };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{}", exponent.abs())
    } else {
        let fixed = f.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    }
}
