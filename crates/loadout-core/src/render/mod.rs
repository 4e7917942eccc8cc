//! Rendering of a profile as an ES module literal.
//!
//! Output shape: `export default { ... };` plus a trailing newline. Maps keep
//! insertion order, numbers always carry two decimals, keys are bare only
//! when they are identifier-shaped.

pub mod value;

use crate::error::ProfileError;
pub use value::Value;

pub const EXPORT_PREFIX: &str = "export default ";
pub const DEFAULT_INDENT: usize = 2;

/// Render a full document: prefix, literal, terminator.
pub fn render_document(value: &Value, indent: usize) -> Result<String, ProfileError> {
    let mut out = String::from(EXPORT_PREFIX);
    write_value(value, indent, 0, &mut out)?;
    out.push_str(";\n");
    Ok(out)
}

/// Render a single value as it would appear at nesting `level`.
pub fn render_value(value: &Value, indent: usize, level: usize) -> Result<String, ProfileError> {
    let mut out = String::new();
    write_value(value, indent, level, &mut out)?;
    Ok(out)
}

fn write_value(
    value: &Value,
    indent: usize,
    level: usize,
    out: &mut String,
) -> Result<(), ProfileError> {
    match value {
        Value::Map(map) if map.is_empty() => out.push_str("{}"),
        Value::Map(map) => {
            let inner = " ".repeat(indent * (level + 1));
            out.push_str("{\n");
            for (key, child) in map {
                out.push_str(&inner);
                write_key(key, out);
                out.push_str(": ");
                write_value(child, indent, level + 1, out)?;
                out.push_str(",\n");
            }
            out.push_str(&" ".repeat(indent * level));
            out.push('}');
        }
        Value::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) if n.is_finite() => out.push_str(&format!("{n:.2}")),
        Value::Number(n) => {
            return Err(ProfileError::UnsupportedValue(format!(
                "non-finite number {n}"
            )))
        }
        Value::Null => out.push_str("null"),
    }
    Ok(())
}

fn write_key(key: &str, out: &mut String) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        out.push('"');
        out.push_str(key);
        out.push('"');
    }
}

/// Whether a key can be written without quotes.
pub fn is_bare_key(key: &str) -> bool {
    if key.contains(|c: char| matches!(c, '/' | ' ' | '-')) {
        return false;
    }
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
