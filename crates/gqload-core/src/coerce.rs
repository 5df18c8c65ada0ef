//! Raw record value coercion against classified argument types.
//!
//! Decides, per (value, type) pair, the literal text that goes into the
//! document: quoted strings for string-like scalars, JSON array text for
//! lists (with delimiter splitting of plain text), verbatim pass-through
//! for everything else. Numeric and enum text is not validated — a
//! malformed value surfaces as a remote validation error, not a local one.

use crate::schema::TypeDescriptor;
use serde_json::Value;

/// Scalars whose values are emitted as quoted string literals.
const STRING_QUOTED_SCALARS: &[&str] = &["String", "ID"];

/// Outcome of coercing one raw value against one argument type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coerced {
    /// Literal text ready to follow `name:` in the document.
    Literal(String),
    /// Literal text for a list-typed argument whose value never became a
    /// sequence; emitted as-is but surfaced as a parse warning upstream.
    ScalarForList(String),
    /// Value absent and argument optional: leave the argument out entirely.
    Omit,
    /// Value absent and argument non-null: the record cannot be satisfied.
    RequiredViolation,
}

pub fn coerce(raw: Option<&Value>, ty: &TypeDescriptor, delimiter: &str) -> Coerced {
    let value = match raw {
        None | Some(Value::Null) => {
            return if ty.is_required {
                Coerced::RequiredViolation
            } else {
                Coerced::Omit
            };
        }
        Some(v) => v,
    };

    if ty.is_list {
        return coerce_list(value, delimiter);
    }

    if STRING_QUOTED_SCALARS.contains(&ty.named_type.as_str()) {
        // JSON string encoding doubles as the GraphQL string literal
        // encoding, embedded-quote escaping included.
        Coerced::Literal(Value::String(plain_text(value)).to_string())
    } else {
        Coerced::Literal(plain_text(value))
    }
}

/// Textual form of a scalar value: strings unwrapped, others via JSON text.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_list(value: &Value, delimiter: &str) -> Coerced {
    if value.is_array() {
        return Coerced::Literal(value.to_string());
    }

    if let Value::String(s) = value {
        let trimmed = s.trim();
        if trimmed.starts_with('[') {
            // Bracketed text is a structured literal; keep it as-is if it
            // does not actually parse.
            return match serde_json::from_str::<Value>(trimmed) {
                Ok(parsed) if parsed.is_array() => Coerced::Literal(parsed.to_string()),
                _ => Coerced::ScalarForList(Value::String(trimmed.to_string()).to_string()),
            };
        }
        if trimmed.contains(delimiter) {
            let items: Vec<Value> = trimmed
                .split(delimiter)
                .map(|part| Value::String(part.trim().to_string()))
                .collect();
            return Coerced::Literal(Value::Array(items).to_string());
        }
        return Coerced::ScalarForList(Value::String(trimmed.to_string()).to_string());
    }

    // Non-array, non-string value for a list argument.
    Coerced::ScalarForList(value.to_string())
}
