//! Literal parsing of environment variable values.
//!
//! Responsibilities:
//! - Parse raw text into a structured `serde_yaml::Value`.
//! - Coerce structured values to booleans (truthiness) for control flags.
//!
//! Does NOT handle:
//! - Reading the environment (see `manager`).
//! - Recording parse failures (the manager tracks them per variable).
//!
//! Invariants:
//! - Empty or whitespace-only text parses to `Value::Null`.
//! - A value that is exactly one YAML 1.1 boolean word (`yes`, `off`, ...)
//!   parses to `Value::Bool`; nested occurrences stay strings.
//! - Custom tags such as `!secret value` are rejected like malformed YAML.
//! - Truthiness never fails: null, `false`, zero and empty collections are falsy.

use serde_yaml::Value;

use crate::constants::{YAML11_FALSE_WORDS, YAML11_TRUE_WORDS};

/// Parse a raw environment value as a YAML literal.
pub fn parse(text: &str) -> Result<Value, serde_yaml::Error> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Ok(Value::Null);
    }
    if YAML11_TRUE_WORDS.contains(&trimmed) {
        return Ok(Value::Bool(true));
    }
    if YAML11_FALSE_WORDS.contains(&trimmed) {
        return Ok(Value::Bool(false));
    }

    let value: Value = serde_yaml::from_str(text)?;
    reject_custom_tags(&value)?;
    Ok(value)
}

/// Application tags (`!name`) are a syntax error, at any depth.
fn reject_custom_tags(value: &Value) -> Result<(), serde_yaml::Error> {
    match value {
        Value::Tagged(tagged) => Err(<serde_yaml::Error as serde::de::Error>::custom(
            format!("unsupported YAML tag {}", tagged.tag),
        )),
        Value::Sequence(seq) => seq.iter().try_for_each(reject_custom_tags),
        Value::Mapping(map) => map.iter().try_for_each(|(key, value)| {
            reject_custom_tags(key)?;
            reject_custom_tags(value)
        }),
        _ => Ok(()),
    }
}

/// Coerce a value to a boolean the way a scripting language would.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_none_or(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Parse `text` and coerce it to a boolean, or `None` if it is not valid YAML.
pub fn parse_flag(text: &str) -> Option<bool> {
    parse(text).ok().map(|value| is_truthy(&value))
}
