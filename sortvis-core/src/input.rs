//! Boundary validation: untrusted JSON in, integers out.

use crate::error::InputError;
use serde_json::{Number, Value};

/// Turn a request's `input` field into the integers a run operates on.
///
/// The value must be a non-empty array of numbers. Fractional values are
/// truncated toward zero, not rounded; values outside the `i64` range
/// saturate. Booleans, strings, nulls and nested containers are not numbers.
pub fn coerce_input(value: &Value) -> Result<Vec<i64>, InputError> {
    let items = value.as_array().ok_or(InputError::NotAList)?;
    if items.is_empty() {
        return Err(InputError::Empty);
    }

    let mut numbers = Vec::with_capacity(items.len());
    let mut first_bad = None;
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::Number(n) => numbers.push(truncate(n)),
            other => {
                if first_bad.is_none() {
                    first_bad = Some((index, other.to_string()));
                }
            }
        }
    }

    match first_bad {
        _ if numbers.is_empty() => Err(InputError::NoNumbers),
        Some((index, found)) => Err(InputError::NotNumeric { index, found }),
        None => Ok(numbers),
    }
}

fn truncate(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    if let Some(u) = n.as_u64() {
        return i64::try_from(u).unwrap_or(i64::MAX);
    }
    // `as` truncates toward zero and saturates at the i64 bounds.
    n.as_f64().map_or(0, |f| f.trunc() as i64)
}
