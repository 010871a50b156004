//! Property-based tests: boundary coercion of untrusted JSON.

use proptest::prelude::*;
use serde_json::{Value, json};
use sortvis_core::{InputError, coerce_input};

proptest! {
    #[test]
    fn integers_pass_through(values in proptest::collection::vec(any::<i64>(), 1..50)) {
        prop_assert_eq!(coerce_input(&json!(values)).unwrap(), values);
    }

    #[test]
    fn fractions_truncate_toward_zero(values in proptest::collection::vec(-1.0e6f64..1.0e6, 1..30)) {
        let coerced = coerce_input(&json!(values)).unwrap();
        prop_assert_eq!(coerced.len(), values.len());
        for (c, f) in coerced.iter().zip(&values) {
            prop_assert_eq!(*c, f.trunc() as i64);
            prop_assert!((*c as f64).abs() <= f.abs());
        }
    }

    #[test]
    fn one_string_among_numbers_is_named(
        values in proptest::collection::vec(any::<i32>(), 1..20),
        at in any::<prop::sample::Index>(),
    ) {
        let index = at.index(values.len() + 1);
        let mut items: Vec<Value> = values.iter().map(|v| json!(v)).collect();
        items.insert(index, json!("x"));
        prop_assert_eq!(
            coerce_input(&Value::Array(items)),
            Err(InputError::NotNumeric { index, found: "\"x\"".into() })
        );
    }

    #[test]
    fn non_arrays_are_rejected(text in ".*", n in any::<i64>()) {
        prop_assert_eq!(coerce_input(&json!(text)), Err(InputError::NotAList));
        prop_assert_eq!(coerce_input(&json!(n)), Err(InputError::NotAList));
        prop_assert_eq!(coerce_input(&json!({"input": [n]})), Err(InputError::NotAList));
    }
}
