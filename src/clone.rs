//! Deep clone with an explicit opaque passthrough.

use std::sync::Arc;

use crate::value::{Pattern, Value};

/// Recursively reconstructs a value so the result shares no mutable
/// structure with the input.
///
/// Primitives pass through; dates clone to a new instance with the same
/// instant; patterns keep their source and flags; arrays and objects clone
/// element-wise. Opaque handles are the one deliberate exception: they pass
/// through aliased (`Arc::ptr_eq` holds between clone and original) rather
/// than copied.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Undefined => Value::Undefined,
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => Value::String(s.clone()),
        Value::Date(d) => Value::Date(*d),
        Value::Pattern(p) => Value::Pattern(Pattern::new(p.source.clone(), p.flags.clone())),
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), deep_clone(v)))
                .collect(),
        ),
        Value::Opaque(handle) => Value::Opaque(Arc::clone(handle)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn nested_containers_are_reconstructed_independently() {
        let original = Value::object([
            ("list", Value::array([Value::from(1), Value::from(2)])),
            ("inner", Value::object([("a", Value::from(1))])),
        ]);
        let mut clone = deep_clone(&original);

        if let Value::Object(map) = &mut clone {
            if let Some(Value::Array(items)) = map.get_mut("list") {
                items.push(Value::from(3));
            }
            if let Some(Value::Object(inner)) = map.get_mut("inner") {
                inner.insert("b".to_string(), Value::from(2));
            }
        }

        assert_eq!(
            original,
            Value::object([
                ("list", Value::array([Value::from(1), Value::from(2)])),
                ("inner", Value::object([("a", Value::from(1))])),
            ])
        );
        assert_ne!(original, clone);
    }

    #[test]
    fn date_clone_keeps_the_instant() {
        let date = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(deep_clone(&Value::from(date)), Value::from(date));
    }

    #[test]
    fn pattern_clone_keeps_source_and_flags() {
        let cloned = deep_clone(&Value::from(Pattern::new("a+b", "im")));
        match cloned {
            Value::Pattern(p) => {
                assert_eq!(p.source, "a+b");
                assert_eq!(p.flags, "im");
            }
            other => panic!("expected a pattern, got {other:?}"),
        }
    }

    #[test]
    fn opaque_values_are_aliased_not_copied() {
        let handle: Arc<dyn std::any::Any + Send + Sync> = Arc::new(vec![1_u8, 2, 3]);
        let original = Value::Opaque(Arc::clone(&handle));
        let cloned = deep_clone(&original);
        match cloned {
            Value::Opaque(cloned_handle) => assert!(Arc::ptr_eq(&cloned_handle, &handle)),
            other => panic!("expected an opaque handle, got {other:?}"),
        }
    }

    #[test]
    fn opaque_aliasing_survives_nesting() {
        let original = Value::array([Value::opaque(9_u32)]);
        let cloned = deep_clone(&original);
        // Identity equality: the nested handle is the same allocation.
        assert_eq!(original, cloned);
    }

    #[test]
    fn primitives_pass_through() {
        assert_eq!(deep_clone(&Value::Null), Value::Null);
        assert_eq!(deep_clone(&Value::Undefined), Value::Undefined);
        assert_eq!(deep_clone(&Value::from(true)), Value::from(true));
        assert_eq!(deep_clone(&Value::from(2.5)), Value::from(2.5));
        assert_eq!(deep_clone(&Value::from("s")), Value::from("s"));
    }
}
