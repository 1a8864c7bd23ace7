//! Validated object predicates and pick/omit/merge.

use std::collections::BTreeMap;

use crate::error::{InvalidArgument, Result};
use crate::value::Value;

fn expect_object<'a>(
    function: &'static str,
    value: &'a Value,
) -> Result<&'a BTreeMap<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| InvalidArgument::new(function, "an object", value))
}

pub fn is_empty_object(value: &Value) -> Result<bool> {
    Ok(expect_object("is_empty_object", value)?.is_empty())
}

/// New object containing only the listed keys that exist on the input.
pub fn pick(value: &Value, keys: &[&str]) -> Result<Value> {
    let map = expect_object("pick", value)?;
    let mut out = BTreeMap::new();
    for key in keys {
        if let Some(v) = map.get(*key) {
            out.insert((*key).to_string(), v.clone());
        }
    }
    Ok(Value::Object(out))
}

/// New object containing all keys of the input except the listed ones.
pub fn omit(value: &Value, keys: &[&str]) -> Result<Value> {
    let map = expect_object("omit", value)?;
    let out = map
        .iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(Value::Object(out))
}

/// Left-to-right shallow merge; later sources overwrite earlier keys. Every
/// source is validated up front; zero sources yields an empty object.
pub fn merge(sources: &[Value]) -> Result<Value> {
    let maps: Vec<&BTreeMap<String, Value>> = sources
        .iter()
        .map(|source| expect_object("merge", source))
        .collect::<Result<_>>()?;
    let mut out = BTreeMap::new();
    for map in maps {
        for (k, v) in map {
            out.insert(k.clone(), v.clone());
        }
    }
    Ok(Value::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_entries() -> std::iter::Empty<(&'static str, Value)> {
        std::iter::empty()
    }

    #[test]
    fn empty_object_check() {
        assert!(is_empty_object(&Value::object(empty_entries())).unwrap());
        assert!(!is_empty_object(&Value::object([("a", 1)])).unwrap());
        assert_eq!(
            is_empty_object(&Value::array([1])).unwrap_err().function,
            "is_empty_object"
        );
    }

    #[test]
    fn pick_keeps_only_existing_listed_keys() {
        let obj = Value::object([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(
            pick(&obj, &["a", "c", "missing"]).unwrap(),
            Value::object([("a", 1), ("c", 3)])
        );
    }

    #[test]
    fn omit_drops_listed_keys() {
        let obj = Value::object([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(
            omit(&obj, &["b", "missing"]).unwrap(),
            Value::object([("a", 1), ("c", 3)])
        );
    }

    #[test]
    fn pick_and_omit_reject_non_objects() {
        assert_eq!(pick(&Value::Null, &["a"]).unwrap_err().function, "pick");
        assert_eq!(omit(&Value::from(1), &["a"]).unwrap_err().function, "omit");
    }

    #[test]
    fn merge_overwrites_left_to_right() {
        assert_eq!(
            merge(&[
                Value::object([("a", 1)]),
                Value::object([("a", 2), ("b", 3)]),
            ])
            .unwrap(),
            Value::object([("a", 2), ("b", 3)])
        );
    }

    #[test]
    fn merge_of_nothing_is_an_empty_object() {
        assert_eq!(merge(&[]).unwrap(), Value::object(empty_entries()));
    }

    #[test]
    fn merge_validates_every_source() {
        let err = merge(&[Value::object([("a", 1)]), Value::from("x")]).unwrap_err();
        assert_eq!(err.function, "merge");
        assert_eq!(err.expected, "an object");
    }
}
