//! Deep rewriting of mapping keys.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, KeyCase, Result, to_expected_case};

/// Rewrite every mapping key in `value` into `expected_case`.
///
/// Sequences keep their order, scalars pass through, and no value is
/// changed; only key names are. Fails with [`Error::KeyCollision`] when a
/// rewritten key would land on a key that already exists next to it.
///
/// ```
/// use recase_core::{KeyCase, object_to_expected_case};
/// use serde_json::json;
///
/// let value = json!({"user_id": 1, "tags": [{"tag_name": "a"}]});
/// let camel = object_to_expected_case(&value, KeyCase::Camel).unwrap();
/// assert_eq!(camel, json!({"userId": 1, "tags": [{"tagName": "a"}]}));
/// ```
pub fn object_to_expected_case(value: &Value, expected_case: KeyCase) -> Result<Value> {
    let mut path = String::new();
    recase_value(value, expected_case, &mut path)
}

/// Serialize `value` to JSON and rewrite its keys.
///
/// Structs are traversed like any other mapping, by their field names.
pub fn recase_serialize<T: Serialize + ?Sized>(
    value: &T,
    expected_case: KeyCase,
) -> Result<Value> {
    let value = serde_json::to_value(value).map_err(|e| Box::new(Error::from(e)))?;
    object_to_expected_case(&value, expected_case)
}

// `path` is a JSON pointer to `value`, restored to its original length on return.
fn recase_value(value: &Value, expected_case: KeyCase, path: &mut String) -> Result<Value> {
    match value {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push('/');
                path.push_str(&i.to_string());
                out.push(recase_value(item, expected_case, path)?);
                path.truncate(len);
            }
            Ok(Value::Array(out))
        }
        Value::Object(map) => recase_map(map, expected_case, path).map(Value::Object),
        scalar => Ok(scalar.clone()),
    }
}

fn recase_map(
    map: &Map<String, Value>,
    expected_case: KeyCase,
    path: &mut String,
) -> Result<Map<String, Value>> {
    let mut out = Map::with_capacity(map.len());
    for (name, value) in map {
        let new_name = to_expected_case(name, expected_case, None);
        if new_name != *name && (map.contains_key(&new_name) || out.contains_key(&new_name)) {
            return Err(Error::key_collision(
                new_name,
                name.as_str(),
                path.as_str(),
            ));
        }

        let len = path.len();
        path.push('/');
        push_pointer_token(path, name);
        let recased = recase_value(value, expected_case, path)?;
        path.truncate(len);

        out.insert(new_name, recased);
    }
    Ok(out)
}

fn push_pointer_token(path: &mut String, token: &str) {
    for c in token.chars() {
        match c {
            '~' => path.push_str("~0"),
            '/' => path.push_str("~1"),
            c => path.push(c),
        }
    }
}

impl KeyCase {
    /// Whether every key in `value` is already in this casing.
    ///
    /// Equivalent to recasing being a no-op.
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match value {
            Value::Array(items) => items.iter().all(|item| self.is_satisfied_by(item)),
            Value::Object(map) => map
                .iter()
                .all(|(name, value)| self.convert(name) == *name && self.is_satisfied_by(value)),
            _ => true,
        }
    }
}
