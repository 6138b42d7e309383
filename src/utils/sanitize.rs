use serde_json::{Map, Value};

/// Keys the server owns on every stored document. Clients never get to set them.
pub const RESERVED_FIELDS: [&str; 4] = ["id", "owner", "created_at", "updated_at"];

/// Drops every key whose value is exactly the empty string, descending into
/// nested objects. Arrays and other falsy values (`0`, `false`, `null`) are kept.
pub fn remove_blanks(payload: Map<String, Value>) -> Map<String, Value> {
    payload
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) if text.is_empty() => None,
            Value::Object(nested) => Some((key, Value::Object(remove_blanks(nested)))),
            value => Some((key, value)),
        })
        .collect()
}

pub fn strip_reserved(mut payload: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_FIELDS {
        payload.remove(key);
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn removes_empty_strings_recursively() {
        let payload = object(json!({
            "title": "",
            "text": "ok",
            "nutrition": { "calories": "", "notes": "low salt", "deep": { "a": "" } }
        }));

        assert_eq!(
            Value::Object(remove_blanks(payload)),
            json!({ "text": "ok", "nutrition": { "notes": "low salt", "deep": {} } })
        );
    }

    #[test]
    fn keeps_arrays_and_other_falsy_values() {
        let payload = object(json!({
            "count": 0,
            "vegan": false,
            "notes": null,
            "tags": ["", "spicy"],
            "space": " "
        }));

        assert_eq!(Value::Object(remove_blanks(payload.clone())), Value::Object(payload));
    }

    #[test]
    fn strips_server_owned_keys() {
        let payload = object(json!({
            "id": "x",
            "owner": "someone-else",
            "created_at": "2020-01-01T00:00:00",
            "updated_at": null,
            "title": "Soup"
        }));

        assert_eq!(Value::Object(strip_reserved(payload)), json!({ "title": "Soup" }));
    }
}
