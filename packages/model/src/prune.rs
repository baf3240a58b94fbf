use serde_json::Value;

/// Recursively remove empty values (`null`, `""`, `[]`, `{}`) from a
/// JSON value.
///
/// Zeros and `false` are kept — "empty" means absent, not falsy. The
/// function is pure and idempotent: pruning an already-pruned value
/// returns it unchanged.
pub fn prune(value: Value) -> Value {
    prune_inner(value).unwrap_or(Value::Null)
}

fn prune_inner(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(Value::String(s))
            }
        }
        Value::Array(items) => {
            let cleaned: Vec<Value> = items.into_iter().filter_map(prune_inner).collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(Value::Array(cleaned))
            }
        }
        Value::Object(map) => {
            let mut cleaned = serde_json::Map::new();
            for (key, inner) in map {
                if let Some(kept) = prune_inner(inner) {
                    cleaned.insert(key, kept);
                }
            }
            if cleaned.is_empty() {
                None
            } else {
                Some(Value::Object(cleaned))
            }
        }
        other => Some(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prune_drops_empty_values() {
        let value = json!({
            "id": "5",
            "text": "",
            "runs": [],
            "meta": {},
            "fill_color": null,
            "width": 0.0,
            "bold": false,
        });

        let pruned = prune(value);
        assert_eq!(pruned, json!({"id": "5", "width": 0.0, "bold": false}));
    }

    #[test]
    fn test_prune_recurses_into_nesting() {
        let value = json!({
            "elements": [
                {"id": "1", "runs": [{"text": ""}]},
                {"id": "2", "runs": [{"text": "hi", "color": null}]},
            ]
        });

        let pruned = prune(value);
        assert_eq!(
            pruned,
            json!({
                "elements": [
                    {"id": "1"},
                    {"id": "2", "runs": [{"text": "hi"}]},
                ]
            })
        );
    }

    #[test]
    fn test_prune_is_idempotent() {
        let value = json!({
            "canvas_width": 10.0,
            "elements": [{"id": "1", "text": "", "meta": {"inner": []}}],
        });

        let once = prune(value);
        let twice = prune(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_prune_all_empty_collapses_to_null() {
        let value = json!({"a": {"b": [null, ""]}});
        assert_eq!(prune(value), Value::Null);
    }
}
