//! Recursive merge of caller arguments over the default argument map.

use serde_json::Value;

/// Merge `partial` over `defaults`, key-wise and recursively.
///
/// When both sides hold an object for the same key the objects are merged
/// recursively; any other value in `partial` replaces the default wholesale
/// (scalars and arrays are never merged element-wise). Keys that only exist
/// in `partial` pass through untouched, so callers can carry extra data in
/// their argument map without it being rejected.
pub fn merge_args(partial: &Value, defaults: &Value) -> Value {
    match (partial, defaults) {
        (Value::Object(partial), Value::Object(defaults)) => {
            let mut merged = defaults.clone();
            for (key, value) in partial {
                let resolved = match (value, merged.get(key)) {
                    (Value::Object(_), Some(existing @ Value::Object(_))) => {
                        merge_args(value, existing)
                    }
                    _ => value.clone(),
                };
                merged.insert(key.clone(), resolved);
            }
            Value::Object(merged)
        }
        _ => partial.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_replaces_default() {
        let merged = merge_args(&json!({"cols": 2}), &json!({"cols": 1, "title": "t"}));
        assert_eq!(merged, json!({"cols": 2, "title": "t"}));
    }

    #[test]
    fn nested_objects_merge_key_wise() {
        let partial = json!({"menu": {"menu_slug": "custom"}});
        let defaults = json!({"menu": {"menu_slug": "", "capability": "manage-settings"}});
        let merged = merge_args(&partial, &defaults);
        assert_eq!(
            merged,
            json!({"menu": {"menu_slug": "custom", "capability": "manage-settings"}})
        );
    }

    #[test]
    fn arrays_are_replaced_wholesale() {
        let merged = merge_args(&json!({"tabs": [{"id": "a"}]}), &json!({"tabs": [{"id": "x"}, {"id": "y"}]}));
        assert_eq!(merged, json!({"tabs": [{"id": "a"}]}));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let merged = merge_args(&json!({"custom": true}), &json!({"title": "t"}));
        assert_eq!(merged, json!({"custom": true, "title": "t"}));
    }

    #[test]
    fn partial_object_over_scalar_default_replaces() {
        let merged = merge_args(&json!({"menu": {"a": 1}}), &json!({"menu": "flat"}));
        assert_eq!(merged, json!({"menu": {"a": 1}}));
    }

    #[test]
    fn merge_is_idempotent() {
        let partial = json!({
            "key": "opts",
            "menu": {"menu_slug": "custom", "position": 7},
            "tabs": [{"id": "one", "boxes": ["a"]}],
            "extra": {"nested": {"deep": true}},
        });
        let defaults = json!({
            "key": "",
            "title": "",
            "menu": {"menu_slug": "", "capability": "manage-settings", "position": null},
            "tabs": [],
        });
        let once = merge_args(&partial, &defaults);
        let twice = merge_args(&once, &partial);
        assert_eq!(once, twice);
    }
}
