//! Page configuration: argument merging, validation, and the typed config.
//!
//! Callers hand over a partial argument map as a [`serde_json::Value`]; it is
//! merged recursively over [`defaults::DEFAULT_ARGS`], validated, and then
//! deserialized into [`PageConfig`]. Unknown keys survive the round trip in
//! [`PageConfig::extra`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::error::ConfigError;

pub mod defaults;
pub mod merge;

pub use defaults::{DEFAULT_ARGS, DEFAULT_CAPABILITY, DEFAULT_SAVE_TEXT, DEFAULT_SCRIPT_URI};
pub use merge::merge_args;

/// Menu placement arguments. Every field is optional for the caller; blanks
/// are resolved per-field when the menu descriptor is derived
/// (page title falls back to the page's `title`, menu title to the page
/// title, menu slug to the settings `key`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuArgs {
    /// Existing host menu to attach under; blank selects a top-level menu
    /// unless `top_menu` is set on the page.
    #[serde(default)]
    pub parent_slug: String,
    #[serde(default)]
    pub page_title: String,
    #[serde(default)]
    pub menu_title: String,
    #[serde(default)]
    pub capability: String,
    #[serde(default)]
    pub menu_slug: String,
    /// Icon for a top-level menu entry; ignored for submenus.
    #[serde(default)]
    pub icon_url: String,
    /// Menu position for a top-level entry; `None` appends at the end.
    #[serde(default)]
    pub position: Option<i64>,
}

/// One tab on the page: a presentation partition over field-group ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    /// Raw markup shown at the top of the tab's content container.
    #[serde(default)]
    pub desc: String,
    /// Ids of the field-groups this tab contains, in display order. Ids with
    /// no matching field-group are kept; the container just renders empty.
    #[serde(default)]
    pub boxes: Vec<String>,
}

/// Canonical, validated configuration for one options page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Unique identifier; doubles as the option storage key and the page's
    /// DOM/CSS namespace.
    pub key: String,
    /// Page title.
    pub title: String,
    /// Slug of an existing host menu; non-empty makes this page a submenu
    /// entry instead of a new top-level menu.
    #[serde(default)]
    pub top_menu: String,
    /// Optional post-type slug appended to the submenu parent as a
    /// `?post_type=` query discriminator.
    #[serde(default)]
    pub post_slug: String,
    #[serde(default)]
    pub menu: MenuArgs,
    /// Location of the client-side tab behavior script. Defaults to the
    /// bundled script; must pass the host's reachability probe when tabs
    /// are configured.
    #[serde(default)]
    pub script_uri: String,
    #[serde(default)]
    pub tabs: Vec<Tab>,
    /// Page columns, 1 or 2. Two columns adds a sidebar bound to the
    /// `side` context.
    #[serde(default = "default_cols")]
    pub cols: u8,
    /// Save button text; empty suppresses the button.
    #[serde(default)]
    pub save_text: String,
    /// Unrecognized argument keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_cols() -> u8 {
    1
}

impl PageConfig {
    /// Merge `args` over the defaults, validate, and produce the canonical
    /// configuration.
    ///
    /// Validation is fail-fast in this order: missing `key` or `title`
    /// aborts; `cols` is coerced to an integer and silently clamped to 1
    /// when outside `{1, 2}`; an empty `script_uri` falls back to the
    /// bundled script location.
    pub fn from_args(args: &Value) -> Result<Self, ConfigError> {
        let mut merged = merge_args(args, &DEFAULT_ARGS);

        if !has_non_empty_str(&merged, "key") || !has_non_empty_str(&merged, "title") {
            return Err(ConfigError::MissingKeyOrTitle);
        }

        if let Value::Object(map) = &mut merged {
            let cols = coerce_cols(map.get("cols"));
            map.insert("cols".into(), json!(cols));

            if let Some(Value::Object(menu)) = map.get_mut("menu") {
                let position = coerce_position(menu.get("position"));
                menu.insert("position".into(), position.map_or(Value::Null, |p| json!(p)));
            }

            let script_missing = map
                .get("script_uri")
                .and_then(Value::as_str)
                .is_none_or(str::is_empty);
            if script_missing {
                map.insert("script_uri".into(), json!(DEFAULT_SCRIPT_URI));
            }
        }

        Ok(serde_json::from_value(merged)?)
    }
}

fn has_non_empty_str(args: &Value, key: &str) -> bool {
    args.get(key)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

/// Integer-coerce a raw `cols` value and clamp it to `{1, 2}`.
///
/// Strings parse like integers, anything non-numeric coerces to 0, and
/// every result outside the legal range becomes 1.
fn coerce_cols(value: Option<&Value>) -> u8 {
    let n = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    if n == 1 || n == 2 { n as u8 } else { 1 }
}

/// Integer-coerce a raw menu position. Strings parse like integers;
/// absent or non-numeric values become `None`, the append-at-end sentinel.
fn coerce_position(value: Option<&Value>) -> Option<i64> {
    match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_args() -> Value {
        json!({"key": "opts", "title": "Options"})
    }

    #[test]
    fn minimal_args_fill_defaults() {
        let config = PageConfig::from_args(&minimal_args()).unwrap();
        assert_eq!(config.key, "opts");
        assert_eq!(config.cols, 1);
        assert_eq!(config.script_uri, DEFAULT_SCRIPT_URI);
        assert_eq!(config.save_text, DEFAULT_SAVE_TEXT);
        assert_eq!(config.menu.capability, DEFAULT_CAPABILITY);
        assert!(config.tabs.is_empty());
    }

    #[test]
    fn missing_key_or_title_fails() {
        for args in [
            json!({"title": "Options"}),
            json!({"key": "opts"}),
            json!({"key": "", "title": "Options"}),
            json!({"key": "opts", "title": ""}),
            json!({}),
        ] {
            assert!(matches!(
                PageConfig::from_args(&args),
                Err(ConfigError::MissingKeyOrTitle)
            ));
        }
    }

    #[test]
    fn cols_clamp_to_legal_range() {
        let cases = [
            (json!(1), 1),
            (json!(2), 2),
            (json!(0), 1),
            (json!(-3), 1),
            (json!(7), 1),
            (json!(2.0), 2),
            (json!("2"), 2),
            (json!("nope"), 1),
            (json!(null), 1),
            (json!(true), 1),
        ];
        for (raw, expected) in cases {
            let mut args = minimal_args();
            args["cols"] = raw.clone();
            let config = PageConfig::from_args(&args).unwrap();
            assert_eq!(config.cols, expected, "cols input {raw}");
        }
    }

    #[test]
    fn menu_position_coerces_to_integer() {
        let cases = [
            (json!(5), Some(5)),
            (json!(5.0), Some(5)),
            (json!("5"), Some(5)),
            (json!(" 12 "), Some(12)),
            (json!(null), None),
            (json!("nope"), None),
            (json!(true), None),
        ];
        for (raw, expected) in cases {
            let mut args = minimal_args();
            args["menu"] = json!({"position": raw.clone()});
            let config = PageConfig::from_args(&args).unwrap();
            assert_eq!(config.menu.position, expected, "position input {raw}");
        }
    }

    #[test]
    fn explicit_script_uri_is_kept() {
        let mut args = minimal_args();
        args["script_uri"] = json!("https://example.test/tabs.js");
        let config = PageConfig::from_args(&args).unwrap();
        assert_eq!(config.script_uri, "https://example.test/tabs.js");
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let mut args = minimal_args();
        args["theme"] = json!({"accent": "teal"});
        let config = PageConfig::from_args(&args).unwrap();
        assert_eq!(config.extra["theme"], json!({"accent": "teal"}));
    }

    #[test]
    fn nested_menu_args_merge_per_field() {
        let mut args = minimal_args();
        args["menu"] = json!({"menu_slug": "custom-slug"});
        let config = PageConfig::from_args(&args).unwrap();
        assert_eq!(config.menu.menu_slug, "custom-slug");
        assert_eq!(config.menu.capability, DEFAULT_CAPABILITY);
    }
}
