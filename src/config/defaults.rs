//! Default argument map for options pages.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Capability required to visit the page unless the caller overrides it.
pub const DEFAULT_CAPABILITY: &str = "manage-settings";

/// Bundled location of the client-side tab behavior script, used when the
/// caller does not supply `script_uri`.
pub const DEFAULT_SCRIPT_URI: &str = "assets/metatab-options.js";

/// Text on the save button unless overridden; an empty override removes
/// the button entirely.
pub const DEFAULT_SAVE_TEXT: &str = "Save";

/// The complete default argument map caller arguments are merged over.
///
/// `key` and `title` default to empty strings on purpose: both are required,
/// and a non-empty default would mask a missing value instead of failing
/// construction.
pub static DEFAULT_ARGS: Lazy<Value> = Lazy::new(|| {
    json!({
        "key": "",
        "title": "",
        "top_menu": "",
        "post_slug": "",
        "menu": {
            "parent_slug": "",
            "page_title": "",
            "menu_title": "",
            "capability": DEFAULT_CAPABILITY,
            "menu_slug": "",
            "icon_url": "",
            "position": null,
        },
        "script_uri": "",
        "tabs": [],
        "cols": 1,
        "save_text": DEFAULT_SAVE_TEXT,
    })
});
