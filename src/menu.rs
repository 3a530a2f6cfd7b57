//! Menu registration descriptors.
//!
//! The host exposes two registration calls with fixed positional arities, one
//! for top-level menus and one for submenus. Everything arity-shaped lives in
//! [`MenuDescriptor::to_host_args`]; the rest of the crate only deals in the
//! named-field variants.

use serde_json::{Value, json};

use crate::config::PageConfig;

/// Number of positional slots both host registration calls take.
pub const MENU_ARG_ARITY: usize = 6;

/// A new top-level menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TopLevelMenu {
    pub page_title: String,
    pub menu_title: String,
    pub capability: String,
    pub menu_slug: String,
    pub icon_url: String,
    /// `None` appends at the end of the host menu.
    pub position: Option<i64>,
}

/// A submenu entry under an existing host menu.
#[derive(Debug, Clone, PartialEq)]
pub struct SubMenu {
    /// Parent menu slug, already carrying the `?post_type=` discriminator
    /// when one is configured.
    pub parent_slug: String,
    pub page_title: String,
    pub menu_title: String,
    pub capability: String,
    pub menu_slug: String,
}

/// Which registration call to make, with its named arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuDescriptor {
    TopLevel(TopLevelMenu),
    Submenu(SubMenu),
}

impl MenuDescriptor {
    /// Derive the descriptor from a validated page config.
    ///
    /// A submenu is selected when `top_menu` or `menu.parent_slug` is
    /// non-empty, with `parent_slug` winning when both are given. Blank menu
    /// fields resolve per-field: page title from the page `title`, menu
    /// title from the page title, menu slug from the settings `key`.
    pub fn from_config(config: &PageConfig) -> Self {
        let parent = if config.menu.parent_slug.is_empty() {
            config.top_menu.as_str()
        } else {
            config.menu.parent_slug.as_str()
        };

        let page_title = fallback(&config.menu.page_title, &config.title);
        let menu_title = fallback(&config.menu.menu_title, &page_title);
        let menu_slug = fallback(&config.menu.menu_slug, &config.key);
        let capability = config.menu.capability.clone();

        if parent.is_empty() {
            MenuDescriptor::TopLevel(TopLevelMenu {
                page_title,
                menu_title,
                capability,
                menu_slug,
                icon_url: config.menu.icon_url.clone(),
                position: config.menu.position,
            })
        } else {
            let parent_slug = if config.post_slug.is_empty() {
                parent.to_string()
            } else {
                format!("{parent}?post_type={}", urlencoding::encode(&config.post_slug))
            };
            MenuDescriptor::Submenu(SubMenu {
                parent_slug,
                page_title,
                menu_title,
                capability,
                menu_slug,
            })
        }
    }

    /// Translate to the exact positional argument list the host expects.
    ///
    /// Top-level: `[page_title, menu_title, capability, menu_slug, icon_url,
    /// position]`, with a null position meaning "append at end". Submenu:
    /// `[parent_slug, page_title, menu_title, capability, menu_slug, null]`;
    /// the trailing slot is a placeholder so both calls stay at the same
    /// arity.
    pub fn to_host_args(&self) -> [Value; MENU_ARG_ARITY] {
        match self {
            MenuDescriptor::TopLevel(menu) => [
                json!(menu.page_title),
                json!(menu.menu_title),
                json!(menu.capability),
                json!(menu.menu_slug),
                json!(menu.icon_url),
                menu.position.map_or(Value::Null, |p| json!(p)),
            ],
            MenuDescriptor::Submenu(menu) => [
                json!(menu.parent_slug),
                json!(menu.page_title),
                json!(menu.menu_title),
                json!(menu.capability),
                json!(menu.menu_slug),
                Value::Null,
            ],
        }
    }
}

fn fallback(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
