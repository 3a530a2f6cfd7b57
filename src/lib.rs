//! Tabbed options pages on top of a metabox-style admin framework.
//!
//! The crate takes a nested argument map (page title, menu placement,
//! storage key, tabs), normalizes it over defaults, validates it, and
//! exposes the lifecycle entry points a host admin framework calls:
//! menu registration, head CSS, script enqueueing, metabox registration,
//! and the render/save pass. The host owns storage, security tokens, and
//! templating; this crate owns configuration normalization, the
//! menu/tab/field-group association, and the declarative view tree of the
//! page body.
//!
//! ```no_run
//! use metatab_options::OptionsPage;
//! use serde_json::json;
//!
//! # fn demo(host: &mut impl metatab_options::AdminHost) -> Result<(), metatab_options::ConfigError> {
//! let mut page = OptionsPage::new(
//!     &json!({
//!         "key": "site_options",
//!         "title": "Site Options",
//!         "top_menu": "settings.php",
//!         "cols": 2,
//!         "tabs": [
//!             {"id": "general", "title": "General", "boxes": ["branding", "contact"]},
//!         ],
//!     }),
//!     host,
//! )?;
//! let handle = page.register_menu(host);
//! # let _ = handle;
//! # Ok(())
//! # }
//! ```

pub mod boxes;
pub mod config;
pub mod element;
pub mod error;
pub mod host;
pub mod menu;
pub mod page;
pub mod render;

pub use boxes::{Context, FieldGroup, Priority, Submission, VisibilityGuard};
pub use config::{MenuArgs, PageConfig, Tab};
pub use element::{ColumnKind, Node, TabLink};
pub use error::ConfigError;
pub use host::{AdminHost, ExtensionPoint, HookPoint, PageHandle};
pub use menu::MenuDescriptor;
pub use page::{MetaboxRegistration, OptionsPage, ScriptPlan, TabScript, TabScriptData};
