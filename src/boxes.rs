//! Field-groups: the host framework's metabox concept behind a trait.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::Node;

/// Visibility scope that marks a guard as belonging to options pages.
pub const OPTIONS_PAGE_SCOPE: &str = "options-page";

/// Submission field name that marks the form as submitted through the
/// options-page save button.
pub const SUBMIT_MARKER: &str = "submit-options";

/// Submission field name carrying the id of the object being saved.
pub const OBJECT_ID_FIELD: &str = "object_id";

/// Placement slot for a field-group on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    #[default]
    Normal,
    Advanced,
    /// Sidebar column; only rendered when the page uses two columns.
    Side,
}

/// Ordering priority within a context, mirroring the host's metabox
/// priorities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Core,
    #[default]
    Default,
    Low,
}

impl Context {
    pub fn as_str(self) -> &'static str {
        match self {
            Context::Normal => "normal",
            Context::Advanced => "advanced",
            Context::Side => "side",
        }
    }
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Core => "core",
            Priority::Default => "default",
            Priority::Low => "low",
        }
    }
}

/// Declares which pages a field-group may appear on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityGuard {
    /// Guard scope; must be [`OPTIONS_PAGE_SCOPE`] to match any options page.
    pub scope: String,
    /// Settings keys of the pages the group belongs to.
    pub keys: Vec<String>,
}

impl VisibilityGuard {
    /// Guard scoped to the options pages with the given settings keys.
    pub fn options_page<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope: OPTIONS_PAGE_SCOPE.to_string(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this guard admits the page with settings key `key`.
    pub fn allows(&self, key: &str) -> bool {
        self.scope == OPTIONS_PAGE_SCOPE && self.keys.iter().any(|k| k == key)
    }
}

/// One form submission, as a flat field map extracted from the request by
/// the host.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    fields: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether the submission came through an options-page save button.
    pub fn has_submit_marker(&self) -> bool {
        self.fields.contains_key(SUBMIT_MARKER)
    }

    /// The id of the object this submission targets, if present.
    pub fn object_id(&self) -> Option<&str> {
        self.field(OBJECT_ID_FIELD)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Submission {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Capability interface for a host-supplied field-group.
///
/// The page calls [`FieldGroup::save`] only when the save guard passes and
/// always calls [`FieldGroup::render_form`]; persistence itself belongs to
/// the implementation.
pub trait FieldGroup {
    /// Unique id; referenced by tab configurations.
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    fn context(&self) -> Context {
        Context::Normal
    }

    fn priority(&self) -> Priority {
        Priority::Default
    }

    /// Whether the group starts collapsed.
    fn closed_by_default(&self) -> bool {
        false
    }

    /// Visibility guard; a group with no guard is never shown on an
    /// options page.
    fn visibility(&self) -> Option<&VisibilityGuard>;

    /// Whether this group wants its fields persisted on submit.
    fn wants_save(&self) -> bool {
        true
    }

    /// Name of the submission field carrying this group's security token.
    fn token_field(&self) -> String {
        format!("token_{}", self.id())
    }

    /// Persist the group's fields from `submission` under `storage_key`.
    /// Returns the ids of the fields that changed.
    fn save(&mut self, storage_key: &str, submission: &Submission) -> anyhow::Result<Vec<String>>;

    /// Render the group's form body. Called unconditionally; the read path
    /// is never gated.
    fn render_form(&self) -> Node;
}
