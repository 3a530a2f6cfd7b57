//! The seam to the host admin framework.
//!
//! Everything the host owns (menu registry, security tokens, notice sink,
//! resource probes, injected markup) sits behind [`AdminHost`]. The crate
//! never touches option storage or the request directly; the host drives an
//! [`crate::page::OptionsPage`] through its lifecycle and supplies these
//! services on the way.

use serde_json::Value;

use crate::menu::MENU_ARG_ARITY;

/// Opaque identifier the host returns from menu registration. All later
/// page-scoped hook registrations are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageHandle(pub String);

impl PageHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Markup injection points around the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionPoint {
    BeforeForm,
    AfterForm,
}

/// Host lifecycle events an options page attaches to.
///
/// The first four are global; the page-scoped variants only exist once menu
/// registration has produced a [`PageHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookPoint {
    /// Settings registration phase; the host registers
    /// [`crate::page::OptionsPage::setting_key`] with its settings API here.
    AdminInit,
    /// Admin menu build; the host calls
    /// [`crate::page::OptionsPage::register_menu`] here.
    AdminMenu,
    /// Head render; the host emits
    /// [`crate::page::OptionsPage::head_css`] here.
    AdminHead,
    /// Script enqueue; the host applies
    /// [`crate::page::OptionsPage::script_plan`] here.
    EnqueueScripts,
    /// Load of this specific page.
    PageLoad(PageHandle),
    /// Metabox registration for this specific page; the host applies
    /// [`crate::page::OptionsPage::metabox_registrations`] here.
    RegisterMetaboxes(PageHandle),
}

/// Services the host admin framework provides to an options page.
pub trait AdminHost {
    /// Whether the metabox framework is loaded. Pages refuse to construct
    /// without it.
    fn framework_loaded(&self) -> bool {
        true
    }

    /// Register a new top-level admin menu page. The argument order and
    /// arity are fixed; see [`crate::menu::MenuDescriptor::to_host_args`].
    fn add_menu_page(&mut self, args: &[Value; MENU_ARG_ARITY]) -> PageHandle;

    /// Register a submenu page under an existing menu. Same arity contract
    /// as [`AdminHost::add_menu_page`].
    fn add_submenu_page(&mut self, args: &[Value; MENU_ARG_ARITY]) -> PageHandle;

    /// HEAD-like probe for a script or style resource.
    fn resource_exists(&self, uri: &str) -> bool;

    /// Validate a security token from the current submission.
    fn verify_token(&self, name: &str, value: &str) -> bool;

    /// Queue a settings notice for display on the current page.
    fn add_notice(&mut self, key: &str, message: &str);

    /// Raw markup injected at an extension point, if any.
    fn extension_markup(&self, _point: ExtensionPoint) -> Option<String> {
        None
    }
}
