//! The options page itself: construction, host lifecycle entry points,
//! save gating, and the settings notice latch.

use serde::Serialize;

use crate::boxes::{FieldGroup, Submission};
use crate::config::PageConfig;
use crate::element::Node;
use crate::error::ConfigError;
use crate::host::{AdminHost, ExtensionPoint, HookPoint, PageHandle};
use crate::menu::MenuDescriptor;
use crate::render;

/// Everything the host needs to register one field-group as a metabox on
/// this page.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaboxRegistration {
    pub id: String,
    pub title: String,
    pub context: crate::boxes::Context,
    pub priority: crate::boxes::Priority,
    /// Presentation classes: hidden-until-moved for tabbed groups, closed
    /// for groups that start collapsed.
    pub classes: Vec<String>,
}

/// Data the tab behavior script needs, localized alongside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabScriptData {
    pub key: String,
    pub posttype: String,
    pub defaulttab: String,
}

/// The tab behavior script enqueue request.
#[derive(Debug, Clone, PartialEq)]
pub struct TabScript {
    /// Host script handle, namespaced by the settings key.
    pub handle: String,
    pub uri: String,
    pub data: TabScriptData,
}

/// What to enqueue for a given page load.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptPlan {
    /// The host's postbox-toggle script; metaboxes need it everywhere.
    pub postbox_toggle: bool,
    /// The tab behavior script, only on this page and only with tabs
    /// configured.
    pub tab_script: Option<TabScript>,
}

/// One configured options page.
///
/// Built once at registration time; the host then drives it through its
/// request lifecycle (menu registration, head render, enqueue, metabox
/// registration, render/save). All mutable state lives here, scoped to
/// this instance.
pub struct OptionsPage {
    config: PageConfig,
    page_handle: Option<PageHandle>,
    notice_shown: bool,
}

impl OptionsPage {
    /// Normalize `args`, validate, and build the page.
    ///
    /// Fails when the host framework is absent, when `key` or `title` is
    /// missing, or when tabs are configured and the tab script does not
    /// pass the host's reachability probe. A failed construction registers
    /// nothing and leaves no state behind.
    pub fn new<H: AdminHost>(args: &serde_json::Value, host: &H) -> Result<Self, ConfigError> {
        if !host.framework_loaded() {
            return Err(ConfigError::HostUnavailable);
        }

        let config = PageConfig::from_args(args)?;

        if !config.tabs.is_empty() {
            if config.script_uri.is_empty() {
                return Err(ConfigError::ScriptMissing);
            }
            if !host.resource_exists(&config.script_uri) {
                return Err(ConfigError::ScriptUnreachable(config.script_uri.clone()));
            }
        }

        log::debug!(
            "configured options page '{}' ({} tabs, {} cols)",
            config.key,
            config.tabs.len(),
            config.cols
        );

        Ok(Self {
            config,
            page_handle: None,
            notice_shown: false,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The storage key the host registers with its settings API at
    /// admin-init.
    pub fn setting_key(&self) -> &str {
        &self.config.key
    }

    /// The handle produced by menu registration, once it has run.
    pub fn page_handle(&self) -> Option<&PageHandle> {
        self.page_handle.as_ref()
    }

    /// Host hook points this page wants. The page-scoped entries only
    /// appear after [`OptionsPage::register_menu`] has produced a handle.
    pub fn subscriptions(&self) -> Vec<HookPoint> {
        let mut hooks = vec![
            HookPoint::AdminInit,
            HookPoint::AdminMenu,
            HookPoint::AdminHead,
            HookPoint::EnqueueScripts,
        ];
        if let Some(handle) = &self.page_handle {
            hooks.push(HookPoint::PageLoad(handle.clone()));
            hooks.push(HookPoint::RegisterMetaboxes(handle.clone()));
        }
        hooks
    }

    /// The menu descriptor this page registers with, derived fresh from
    /// the config.
    pub fn menu_descriptor(&self) -> MenuDescriptor {
        MenuDescriptor::from_config(&self.config)
    }

    /// Register the page in the host admin menu and remember the returned
    /// handle for page-scoped hooks.
    pub fn register_menu<H: AdminHost>(&mut self, host: &mut H) -> PageHandle {
        let descriptor = self.menu_descriptor();
        let args = descriptor.to_host_args();
        let handle = match descriptor {
            MenuDescriptor::TopLevel(_) => host.add_menu_page(&args),
            MenuDescriptor::Submenu(_) => host.add_submenu_page(&args),
        };
        log::debug!(
            "registered options page '{}' as '{}'",
            self.config.key,
            handle.as_str()
        );
        self.page_handle = Some(handle.clone());
        handle
    }

    /// Style block for the head render, present only when tabs are
    /// configured.
    pub fn head_css(&self) -> Option<&'static str> {
        if self.config.tabs.is_empty() {
            None
        } else {
            Some(render::HEAD_CSS)
        }
    }

    /// What to enqueue for the page load identified by `hook_suffix`.
    ///
    /// The postbox-toggle script is always requested. The tab script is
    /// added only when tabs are configured and `hook_suffix` names this
    /// page, localized with the settings key, the post-type discriminator,
    /// and the first tab's id.
    pub fn script_plan(&self, hook_suffix: &str) -> ScriptPlan {
        let on_this_page = self
            .page_handle
            .as_ref()
            .is_some_and(|handle| handle.as_str() == hook_suffix);

        let tab_script = match (on_this_page, self.config.tabs.first()) {
            (true, Some(first_tab)) => Some(TabScript {
                handle: format!("{}-admin", self.config.key),
                uri: self.config.script_uri.clone(),
                data: TabScriptData {
                    key: self.config.key.clone(),
                    posttype: self.config.post_slug.clone(),
                    defaulttab: first_tab.id.clone(),
                },
            }),
            _ => None,
        };

        ScriptPlan {
            postbox_toggle: true,
            tab_script,
        }
    }

    /// Whether a field-group is shown on this page: its visibility guard
    /// must name this exact settings key.
    pub fn shows(&self, group: &dyn FieldGroup) -> bool {
        group
            .visibility()
            .is_some_and(|guard| guard.allows(&self.config.key))
    }

    /// Registration entries for every field-group shown on this page, in
    /// supplied order, with presentation classes attached.
    pub fn metabox_registrations(&self, groups: &[Box<dyn FieldGroup>]) -> Vec<MetaboxRegistration> {
        groups
            .iter()
            .filter(|group| self.shows(group.as_ref()))
            .map(|group| {
                log::debug!(
                    "registering metabox '{}' ({}/{}) on page '{}'",
                    group.id(),
                    group.context().as_str(),
                    group.priority().as_str(),
                    self.config.key
                );
                MetaboxRegistration {
                    id: group.id().to_string(),
                    title: group.title().to_string(),
                    context: group.context(),
                    priority: group.priority(),
                    classes: render::group_classes(&self.config, group.as_ref()),
                }
            })
            .collect()
    }

    /// The save guard: persistence is permitted only when the group wants
    /// to save, the submission carries the submit marker, an object id,
    /// and the group's token, the host verifies the token, and the object
    /// id equals this page's settings key. Read rendering is never gated.
    pub fn should_save<H: AdminHost>(
        &self,
        group: &dyn FieldGroup,
        submission: Option<&Submission>,
        host: &H,
    ) -> bool {
        let Some(submission) = submission else {
            return false;
        };
        if !group.wants_save() || !submission.has_submit_marker() {
            return false;
        }
        let Some(object_id) = submission.object_id() else {
            return false;
        };
        let token_field = group.token_field();
        let Some(token) = submission.field(&token_field) else {
            return false;
        };
        if !host.verify_token(&token_field, token) {
            return false;
        }
        object_id == self.config.key
    }

    /// Settings-saved notice, latched to fire at most once per render
    /// cycle no matter how many field-groups saved in the submission.
    pub fn settings_notice<H: AdminHost>(
        &mut self,
        host: &mut H,
        object_id: &str,
        updated: &[String],
    ) {
        if object_id != self.config.key || updated.is_empty() || self.notice_shown {
            return;
        }
        host.add_notice(&format!("{}-notices", self.config.key), "Settings updated.");
        self.notice_shown = true;
    }

    /// Render the full page body.
    ///
    /// Runs save-then-display for every shown field-group in supplied
    /// order: groups passing the save guard persist first (save failures
    /// are logged and skipped), then the body tree is built with every
    /// shown group's form. The notice latch resets at the end of the
    /// render, ready for the next submit cycle.
    pub fn render<H: AdminHost>(
        &mut self,
        host: &mut H,
        groups: &mut [Box<dyn FieldGroup>],
        submission: Option<&Submission>,
    ) -> Node {
        let shown: Vec<usize> = groups
            .iter()
            .enumerate()
            .filter(|(_, group)| self.shows(group.as_ref()))
            .map(|(index, _)| index)
            .collect();

        for &index in &shown {
            let Some(submission) = submission else {
                break;
            };
            if !self.should_save(groups[index].as_ref(), Some(submission), host) {
                continue;
            }
            let storage_key = self.config.key.clone();
            match groups[index].save(&storage_key, submission) {
                Ok(updated) => {
                    let object_id = submission.object_id().unwrap_or_default().to_string();
                    self.settings_notice(host, &object_id, &updated);
                }
                Err(error) => {
                    log::warn!(
                        "field-group '{}' failed to save: {error:#}",
                        groups[index].id()
                    );
                }
            }
        }

        let shown_groups: Vec<&dyn FieldGroup> =
            shown.iter().map(|&index| groups[index].as_ref()).collect();
        let body = render::page_body(
            &self.config,
            &shown_groups,
            host.extension_markup(ExtensionPoint::BeforeForm),
            host.extension_markup(ExtensionPoint::AfterForm),
        );

        self.notice_shown = false;
        body
    }
}
