//! View-tree construction for the page body and the tab scaffold.
//!
//! Layout order is fixed: wrapper, title, before-form injection, the form
//! (sidebar column when two columns are configured, then the main column
//! with the tab scaffold followed by `normal` and `advanced` groups,
//! then the save button), after-form injection.

use crate::boxes::{Context, FieldGroup, SUBMIT_MARKER};
use crate::config::PageConfig;
use crate::element::{ColumnKind, Node, TabLink};

/// Class that keeps tabbed field-groups invisible until the client-side
/// behavior has moved them into their container.
pub const HIDDEN_CLASS: &str = "opt-hidden";

/// Class for field-groups that start collapsed.
pub const CLOSED_CLASS: &str = "closed";

/// DOM id of the settings form.
pub const FORM_ID: &str = "metatab-options-form";

/// Wrapper class shared by every page built by this crate.
pub const PAGE_CLASS: &str = "metatab-options-page";

/// Style block emitted in the head when tabs are configured. Cleans up the
/// host's nav-tab spacing, defines the hidden class, and pads the sidebar.
pub const HEAD_CSS: &str = concat!(
    "#poststuff h2.nav-tab-wrapper{padding-bottom:0;margin-bottom:20px;}",
    ".opt-hidden{display:none;}",
    "#side-sortables{padding-top:22px;}",
);

/// Build the full page body for the given (already visibility-filtered)
/// field-groups.
pub fn page_body(
    config: &PageConfig,
    groups: &[&dyn FieldGroup],
    before_form: Option<String>,
    after_form: Option<String>,
) -> Node {
    let mut form = Node::form(FORM_ID, &config.key);

    // Sidebar first; only a two-column page renders the side context.
    if config.cols == 2 {
        form = form.child(Node::Column {
            kind: ColumnKind::Side,
            children: slots_for_context(config, groups, Context::Side),
        });
    }

    let mut main = tab_scaffold(config);
    main.extend(slots_for_context(config, groups, Context::Normal));
    main.extend(slots_for_context(config, groups, Context::Advanced));
    form = form.child(Node::Column {
        kind: ColumnKind::Main,
        children: main,
    });

    if !config.save_text.is_empty() {
        form = form.child(Node::SaveButton {
            marker: SUBMIT_MARKER.to_string(),
            text: config.save_text.clone(),
        });
    }

    let mut wrapper = Node::wrapper()
        .class("wrap")
        .class(PAGE_CLASS)
        .class(&config.key)
        .child(Node::Title(config.title.clone()));
    if let Some(markup) = before_form {
        wrapper = wrapper.child(Node::raw(markup));
    }
    wrapper = wrapper.child(form.build());
    if let Some(markup) = after_form {
        wrapper = wrapper.child(Node::raw(markup));
    }
    wrapper.build()
}

/// The tab navigation strip plus one content container per tab.
///
/// Containers only carry the ordered box-id list and the tab description;
/// the client-side behavior moves the matching field-group nodes into them.
/// No tabs configured means no scaffold at all.
pub fn tab_scaffold(config: &PageConfig) -> Vec<Node> {
    if config.tabs.is_empty() {
        return Vec::new();
    }

    let links = config
        .tabs
        .iter()
        .map(|tab| TabLink {
            id: format!("opt-tab-{}", tab.id),
            target: format!("opt-content-{}", tab.id),
            title: tab.title.clone(),
        })
        .collect();

    let mut nodes = vec![Node::TabNav { links }];
    nodes.extend(config.tabs.iter().map(|tab| Node::TabContainer {
        id: format!("opt-content-{}", tab.id),
        boxes: tab.boxes.clone(),
        description: tab.desc.clone(),
    }));
    nodes
}

/// Presentation classes for one field-group on this page.
///
/// Closed-by-default groups get [`CLOSED_CLASS`]. Non-side groups that
/// belong to any tab's box set get [`HIDDEN_CLASS`] so they don't flash at
/// the wrong location before the client-side move.
pub fn group_classes(config: &PageConfig, group: &dyn FieldGroup) -> Vec<String> {
    let mut classes = Vec::new();
    let tabbed = group.context() != Context::Side
        && config
            .tabs
            .iter()
            .any(|tab| tab.boxes.iter().any(|id| id == group.id()));
    if tabbed {
        classes.push(HIDDEN_CLASS.to_string());
    }
    if group.closed_by_default() {
        classes.push(CLOSED_CLASS.to_string());
    }
    classes
}

fn slots_for_context(
    config: &PageConfig,
    groups: &[&dyn FieldGroup],
    context: Context,
) -> Vec<Node> {
    groups
        .iter()
        .filter(|group| group.context() == context)
        .map(|group| {
            Node::slot(group.id(), group.title())
                .context(context)
                .classes(group_classes(config, *group))
                .body(group.render_form())
                .build()
        })
        .collect()
}
