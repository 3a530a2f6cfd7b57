//! Declarative view tree for the options page body.
//!
//! Rendering emits structure and data attributes only; serializing a
//! [`Node`] tree to actual markup is the host templating layer's job. The
//! tab containers in particular are pure scaffolding: the client-side tab
//! behavior reads their box-id annotations and moves the matching
//! field-group nodes into place.

mod builders;

pub use builders::{FormBuilder, SlotBuilder, WrapperBuilder};

use crate::boxes::Context;

/// Which page column a [`Node::Column`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// The sidebar; bound to the `side` context, present only on
    /// two-column pages.
    Side,
    /// The main column holding tabs and the `normal`/`advanced` groups.
    Main,
}

/// One link in the tab navigation strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLink {
    /// DOM id of the link itself.
    pub id: String,
    /// DOM id of the content container the link activates.
    pub target: String,
    pub title: String,
}

/// A node in the page's view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Renders nothing.
    None,

    /// Plain text, escaped by the templating layer.
    Text(String),

    /// Raw markup passed through untouched (tab descriptions, extension
    /// point injections).
    Raw(String),

    /// The page heading.
    Title(String),

    /// The outermost page wrapper.
    Wrapper { classes: Vec<String>, children: Vec<Node> },

    /// The settings form. Carries a hidden object-id field equal to the
    /// page's settings key.
    Form {
        id: String,
        object_id: String,
        children: Vec<Node>,
    },

    /// A layout column.
    Column { kind: ColumnKind, children: Vec<Node> },

    /// The tab navigation strip.
    TabNav { links: Vec<TabLink> },

    /// One tab's content container. `boxes` lists the field-group ids the
    /// client-side behavior moves into it, in display order.
    TabContainer {
        id: String,
        boxes: Vec<String>,
        description: String,
    },

    /// One field-group's place on the page, wrapping its rendered form.
    FieldGroupSlot {
        id: String,
        title: String,
        context: Context,
        classes: Vec<String>,
        body: Box<Node>,
    },

    /// The submit button. `marker` is the submission field name the save
    /// guard looks for.
    SaveButton { marker: String, text: String },
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn wrapper() -> WrapperBuilder {
        WrapperBuilder::new()
    }

    pub fn form(id: impl Into<String>, object_id: impl Into<String>) -> FormBuilder {
        FormBuilder::new(id, object_id)
    }

    pub fn slot(id: impl Into<String>, title: impl Into<String>) -> SlotBuilder {
        SlotBuilder::new(id, title)
    }

    /// Child nodes, for containers; leaves return an empty slice.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Wrapper { children, .. }
            | Node::Form { children, .. }
            | Node::Column { children, .. } => children,
            Node::FieldGroupSlot { body, .. } => std::slice::from_ref(body),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_builder_collects_classes_and_children() {
        let node = Node::wrapper()
            .class("wrap")
            .class("my-page")
            .child(Node::Title("T".into()))
            .child(Node::text("body"))
            .build();
        let Node::Wrapper { classes, children } = &node else {
            panic!("expected wrapper");
        };
        assert_eq!(classes, &["wrap", "my-page"]);
        assert_eq!(children.len(), 2);
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn slot_wraps_body_with_context_and_classes() {
        let node = Node::slot("dogs", "Dogs")
            .context(Context::Side)
            .class("closed")
            .body(Node::text("form"))
            .build();
        let Node::FieldGroupSlot { context, classes, body, .. } = &node else {
            panic!("expected slot");
        };
        assert_eq!(*context, Context::Side);
        assert_eq!(classes, &["closed"]);
        assert_eq!(**body, Node::Text("form".into()));
    }
}
