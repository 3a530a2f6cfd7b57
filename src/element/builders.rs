use crate::boxes::Context;
use crate::element::Node;

/// Builder for page wrappers.
pub struct WrapperBuilder {
    pub(crate) classes: Vec<String>,
    pub(crate) children: Vec<Node>,
}

impl WrapperBuilder {
    pub(crate) fn new() -> Self {
        Self {
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Node {
        Node::Wrapper {
            classes: self.classes,
            children: self.children,
        }
    }
}

/// Builder for the settings form.
pub struct FormBuilder {
    pub(crate) id: String,
    pub(crate) object_id: String,
    pub(crate) children: Vec<Node>,
}

impl FormBuilder {
    pub(crate) fn new(id: impl Into<String>, object_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            object_id: object_id.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> Node {
        Node::Form {
            id: self.id,
            object_id: self.object_id,
            children: self.children,
        }
    }
}

/// Builder for field-group slots.
pub struct SlotBuilder {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) context: Context,
    pub(crate) classes: Vec<String>,
    pub(crate) body: Node,
}

impl SlotBuilder {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            context: Context::Normal,
            classes: Vec::new(),
            body: Node::None,
        }
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes(mut self, classes: impl IntoIterator<Item = String>) -> Self {
        self.classes.extend(classes);
        self
    }

    pub fn body(mut self, body: Node) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Node {
        Node::FieldGroupSlot {
            id: self.id,
            title: self.title,
            context: self.context,
            classes: self.classes,
            body: Box::new(self.body),
        }
    }
}
