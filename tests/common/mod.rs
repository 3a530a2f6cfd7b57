//! Shared mock host and scripted field-groups for the integration tests.

use std::sync::{Arc, Mutex};

use metatab_options::menu::MENU_ARG_ARITY;
use metatab_options::{
    AdminHost, Context, ExtensionPoint, FieldGroup, Node, PageHandle, Priority, Submission,
    VisibilityGuard,
};
use serde_json::Value;

/// Records every host call an options page makes.
pub struct MockHost {
    pub framework_loaded: bool,
    pub reachable: bool,
    pub tokens_valid: bool,
    pub registered: Vec<(&'static str, Vec<Value>)>,
    pub notices: Vec<(String, String)>,
    pub before_form: Option<String>,
    pub after_form: Option<String>,
}

impl Default for MockHost {
    fn default() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            framework_loaded: true,
            reachable: true,
            tokens_valid: true,
            registered: Vec::new(),
            notices: Vec::new(),
            before_form: None,
            after_form: None,
        }
    }
}

impl AdminHost for MockHost {
    fn framework_loaded(&self) -> bool {
        self.framework_loaded
    }

    fn add_menu_page(&mut self, args: &[Value; MENU_ARG_ARITY]) -> PageHandle {
        self.registered.push(("top", args.to_vec()));
        PageHandle(format!("toplevel_page_{}", args[3].as_str().unwrap_or("")))
    }

    fn add_submenu_page(&mut self, args: &[Value; MENU_ARG_ARITY]) -> PageHandle {
        self.registered.push(("sub", args.to_vec()));
        PageHandle(format!("settings_page_{}", args[4].as_str().unwrap_or("")))
    }

    fn resource_exists(&self, _uri: &str) -> bool {
        self.reachable
    }

    fn verify_token(&self, _name: &str, _value: &str) -> bool {
        self.tokens_valid
    }

    fn add_notice(&mut self, key: &str, message: &str) {
        self.notices.push((key.to_string(), message.to_string()));
    }

    fn extension_markup(&self, point: ExtensionPoint) -> Option<String> {
        match point {
            ExtensionPoint::BeforeForm => self.before_form.clone(),
            ExtensionPoint::AfterForm => self.after_form.clone(),
        }
    }
}

/// A field-group with scripted behavior and an observable save log.
pub struct TestGroup {
    id: String,
    context: Context,
    closed: bool,
    guard: Option<VisibilityGuard>,
    wants_save: bool,
    updated: Vec<String>,
    save_log: Arc<Mutex<Vec<String>>>,
}

impl TestGroup {
    pub fn new(id: &str, page_key: &str) -> Self {
        Self {
            id: id.to_string(),
            context: Context::Normal,
            closed: false,
            guard: Some(VisibilityGuard::options_page([page_key])),
            wants_save: true,
            updated: vec![format!("{id}_field")],
            save_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    pub fn without_guard(mut self) -> Self {
        self.guard = None;
        self
    }

    pub fn guard_for(mut self, key: &str) -> Self {
        self.guard = Some(VisibilityGuard::options_page([key]));
        self
    }

    pub fn no_save(mut self) -> Self {
        self.wants_save = false;
        self
    }

    /// Handle onto the shared save log; records group ids in save order.
    pub fn save_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.save_log)
    }
}

impl FieldGroup for TestGroup {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.id
    }

    fn context(&self) -> Context {
        self.context
    }

    fn priority(&self) -> Priority {
        Priority::Default
    }

    fn closed_by_default(&self) -> bool {
        self.closed
    }

    fn visibility(&self) -> Option<&VisibilityGuard> {
        self.guard.as_ref()
    }

    fn wants_save(&self) -> bool {
        self.wants_save
    }

    fn save(&mut self, _storage_key: &str, _submission: &Submission) -> anyhow::Result<Vec<String>> {
        self.save_log.lock().unwrap().push(self.id.clone());
        Ok(self.updated.clone())
    }

    fn render_form(&self) -> Node {
        Node::text(format!("{}-form", self.id))
    }
}

/// Depth-first collection of every node matching `predicate`.
pub fn collect<'a>(node: &'a Node, predicate: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
    let mut found = Vec::new();
    if predicate(node) {
        found.push(node);
    }
    for child in node.children() {
        found.extend(collect(child, predicate));
    }
    found
}

/// Ids of every field-group slot in the tree, in render order.
pub fn slot_ids(node: &Node) -> Vec<String> {
    collect(node, &|n| matches!(n, Node::FieldGroupSlot { .. }))
        .into_iter()
        .map(|n| match n {
            Node::FieldGroupSlot { id, .. } => id.clone(),
            _ => unreachable!(),
        })
        .collect()
}
