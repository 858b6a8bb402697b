//! In-memory [`Page`] for unit tests.
//!
//! Nodes are indices. A node matches the selector strings it was created
//! with, verbatim; `#id` entries also set its id. Node 0 is the body.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use super::Page;
use crate::util::number::group_thousands;

#[derive(Default)]
struct FakeNode {
    id: Option<String>,
    selectors: Vec<String>,
    parent: Option<usize>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    source: Option<String>,
    offset_top: f64,
}

pub(crate) struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    scroll_y: Cell<f64>,
    scrolled_to: RefCell<Vec<f64>>,
    focused: Cell<Option<usize>>,
    source_writes: Cell<usize>,
    now: Cell<f64>,
}

pub(crate) const BODY: usize = 0;

impl FakePage {
    pub(crate) fn new() -> Self {
        let body = FakeNode {
            selectors: vec!["body".into()],
            ..FakeNode::default()
        };
        Self {
            nodes: RefCell::new(vec![body]),
            scroll_y: Cell::new(0.0),
            scrolled_to: RefCell::new(Vec::new()),
            focused: Cell::new(None),
            source_writes: Cell::new(0),
            now: Cell::new(0.0),
        }
    }

    /// Add a node matching `selectors`, parented to the body.
    pub(crate) fn add(&self, selectors: &[&str]) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        let id = selectors
            .iter()
            .find_map(|s| s.strip_prefix('#'))
            .map(String::from);
        nodes.push(FakeNode {
            id,
            selectors: selectors.iter().map(|s| (*s).to_owned()).collect(),
            parent: Some(BODY),
            ..FakeNode::default()
        });
        nodes.len() - 1
    }

    pub(crate) fn add_child(&self, parent: usize, selectors: &[&str]) -> usize {
        let node = self.add(selectors);
        self.nodes.borrow_mut()[node].parent = Some(parent);
        node
    }

    pub(crate) fn with_attr(&self, node: usize, name: &str, value: &str) -> usize {
        let _ = self.nodes.borrow_mut()[node]
            .attributes
            .insert(name.into(), value.into());
        node
    }

    pub(crate) fn with_class(&self, node: usize, class: &str) -> usize {
        let _ = self.nodes.borrow_mut()[node].classes.insert(class.into());
        node
    }

    pub(crate) fn set_offset_top(&self, node: usize, top: f64) {
        self.nodes.borrow_mut()[node].offset_top = top;
    }

    pub(crate) fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub(crate) fn set_now(&self, now: f64) {
        self.now.set(now);
    }

    pub(crate) fn classes(&self, node: usize) -> Vec<String> {
        self.nodes.borrow()[node].classes.iter().cloned().collect()
    }

    pub(crate) fn style(&self, node: usize, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub(crate) fn text(&self, node: usize) -> String {
        self.nodes.borrow()[node].text.clone()
    }

    pub(crate) fn source(&self, node: usize) -> Option<String> {
        self.nodes.borrow()[node].source.clone()
    }

    pub(crate) fn source_writes(&self) -> usize {
        self.source_writes.get()
    }

    pub(crate) fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    pub(crate) fn scrolled_to(&self) -> Vec<f64> {
        self.scrolled_to.borrow().clone()
    }
}

impl Page for FakePage {
    type Node = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
    }

    fn query(&self, selector: &str) -> Option<usize> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| i)
            .collect()
    }

    fn query_within(&self, root: &usize, selector: &str) -> Option<usize> {
        self.query_all(selector)
            .into_iter()
            .find(|n| n != root && self.contains(root, n))
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*node].attributes.get(name).cloned()
    }

    fn has_class(&self, node: &usize, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.contains(class)
    }

    fn set_class(&self, node: &usize, class: &str, on: bool) {
        let classes = &mut self.nodes.borrow_mut()[*node].classes;
        if on {
            let _ = classes.insert(class.into());
        } else {
            let _ = classes.remove(class);
        }
    }

    fn set_style(&self, node: &usize, property: &str, value: &str) {
        let styles = &mut self.nodes.borrow_mut()[*node].styles;
        if value.is_empty() {
            let _ = styles.remove(property);
        } else {
            let _ = styles.insert(property.into(), value.into());
        }
    }

    fn set_text(&self, node: &usize, text: &str) {
        self.nodes.borrow_mut()[*node].text = text.into();
    }

    fn set_source(&self, node: &usize, url: &str) {
        self.source_writes.set(self.source_writes.get() + 1);
        self.nodes.borrow_mut()[*node].source = Some(url.into());
    }

    fn focus(&self, node: &usize) {
        self.focused.set(Some(*node));
    }

    fn contains(&self, ancestor: &usize, node: &usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(*node);
        while let Some(current) = cursor {
            if current == *ancestor {
                return true;
            }
            cursor = nodes[current].parent;
        }
        false
    }

    fn offset_top(&self, node: &usize) -> f64 {
        self.nodes.borrow()[*node].offset_top
    }

    fn viewport_top(&self, node: &usize) -> f64 {
        self.offset_top(node) - self.scroll_y.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scrolled_to.borrow_mut().push(top);
    }

    fn body(&self) -> Option<usize> {
        Some(BODY)
    }

    fn now(&self) -> f64 {
        self.now.get()
    }

    fn format_count(&self, value: f64) -> String {
        group_thousands(value, ',')
    }
}
