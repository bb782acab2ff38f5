//! A minimal document model.
//!
//! Just enough of the DOM for the carousel and the search components: an
//! arena of elements with ids, classes, an inline transform, an input value,
//! `data-*` attributes and rendered inner markup, plus an event listener
//! table.
//!
//! ## Listeners carry messages
//!
//! A listener does not own a closure. It stores a message value of the host's
//! message type `M`; dispatching an event returns the messages of every
//! listener on the target and its ancestors (bubbling order), and the host
//! routes them to the owning component. Components stay plain structs with
//! `&mut self` methods.
//!
//! ## Registrations
//!
//! [`Registration`] is a listener slot owned by a component. Attaching through
//! it always removes the listener it held before, so re-running an
//! initializer replaces handlers instead of stacking them.

use std::collections::{BTreeMap, BTreeSet};

/// Index of an element inside its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    /// Inline `style.transform`.
    pub transform: Option<String>,
    /// Current value of an input element.
    pub value: String,
    pub dataset: BTreeMap<String, String>,
    /// Serialized markup written by a renderer.
    pub inner_html: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.dataset.insert(key.to_string(), value.to_string());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add or remove `class` depending on `on`, like `classList.toggle(class, on)`.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyPress,
    PointerEnter,
    PointerLeave,
}

/// A user or synthetic event delivered to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
    /// Key name for keypress events (`"Enter"`, `"a"`, ...).
    pub key: Option<String>,
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
            key: None,
        }
    }

    pub fn key_press(target: NodeId, key: &str) -> Self {
        Self {
            kind: EventKind::KeyPress,
            target,
            key: Some(key.to_string()),
        }
    }

    pub fn pointer_enter(target: NodeId) -> Self {
        Self {
            kind: EventKind::PointerEnter,
            target,
            key: None,
        }
    }

    pub fn pointer_leave(target: NodeId) -> Self {
        Self {
            kind: EventKind::PointerLeave,
            target,
            key: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct Listener<M> {
    id: ListenerId,
    target: NodeId,
    kind: EventKind,
    message: M,
}

/// Element arena plus listener table.
#[derive(Debug, Clone)]
pub struct Document<M> {
    nodes: Vec<Element>,
    roots: Vec<NodeId>,
    listeners: Vec<Listener<M>>,
    next_listener: u64,
}

impl<M> Default for Document<M> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }
}

impl<M: Clone> Document<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level element.
    pub fn append(&mut self, element: Element) -> NodeId {
        let id = self.insert(element, None);
        self.roots.push(id);
        id
    }

    /// Add `element` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = self.insert(element, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    fn insert(&mut self, mut element: Element, parent: Option<NodeId>) -> NodeId {
        element.parent = parent;
        element.children.clear();
        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        id
    }

    /// Detach all children of `parent` and append `elements` in their place.
    ///
    /// Detached nodes stay in the arena but are no longer reachable from the
    /// tree. Listeners on them are dropped.
    pub fn replace_children(&mut self, parent: NodeId, elements: Vec<Element>) -> Vec<NodeId> {
        let old = std::mem::take(&mut self.nodes[parent.0].children);
        for child in &old {
            self.detach_subtree(*child);
        }
        elements
            .into_iter()
            .map(|element| self.append_child(parent, element))
            .collect()
    }

    fn detach_subtree(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.detach_subtree(child);
        }
        self.nodes[node.0].parent = None;
        self.listeners.retain(|l| l.target != node);
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    /// Elements attached to the tree, in document order.
    fn attached(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        order
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached()
            .into_iter()
            .find(|node| self.nodes[node.0].id.as_deref() == Some(id))
    }

    pub fn get_elements_by_class_name(&self, class: &str) -> Vec<NodeId> {
        self.attached()
            .into_iter()
            .filter(|node| self.nodes[node.0].has_class(class))
            .collect()
    }

    /// Nearest inclusive ancestor of `node` carrying `class`.
    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            let element = self.element(id)?;
            if element.has_class(class) {
                return Some(id);
            }
            current = element.parent;
        }
        None
    }

    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        kind: EventKind,
        message: M,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener {
            id,
            target,
            kind,
            message,
        });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Number of listeners of `kind` attached directly to `target`.
    pub fn listener_count(&self, target: NodeId, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .count()
    }

    /// Messages of the listeners an event on `target` reaches.
    ///
    /// Pointer enter/leave do not bubble; clicks and keypresses walk up the
    /// ancestors. Within one element, listeners run in registration order.
    pub fn listeners_for(&self, target: NodeId, kind: EventKind) -> Vec<M> {
        let bubbles = matches!(kind, EventKind::Click | EventKind::KeyPress);
        let mut messages = Vec::new();
        let mut current = Some(target);
        while let Some(node) = current {
            messages.extend(
                self.listeners
                    .iter()
                    .filter(|l| l.target == node && l.kind == kind)
                    .map(|l| l.message.clone()),
            );
            if !bubbles {
                break;
            }
            current = self.element(node).and_then(|e| e.parent);
        }
        messages
    }
}

/// A component-owned listener slot.
#[derive(Debug, Default)]
pub struct Registration {
    slot: Option<ListenerId>,
}

impl Registration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever this slot held with a fresh listener.
    pub fn attach<M: Clone>(
        &mut self,
        doc: &mut Document<M>,
        target: NodeId,
        kind: EventKind,
        message: M,
    ) -> ListenerId {
        self.detach(doc);
        let id = doc.add_event_listener(target, kind, message);
        self.slot = Some(id);
        id
    }

    pub fn detach<M: Clone>(&mut self, doc: &mut Document<M>) {
        if let Some(old) = self.slot.take() {
            doc.remove_event_listener(old);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.slot.is_some()
    }
}
