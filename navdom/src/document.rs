use crate::error::{DomError, Result};
use crate::node::{Child, Element, ElementData, Node, NodeId, NodeKind};

/// Arena-backed document tree.
///
/// Nodes are never freed: [`detach`](Self::detach) only unlinks a node (and
/// its subtree) from its parent, so handles held by callers stay valid.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(kind));
        id
    }

    // Construction

    /// Create a detached element.
    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        self.alloc(NodeKind::Element(data))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(text.into()))
    }

    /// Materialize an [`Element`] description as a detached subtree.
    pub fn build(&mut self, element: Element) -> NodeId {
        let (data, children) = element.into_parts();
        let id = self.create_element(data);
        for child in children {
            let child_id = match child {
                Child::Element(element) => self.build(element),
                Child::Text(text) => self.create_text(text),
            };
            // Both ids are fresh, so the links can be set directly.
            self.nodes[child_id.0].parent = Some(id);
            self.nodes[id.0].children.push(child_id);
        }
        id
    }

    /// Build `element` and append it to `parent`.
    pub fn mount(&mut self, parent: NodeId, element: Element) -> Result<NodeId> {
        let id = self.build(element);
        self.append_child(parent, id)?;
        Ok(id)
    }

    // Inspection

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.0).map(|node| &node.kind)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.kind(id)? {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.nodes.get_mut(id.0)?.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    /// Returns false if `id` is not an element.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.set_attr(name, value);
                true
            }
            None => false,
        }
    }

    // Traversal

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0)?.parent
    }

    /// Child handles in order. Empty for text nodes and unknown handles.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.is_element(child))
            .collect()
    }

    /// The next sibling that is an element, skipping text.
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let index = siblings.iter().position(|&s| s == id)?;
        siblings[index + 1..]
            .iter()
            .copied()
            .find(|&s| self.is_element(s))
    }

    /// All descendants of `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev());
        }
        out
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(node) = current {
            out.push(node);
            current = self.parent(node);
        }
        out
    }

    /// Whether `node` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).contains(&ancestor)
    }

    /// Whether `id` is reachable from the document root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        self.contains(self.root, id)
    }

    // Mutation

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.prepare_insert(parent, child)?;
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.prepare_insert(parent, child)?;
        self.node_mut(parent)?.children.insert(0, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Insert `node` immediately before `reference`.
    ///
    /// A detached `reference` has no position to insert at; the call is a
    /// no-op in that case.
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) -> Result<()> {
        self.node(reference)?;
        if reference == node {
            return Ok(());
        }
        let Some(parent) = self.parent(reference) else {
            log::trace!("[dom] insert_before: {reference} is detached, skipping");
            return Ok(());
        };
        self.prepare_insert(parent, node)?;
        let index = self
            .children(parent)
            .iter()
            .position(|&c| c == reference)
            .ok_or(DomError::UnknownNode(reference))?;
        self.node_mut(parent)?.children.insert(index, node);
        self.node_mut(node)?.parent = Some(parent);
        Ok(())
    }

    /// Unlink `id` (with its subtree) from its parent.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(DomError::RootNode);
        }
        let Some(parent) = self.node(id)?.parent else {
            return Ok(());
        };
        self.node_mut(parent)?.children.retain(|&c| c != id);
        self.node_mut(id)?.parent = None;
        Ok(())
    }

    fn prepare_insert(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if child == self.root {
            return Err(DomError::RootNode);
        }
        if matches!(self.node(parent)?.kind, NodeKind::Text(_)) {
            return Err(DomError::NotAContainer(parent));
        }
        self.node(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyCycle { parent, child });
        }
        self.detach(child)
    }

    // Content

    /// Concatenated text of `id` and its descendants, untrimmed.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            Some(NodeKind::Text(text)) => text.clone(),
            Some(_) => self
                .descendants(id)
                .into_iter()
                .filter_map(|n| match self.kind(n) {
                    Some(NodeKind::Text(text)) => Some(text.as_str()),
                    _ => None,
                })
                .collect(),
            None => String::new(),
        }
    }

    // Classes

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.classes.contains(class))
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.classes.add(class))
    }

    /// Returns true if the class was removed.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.classes.remove(class))
    }

    // Visibility

    /// Set `display: none` on the element's inline style.
    pub fn hide(&mut self, id: NodeId) {
        if let Some(el) = self.element_mut(id) {
            el.style.insert("display", "none");
        }
    }

    /// Drop an inline `display: none`, restoring the element's natural display.
    pub fn show(&mut self, id: NodeId) {
        if let Some(el) = self.element_mut(id) {
            if el.style.get("display") == Some("none") {
                el.style.remove("display");
            }
        }
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.element(id)
            .is_some_and(|el| el.style.get("display") == Some("none"))
    }
}
