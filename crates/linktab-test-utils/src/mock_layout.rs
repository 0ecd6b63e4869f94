//! Mock implementation of LayoutHost for testing.

use linktab_core::alloc::{HashMap, HashSet};
use linktab_ui::{LayoutHost, NodeId};

/// Records a layout write for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCall {
    SetLeft { node: NodeId, left: f32 },
    SetMarginRight { node: NodeId, margin: f32 },
    AddClass { node: NodeId, class: String },
    RemoveClass { node: NodeId, class: String },
}

impl LayoutCall {
    pub fn node(&self) -> NodeId {
        match self {
            LayoutCall::SetLeft { node, .. }
            | LayoutCall::SetMarginRight { node, .. }
            | LayoutCall::AddClass { node, .. }
            | LayoutCall::RemoveClass { node, .. } => *node,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct MockNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    offset_left: f32,
    width: f32,
    left: Option<f32>,
    margin_right: f32,
    classes: HashSet<String>,
}

/// Layout host with fixed geometry.
///
/// Offsets never reflow: whatever a test sets is what every read returns,
/// except that a node moved with `set_left` reports that left until it is
/// returned to the flow.
#[derive(Debug, Default)]
pub struct MockLayout {
    nodes: HashMap<NodeId, MockNode>,
    next_id: usize,
    calls: Vec<LayoutCall>,
}

impl MockLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parent with one child per entry of `offsets`, all `width` wide.
    ///
    /// Returns the layout and the children in order.
    pub fn row(offsets: &[f32], width: f32) -> (Self, Vec<NodeId>) {
        let mut layout = Self::new();
        let parent = layout.add_node(0.0, offsets.len() as f32 * width);
        let children = offsets
            .iter()
            .map(|&offset| {
                let child = layout.add_node(offset, width);
                layout.add_child(parent, child);
                child
            })
            .collect();
        (layout, children)
    }

    /// Add a detached node.
    pub fn add_node(&mut self, offset_left: f32, width: f32) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            MockNode {
                offset_left,
                width,
                ..MockNode::default()
            },
        );
        id
    }

    /// Append `child` to `parent`. Unknown nodes are ignored.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.nodes.contains_key(&parent) {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        } else {
            return;
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    pub fn set_offset_left(&mut self, node: NodeId, offset_left: f32) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.offset_left = offset_left;
        }
    }

    pub fn set_width(&mut self, node: NodeId, width: f32) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.width = width;
        }
    }

    /// Explicit left of `node`, `None` while in normal flow.
    pub fn left(&self, node: NodeId) -> Option<f32> {
        self.nodes.get(&node).and_then(|n| n.left)
    }

    pub fn margin_right(&self, node: NodeId) -> f32 {
        self.nodes.get(&node).map_or(0.0, |n| n.margin_right)
    }

    /// Every recorded write, oldest first.
    pub fn calls(&self) -> &[LayoutCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Nodes that currently carry a non-zero right margin.
    pub fn gapped_nodes(&self) -> Vec<NodeId> {
        let mut gapped: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.margin_right != 0.0)
            .map(|(id, _)| *id)
            .collect();
        gapped.sort_by_key(|id| id.0);
        gapped
    }

    pub fn count_margin_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, LayoutCall::SetMarginRight { .. }))
            .count()
    }
}

impl LayoutHost for MockLayout {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn offset_left(&mut self, node: NodeId) -> f32 {
        self.nodes
            .get(&node)
            .map_or(0.0, |n| n.left.unwrap_or(n.offset_left))
    }

    fn client_width(&mut self, node: NodeId) -> f32 {
        self.nodes.get(&node).map_or(0.0, |n| n.width)
    }

    fn set_left(&mut self, node: NodeId, left: f32) {
        self.calls.push(LayoutCall::SetLeft { node, left });
        if let Some(n) = self.nodes.get_mut(&node) {
            n.left = (left != 0.0).then_some(left);
        }
    }

    fn set_margin_right(&mut self, node: NodeId, margin: f32) {
        self.calls.push(LayoutCall::SetMarginRight { node, margin });
        if let Some(n) = self.nodes.get_mut(&node) {
            n.margin_right = margin;
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        self.calls.push(LayoutCall::AddClass {
            node,
            class: class.to_owned(),
        });
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        self.calls.push(LayoutCall::RemoveClass {
            node,
            class: class.to_owned(),
        });
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.remove(class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|n| n.classes.contains(class))
    }
}
