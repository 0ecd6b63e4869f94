//! Element tree with Taffy layout integration.

use indexmap::IndexMap;
use linktab_core::alloc::HashSet;
use linktab_core::math::Vec2;
use linktab_core::profiling::profile_function;
use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, LengthPercentageAuto, Position,
    Size, Style, TaffyTree,
};

use crate::error::{ReorderError, ReorderResult};
use crate::layout::{LayoutHost, LayoutRect};

/// Default tab strip height in pixels.
pub const DEFAULT_STRIP_HEIGHT: f32 = 28.0;

/// Node identifier in the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// An element in the tree.
pub struct UiNode {
    pub taffy_node: taffy::NodeId,
    pub layout: LayoutRect,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub classes: HashSet<String>,
    /// Explicit left offset; `None` while in normal flow.
    pub left: Option<f32>,
    pub margin_right: f32,
}

/// Element tree managing styles, classes and computed layout.
pub struct UiTree {
    taffy: TaffyTree<()>,
    nodes: IndexMap<NodeId, UiNode>,
    root: Option<NodeId>,
    next_id: usize,
    viewport: Vec2,
    layout_dirty: bool,
}

impl UiTree {
    /// Create a new element tree.
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            nodes: IndexMap::new(),
            root: None,
            next_id: 0,
            viewport: Vec2::new(800.0, 600.0),
            layout_dirty: true,
        }
    }

    /// Add a detached element with the given Taffy style.
    pub fn add_node(&mut self, style: Style) -> ReorderResult<NodeId> {
        let node_id = NodeId(self.next_id);
        self.next_id += 1;

        let taffy_node = self.taffy.new_leaf(style)?;
        self.nodes.insert(
            node_id,
            UiNode {
                taffy_node,
                layout: LayoutRect::default(),
                parent: None,
                children: Vec::new(),
                classes: HashSet::new(),
                left: None,
                margin_right: 0.0,
            },
        );
        self.layout_dirty = true;

        Ok(node_id)
    }

    /// Append `child` to `parent`, detaching it from any previous parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> ReorderResult<()> {
        let parent_taffy = self.node(parent)?.taffy_node;
        let child_taffy = self.node(child)?.taffy_node;

        self.detach(child)?;
        self.taffy.add_child(parent_taffy, child_taffy)?;

        if let Some(child_node) = self.nodes.get_mut(&child) {
            child_node.parent = Some(parent);
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.push(child);
        }
        self.layout_dirty = true;
        Ok(())
    }

    /// Detach `node` from its parent, keeping it (and its subtree) alive.
    pub fn detach(&mut self, node: NodeId) -> ReorderResult<()> {
        let (taffy_node, parent) = {
            let n = self.node(node)?;
            (n.taffy_node, n.parent)
        };
        let Some(parent) = parent else {
            return Ok(());
        };

        let parent_taffy = self.node(parent)?.taffy_node;
        self.taffy.remove_child(parent_taffy, taffy_node)?;
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|&c| c != node);
        }
        if let Some(n) = self.nodes.get_mut(&node) {
            n.parent = None;
        }
        self.layout_dirty = true;
        Ok(())
    }

    /// Remove `node` and its whole subtree.
    pub fn remove_node(&mut self, node: NodeId) -> ReorderResult<()> {
        self.detach(node)?;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(removed) = self.nodes.shift_remove(&id) {
                self.taffy.remove(removed.taffy_node)?;
                stack.extend(removed.children);
            }
        }
        if self.root == Some(node) {
            self.root = None;
        }
        self.layout_dirty = true;
        Ok(())
    }

    /// Reorder the children of `parent`.
    ///
    /// `order` must be a permutation of the current children.
    pub fn set_children(&mut self, parent: NodeId, order: &[NodeId]) -> ReorderResult<()> {
        let parent_taffy = self.node(parent)?.taffy_node;
        let taffy_children = order
            .iter()
            .map(|id| self.node(*id).map(|n| n.taffy_node))
            .collect::<ReorderResult<Vec<_>>>()?;

        self.taffy.set_children(parent_taffy, &taffy_children)?;
        for &child in order {
            if let Some(child_node) = self.nodes.get_mut(&child) {
                child_node.parent = Some(parent);
            }
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children = order.to_vec();
        }
        self.layout_dirty = true;
        Ok(())
    }

    /// Set the root node.
    pub fn set_root(&mut self, node_id: NodeId) {
        self.root = Some(node_id);
        self.layout_dirty = true;
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Set the space available to the root.
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport = size;
        self.layout_dirty = true;
    }

    /// Create a horizontal tab strip.
    ///
    /// The first strip created becomes the root.
    pub fn tab_strip(&mut self, width: f32, height: f32) -> ReorderResult<NodeId> {
        let strip = self.add_node(Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            align_items: Some(AlignItems::Start),
            size: Size {
                width: Dimension::Length(width),
                height: Dimension::Length(height),
            },
            ..Default::default()
        })?;
        if self.root.is_none() {
            self.set_root(strip);
        }
        Ok(strip)
    }

    /// Append a fixed-size tab to `strip`.
    pub fn add_tab(&mut self, strip: NodeId, width: f32) -> ReorderResult<NodeId> {
        let height = self
            .taffy
            .style(self.node(strip)?.taffy_node)?
            .size
            .height;
        let tab = self.add_node(Style {
            flex_shrink: 0.0,
            size: Size {
                width: Dimension::Length(width),
                height,
            },
            ..Default::default()
        })?;
        self.add_child(strip, tab)?;
        Ok(tab)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    pub fn get(&self, node: NodeId) -> Option<&UiNode> {
        self.nodes.get(&node)
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Layout of `node` relative to its parent, recomputing if needed.
    pub fn layout(&mut self, node: NodeId) -> Option<LayoutRect> {
        self.ensure_layout();
        self.nodes.get(&node).map(|n| n.layout)
    }

    /// Layout of `node` in root coordinates.
    pub fn absolute_layout(&mut self, node: NodeId) -> Option<LayoutRect> {
        self.ensure_layout();
        let mut rect = self.nodes.get(&node)?.layout;
        let mut parent = self.nodes.get(&node)?.parent;
        while let Some(p) = parent {
            let parent_node = self.nodes.get(&p)?;
            rect = rect.translate(parent_node.layout.position());
            parent = parent_node.parent;
        }
        Some(rect)
    }

    /// Recompute layout if any style or structure changed since the last pass.
    pub fn ensure_layout(&mut self) {
        if !self.layout_dirty {
            return;
        }
        if let Err(err) = self.compute_layout() {
            tracing::warn!("layout pass failed: {}", err);
        }
    }

    /// Run a full layout pass from the root.
    pub fn compute_layout(&mut self) -> ReorderResult<()> {
        profile_function!();
        let Some(root) = self.root else {
            self.layout_dirty = false;
            return Ok(());
        };
        let root_taffy = self.node(root)?.taffy_node;

        self.taffy.compute_layout(
            root_taffy,
            Size {
                width: AvailableSpace::Definite(self.viewport.x),
                height: AvailableSpace::Definite(self.viewport.y),
            },
        )?;

        let mut reachable = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if reachable.insert(id) {
                if let Some(node) = self.nodes.get(&id) {
                    stack.extend(node.children.iter().copied());
                }
            }
        }

        for (id, node) in self.nodes.iter_mut() {
            if !reachable.contains(id) {
                node.layout = LayoutRect::default();
                continue;
            }
            let layout = self.taffy.layout(node.taffy_node)?;
            node.layout = LayoutRect {
                x: layout.location.x,
                y: layout.location.y,
                width: layout.size.width,
                height: layout.size.height,
            };
        }
        self.layout_dirty = false;
        Ok(())
    }

    /// Find the deepest element under `point` (root coordinates).
    pub fn hit_test(&mut self, point: Vec2) -> Option<NodeId> {
        profile_function!();
        self.ensure_layout();
        let root = self.root?;
        self.hit_test_node(root, point, Vec2::ZERO)
    }

    fn hit_test_node(&self, node_id: NodeId, point: Vec2, parent_offset: Vec2) -> Option<NodeId> {
        let node = self.nodes.get(&node_id)?;
        let abs_layout = node.layout.translate(parent_offset);
        if !abs_layout.contains(point) {
            return None;
        }

        // Later children paint on top, check them first.
        for &child_id in node.children.iter().rev() {
            if let Some(hit) = self.hit_test_node(child_id, point, abs_layout.position()) {
                return Some(hit);
            }
        }
        Some(node_id)
    }

    /// Explicit left offset of `node`, if positioned.
    pub fn left(&self, node: NodeId) -> Option<f32> {
        self.nodes.get(&node).and_then(|n| n.left)
    }

    pub fn margin_right(&self, node: NodeId) -> f32 {
        self.nodes.get(&node).map_or(0.0, |n| n.margin_right)
    }

    fn node(&self, node: NodeId) -> ReorderResult<&UiNode> {
        self.nodes.get(&node).ok_or(ReorderError::NodeNotFound(node))
    }

    fn update_style(&mut self, node: NodeId, update: impl FnOnce(&mut Style)) -> ReorderResult<()> {
        let taffy_node = self.node(node)?.taffy_node;
        let mut style = self.taffy.style(taffy_node)?.clone();
        update(&mut style);
        self.taffy.set_style(taffy_node, style)?;
        self.layout_dirty = true;
        Ok(())
    }
}

impl Default for UiTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutHost for UiTree {
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
        self.layout(node).map_or(0.0, |l| l.x)
    }

    fn client_width(&mut self, node: NodeId) -> f32 {
        self.layout(node).map_or(0.0, |l| l.width)
    }

    fn set_left(&mut self, node: NodeId, left: f32) {
        let positioned = left != 0.0;
        let result = self.update_style(node, |style| {
            if positioned {
                style.position = Position::Absolute;
                style.inset.left = LengthPercentageAuto::Length(left);
            } else {
                style.position = Position::Relative;
                style.inset.left = LengthPercentageAuto::Auto;
            }
        });
        match result {
            Ok(()) => {
                if let Some(n) = self.nodes.get_mut(&node) {
                    n.left = positioned.then_some(left);
                }
            }
            Err(err) => tracing::warn!("set_left on {:?} failed: {}", node, err),
        }
    }

    fn set_margin_right(&mut self, node: NodeId, margin: f32) {
        let result = self.update_style(node, |style| {
            style.margin.right = LengthPercentageAuto::Length(margin);
        });
        match result {
            Ok(()) => {
                if let Some(n) = self.nodes.get_mut(&node) {
                    n.margin_right = margin;
                }
            }
            Err(err) => tracing::warn!("set_margin_right on {:?} failed: {}", node, err),
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
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
