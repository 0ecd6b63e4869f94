//! The contract between reorder behaviors and whatever renders the elements.

use linktab_core::math::Vec2;

use crate::tree::NodeId;

/// Layout rectangle of an element, relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LayoutRect {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }
}

/// Synchronous layout measurement and visual mutation.
///
/// Measurement takes `&mut self` because a read may have to flush pending
/// writes through the layout engine first; a read always observes every
/// write made before it.
///
/// Unknown or detached nodes measure as zero.
pub trait LayoutHost {
    /// Parent of `node`, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Children of `node` in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Left edge of `node` relative to its parent.
    fn offset_left(&mut self, node: NodeId) -> f32;

    /// Inner width of `node`.
    fn client_width(&mut self, node: NodeId) -> f32;

    /// Position `node` at `left` pixels from its parent's left edge.
    ///
    /// `0.0` returns the node to normal flow.
    fn set_left(&mut self, node: NodeId, left: f32);

    /// Set the right margin of `node`.
    fn set_margin_right(&mut self, node: NodeId, margin: f32);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;
}
