//! Layout tree management

use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;

use crate::element::ElementBounds;
use crate::error::LayoutError;

new_key_type! {
    pub struct LayoutNodeId;
}

/// Maps between Perch node IDs and Taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree,
    node_map: SlotMap<LayoutNodeId, NodeId>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
            node_map: SlotMap::with_key(),
        }
    }

    /// Create a new layout node with the given style
    pub fn create_node(&mut self, style: Style) -> Result<LayoutNodeId, LayoutError> {
        let taffy_node = self.taffy.new_leaf(style)?;
        Ok(self.node_map.insert(taffy_node))
    }

    /// Set the style for a node
    pub fn set_style(&mut self, id: LayoutNodeId, style: Style) {
        if let Some(&taffy_node) = self.node_map.get(id) {
            let _ = self.taffy.set_style(taffy_node, style);
        }
    }

    /// Add a child to a parent node
    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) -> Result<(), LayoutError> {
        if let (Some(&parent_node), Some(&child_node)) =
            (self.node_map.get(parent), self.node_map.get(child))
        {
            self.taffy.add_child(parent_node, child_node)?;
        }
        Ok(())
    }

    /// Compute layout for a tree rooted at the given node
    pub fn compute_layout(&mut self, root: LayoutNodeId, available_space: Size<AvailableSpace>) {
        if let Some(&taffy_node) = self.node_map.get(root) {
            let _ = self.taffy.compute_layout(taffy_node, available_space);
        }
    }

    /// Get the computed layout for a node
    pub fn get_layout(&self, id: LayoutNodeId) -> Option<&Layout> {
        self.node_map
            .get(id)
            .and_then(|&taffy_node| self.taffy.layout(taffy_node).ok())
    }

    /// Get the computed bounds for a node, offset by its parent's origin
    pub fn get_bounds(&self, id: LayoutNodeId, parent_offset: (f32, f32)) -> Option<ElementBounds> {
        self.get_layout(id)
            .map(|layout| ElementBounds::from_layout(layout, parent_offset))
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LayoutStyle;

    #[test]
    fn test_absolute_child_bounds() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(LayoutStyle::stack_root(300.0, 600.0)).unwrap();
        let child = tree
            .create_node(LayoutStyle::anchored(40.0, None, Some(16.0), Some(56.0), 56.0))
            .unwrap();
        tree.add_child(root, child).unwrap();

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(300.0),
                height: AvailableSpace::Definite(600.0),
            },
        );

        let bounds = tree.get_bounds(child, (0.0, 0.0)).unwrap();
        assert_eq!(bounds.y, 40.0);
        assert_eq!(bounds.x, 300.0 - 16.0 - 56.0);
        assert_eq!(bounds.width, 56.0);
        assert_eq!(bounds.height, 56.0);
    }

    #[test]
    fn test_stretched_child_spans_margins() {
        let mut tree = LayoutTree::new();
        let root = tree.create_node(LayoutStyle::stack_root(300.0, 600.0)).unwrap();
        let child = tree
            .create_node(LayoutStyle::anchored(0.0, Some(20.0), Some(30.0), None, 48.0))
            .unwrap();
        tree.add_child(root, child).unwrap();

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(300.0),
                height: AvailableSpace::Definite(600.0),
            },
        );

        let bounds = tree.get_bounds(child, (0.0, 0.0)).unwrap();
        assert_eq!(bounds.x, 20.0);
        assert_eq!(bounds.width, 250.0);
    }
}
