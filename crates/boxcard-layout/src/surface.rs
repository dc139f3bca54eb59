//! Drawing surface contract and a recording implementation.

use boxcard_graphics::DrawOp;

use crate::{Geometry, InstructionNode};

/// Trait implemented by anything the walker can paint into.
pub trait DrawSurface {
    /// Executes one draw operation for a node placed at `geometry`.
    fn draw(&mut self, geometry: &Geometry, op: &DrawOp);

    /// Called once per node, before any of its descendants.
    ///
    /// The default runs the node's operations in declaration order.
    fn draw_node(&mut self, node: &InstructionNode, geometry: &Geometry) {
        for op in &node.draw {
            self.draw(geometry, op);
        }
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn draw(&mut self, geometry: &Geometry, op: &DrawOp) {
        (**self).draw(geometry, op);
    }

    fn draw_node(&mut self, node: &InstructionNode, geometry: &Geometry) {
        (**self).draw_node(node, geometry);
    }
}

/// A node visit captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedNode {
    pub label: Option<String>,
    pub geometry: Geometry,
}

/// A draw operation captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedOp {
    /// Index into [`RecordingSurface::nodes`] of the node that issued it;
    /// `None` for operations drawn directly, outside any node visit.
    pub node: Option<usize>,
    pub geometry: Geometry,
    pub op: DrawOp,
}

/// Surface that rasterizes nothing and remembers every visit in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    nodes: Vec<RecordedNode>,
    operations: Vec<RecordedOp>,
    visiting: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited nodes in draw order.
    pub fn nodes(&self) -> &[RecordedNode] {
        &self.nodes
    }

    /// Draw operations in submission order.
    pub fn operations(&self) -> &[RecordedOp] {
        &self.operations
    }

    /// Labels of visited nodes in draw order; unlabeled nodes are skipped.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|node| node.label.as_deref())
            .collect()
    }

    /// Geometry of the first visited node carrying `label`.
    pub fn geometry_of(&self, label: &str) -> Option<&Geometry> {
        self.nodes
            .iter()
            .find(|node| node.label.as_deref() == Some(label))
            .map(|node| &node.geometry)
    }

    /// Consumes the surface and yields the node geometries in draw order.
    pub fn into_geometries(self) -> Vec<Geometry> {
        self.nodes.into_iter().map(|node| node.geometry).collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw(&mut self, geometry: &Geometry, op: &DrawOp) {
        self.operations.push(RecordedOp {
            node: self.visiting,
            geometry: *geometry,
            op: op.clone(),
        });
    }

    fn draw_node(&mut self, node: &InstructionNode, geometry: &Geometry) {
        self.nodes.push(RecordedNode {
            label: node.label.clone(),
            geometry: *geometry,
        });
        self.visiting = Some(self.nodes.len() - 1);
        for op in &node.draw {
            self.draw(geometry, op);
        }
        self.visiting = None;
    }
}
