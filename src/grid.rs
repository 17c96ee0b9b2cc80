//! Lattice construction: square grid of nodes joined by structural sticks.

use crate::error::ClothError;
use crate::float::Float;
use crate::node::Node;
use crate::stick::Stick;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Shape of the lattice a cloth is (re)built from.
///
/// Changes to these fields only take effect at the next reset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig<F: Float> {
    /// Nodes per row and per column. Default: 30.
    pub side: usize,
    /// Distance between neighbouring nodes. Default: 15.
    pub spacing: F,
    /// Position of node 0 (top-left). Default: (0, 0).
    pub origin: Vec2<F>,
    /// Hue span in degrees that node colours are spread across. Default: 100.
    pub color_range: F,
    /// Nodes pinned again after every rebuild. Default: none.
    pub pins: AllocVec<usize>,
}

impl<F: Float> GridConfig<F> {
    pub fn new(side: usize, spacing: F) -> Self {
        GridConfig {
            side,
            spacing,
            origin: Vec2::zero(),
            color_range: F::from_f64(100.0),
            pins: AllocVec::new(),
        }
    }

    /// A lattice centred horizontally in a `width x height` region and lifted
    /// 100 units above the vertical centre, leaving room to fall.
    pub fn centered(width: F, height: F, side: usize, spacing: F) -> Self {
        let extent = F::from_usize(side) * spacing;
        let origin = Vec2::new(
            (width - extent) / F::two(),
            (height - extent) / F::two() - F::from_f64(100.0),
        );
        GridConfig::new(side, spacing).with_origin(origin)
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_color_range(mut self, color_range: F) -> Self {
        self.color_range = color_range;
        self
    }

    pub fn with_pins(mut self, pins: &[usize]) -> Self {
        self.pins = pins.to_vec();
        self
    }

    /// Row-major node positions of the regular lattice.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        let mut positions = AllocVec::with_capacity(self.side * self.side);
        for row in 0..self.side {
            let y = self.origin.y + F::from_usize(row) * self.spacing;
            for col in 0..self.side {
                let x = self.origin.x + F::from_usize(col) * self.spacing;
                positions.push(Vec2::new(x, y));
            }
        }
        positions
    }

    /// Reject lattices that would build degenerate cloth.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.side < 2 {
            return Err(ClothError::InvalidSide);
        }
        if !(self.spacing > F::zero() && self.spacing.is_finite()) {
            return Err(ClothError::InvalidSpacing);
        }
        Ok(())
    }
}

impl<F: Float> Default for GridConfig<F> {
    fn default() -> Self {
        GridConfig::new(30, F::from_f64(15.0))
    }
}

/// The node and stick collections of one cloth.
///
/// Sticks refer to nodes by index, so the whole fabric can be dropped and
/// rebuilt without dangling references.
#[derive(Clone, Debug, Default)]
pub struct Fabric<F: Float> {
    nodes: AllocVec<Node<F>>,
    sticks: AllocVec<Stick<F>>,
    side: usize,
}

impl<F: Float> Fabric<F> {
    /// Build the regular lattice described by `config` and apply its pins.
    pub fn weave(config: &GridConfig<F>) -> Self {
        let mut fabric = Fabric::stitch(config.side, &config.positions(), config.color_range);
        for &index in &config.pins {
            fabric.fix_node(index);
        }
        fabric
    }

    /// Join row-major `positions` into a lattice `side` nodes wide.
    ///
    /// Every node links to its left neighbour and to the node above it; rest
    /// lengths are the distances in `positions`, so irregular layouts keep
    /// their shape. Only complete rows are used.
    ///
    /// Node at (col, row) has index `row * side + col`.
    pub fn stitch(side: usize, positions: &[Vec2<F>], color_range: F) -> Self {
        let rows = if side == 0 { 0 } else { (positions.len() / side).min(side) };
        let count = side * rows;
        let mut nodes = AllocVec::with_capacity(count);
        let mut sticks = AllocVec::with_capacity(2 * count);

        for row in 0..rows {
            for col in 0..side {
                let index = row * side + col;
                let hue = F::from_usize(index).remap(
                    F::zero(),
                    F::from_usize(count),
                    F::zero(),
                    color_range,
                );
                nodes.push(Node::new(positions[index], hue));

                if col > 0 {
                    sticks.push(Stick::between(index - 1, index, &nodes));
                }
                if row > 0 {
                    sticks.push(Stick::between(index - side, index, &nodes));
                }
            }
        }

        Fabric { nodes, sticks, side: if rows == 0 { 0 } else { side } }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.side + col
    }

    /// Pin a node. Out-of-range indices are ignored.
    pub fn fix_node(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pin();
        }
    }

    pub fn try_fix_node(&mut self, index: usize) -> Result<(), ClothError> {
        let count = self.nodes.len();
        match self.nodes.get_mut(index) {
            Some(node) => {
                node.pin();
                Ok(())
            }
            None => Err(ClothError::NodeOutOfBounds { index, count }),
        }
    }

    /// Both collections at once, for the passes that read sticks and move nodes.
    pub(crate) fn split_mut(&mut self) -> (&mut [Node<F>], &mut [Stick<F>]) {
        (&mut self.nodes, &mut self.sticks)
    }

    pub fn nodes(&self) -> &[Node<F>] { &self.nodes }
    pub fn sticks(&self) -> &[Stick<F>] { &self.sticks }
    pub fn side(&self) -> usize { self.side }
    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn stick_count(&self) -> usize { self.sticks.len() }

    pub fn broken_count(&self) -> usize {
        self.sticks.iter().filter(|s| s.broken).count()
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    /// Endpoints of every intact stick, in stick order.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.sticks
            .iter()
            .filter(|s| !s.broken)
            .map(|s| (self.nodes[s.a].pos, self.nodes[s.b].pos))
    }
}
