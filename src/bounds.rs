//! Axis-aligned collision region `[0, width] x [0, height]`.

use crate::error::ClothError;
use crate::float::Float;
use crate::node::Node;
use crate::vec::Vec2;

/// The box nodes bounce inside of. Its corner is always the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Bounds<F> {
    pub fn new(width: F, height: F) -> Self {
        Bounds { width, height }
    }

    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= F::zero() && p.x <= self.width && p.y >= F::zero() && p.y <= self.height
    }

    /// Reject regions with a negative or non-comparable extent.
    pub fn validate(&self) -> Result<(), ClothError> {
        if self.width >= F::zero() && self.height >= F::zero() {
            Ok(())
        } else {
            Err(ClothError::InvalidBounds)
        }
    }

    /// Clamp a freshly integrated node back inside and reflect its motion.
    ///
    /// `velocity` is the damped velocity the node was just advanced with. On
    /// each clamped axis the previous coordinate becomes
    /// `bound + velocity * bounce`, so the next step moves the node away from
    /// the wall with `bounce` of its former speed.
    pub fn collide(&self, node: &mut Node<F>, velocity: Vec2<F>, bounce: F) {
        if node.fixed {
            return;
        }
        if node.pos.x > self.width {
            node.pos.x = self.width;
            node.prev_pos.x = node.pos.x + velocity.x * bounce;
        } else if node.pos.x < F::zero() {
            node.pos.x = F::zero();
            node.prev_pos.x = node.pos.x + velocity.x * bounce;
        }
        if node.pos.y > self.height {
            node.pos.y = self.height;
            node.prev_pos.y = node.pos.y + velocity.y * bounce;
        } else if node.pos.y < F::zero() {
            node.pos.y = F::zero();
            node.prev_pos.y = node.pos.y + velocity.y * bounce;
        }
    }
}
