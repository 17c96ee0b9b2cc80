//! Cloth nodes: Verlet point masses with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass in the cloth lattice.
///
/// Velocity is never stored; it is `pos - prev_pos`, the displacement over
/// the last substep.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    /// Pinned nodes are never moved by integration or relaxation.
    pub fixed: bool,
    /// Display hue in degrees. Not read by the physics.
    pub hue: F,
}

impl<F: Float> Node<F> {
    /// A free node at rest at `pos`.
    pub fn new(pos: Vec2<F>, hue: F) -> Self {
        Node {
            pos,
            prev_pos: pos,
            fixed: false,
            hue,
        }
    }

    /// Displacement over the last substep.
    pub fn velocity(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.fixed = true;
    }

    /// Nudge the node by `offset` unless it is pinned.
    pub fn shift(&mut self, offset: Vec2<F>) {
        if !self.fixed {
            self.pos = self.pos + offset;
        }
    }

    /// One Verlet step: damp the implied velocity by `friction`, advance, and
    /// add `gravity` to the vertical displacement.
    ///
    /// Returns the damped velocity (without gravity), which the boundary
    /// response reflects. Pinned nodes are left untouched and report zero.
    pub fn integrate(&mut self, friction: F, gravity: F) -> Vec2<F> {
        if self.fixed {
            return Vec2::zero();
        }
        let velocity = self.velocity().scale(friction);
        self.prev_pos = self.pos;
        self.pos = Vec2::new(self.pos.x + velocity.x, self.pos.y + velocity.y + gravity);
        velocity
    }
}
