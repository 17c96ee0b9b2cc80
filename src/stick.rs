//! Sticks: rest-length links between two nodes that tear when overstretched.

use crate::float::Float;
use crate::node::Node;

/// Stretch ratio past which a stick tears.
///
/// Empirical, carried over from the hand-tuned cloth demos; it has no
/// physical derivation. Override per cloth with `ClothConfig::with_tear_ratio`.
pub const DEFAULT_TEAR_RATIO: f64 = 9.053_147_870_894_428_7;

/// What a single relaxation did to a stick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Endpoints were moved toward the rest length.
    Corrected,
    /// The stick exceeded the tear ratio during this call and is now broken.
    Torn,
    /// Nothing happened: the stick was already broken, or its endpoints coincide.
    Skipped,
}

/// A distance constraint between nodes `a` and `b`.
///
/// Endpoints are indices into the cloth's node collection; a stick never
/// owns nodes. Broken sticks stay in the collection so indices remain stable.
#[derive(Clone, Debug, PartialEq)]
pub struct Stick<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub broken: bool,
}

impl<F: Float> Stick<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Stick { a, b, rest_length, broken: false }
    }

    /// A stick whose rest length is the current distance between `a` and `b`.
    pub fn between(a: usize, b: usize, nodes: &[Node<F>]) -> Self {
        let rest_length = nodes[a].pos.distance(nodes[b].pos);
        Stick::new(a, b, rest_length)
    }

    /// Current endpoint distance.
    pub fn length(&self, nodes: &[Node<F>]) -> F {
        nodes[self.a].pos.distance(nodes[self.b].pos)
    }

    /// Move both endpoints halfway toward the rest length, or tear.
    ///
    /// A stick stretched beyond `rest_length * tear_ratio` is flagged broken
    /// and never corrects again. Pinned endpoints stay put; the free endpoint
    /// still takes only its half of the correction.
    pub fn relax(&mut self, nodes: &mut [Node<F>], tear_ratio: F) -> Relaxation {
        if self.broken {
            return Relaxation::Skipped;
        }

        let delta = nodes[self.b].pos - nodes[self.a].pos;
        let dist = delta.length();
        if dist > self.rest_length * tear_ratio {
            self.broken = true;
            return Relaxation::Torn;
        }
        if dist.is_near_zero(F::from_f64(1e-10)) {
            return Relaxation::Skipped; // degenerate
        }

        let fraction = (self.rest_length - dist) / dist / F::two();
        let offset = delta.scale(fraction);
        nodes[self.a].shift(-offset);
        nodes[self.b].shift(offset);
        Relaxation::Corrected
    }
}
