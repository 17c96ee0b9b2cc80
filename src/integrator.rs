//! Verlet integration with boundary bounce.

use crate::bounds::Bounds;
use crate::float::Float;
use crate::node::Node;

/// Advance every free node by one substep and keep it inside `bounds`.
///
/// Each node carries its implied velocity damped by `friction`, falls by
/// `gravity`, and is then clamped to the bounds with `bounce` restitution.
/// Pinned nodes are skipped entirely.
pub fn integrate<F: Float>(
    nodes: &mut [Node<F>],
    bounds: &Bounds<F>,
    gravity: F,
    friction: F,
    bounce: F,
) {
    for node in nodes.iter_mut().filter(|n| !n.fixed) {
        let velocity = node.integrate(friction, gravity);
        bounds.collide(node, velocity, bounce);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn free_node_falls_by_gravity() {
        let mut nodes = [Node::new(Vec2::new(5.0f64, 5.0), 0.0)];
        integrate(&mut nodes, &Bounds::new(10.0, 10.0), 0.2, 0.99, 0.5);
        assert_eq!(nodes[0].pos.x, 5.0);
        assert!((nodes[0].pos.y - 5.2).abs() < 1e-12);
        assert_eq!(nodes[0].prev_pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn friction_damps_carried_motion() {
        let mut nodes = [Node::new(Vec2::new(5.0f64, 5.0), 0.0)];
        nodes[0].prev_pos = Vec2::new(4.0, 5.0);
        integrate(&mut nodes, &Bounds::new(10.0, 10.0), 0.0, 0.5, 0.5);
        assert!((nodes[0].pos.x - 5.5).abs() < 1e-12);
    }

    #[test]
    fn node_crossing_the_floor_bounces_back() {
        let mut nodes = [Node::new(Vec2::new(5.0f64, 9.5), 0.0)];
        nodes[0].prev_pos = Vec2::new(5.0, 8.5);
        integrate(&mut nodes, &Bounds::new(10.0, 10.0), 0.0, 1.0, 0.5);
        assert_eq!(nodes[0].pos.y, 10.0);
        assert_eq!(nodes[0].prev_pos.y, 10.5);

        integrate(&mut nodes, &Bounds::new(10.0, 10.0), 0.0, 1.0, 0.5);
        assert!(nodes[0].pos.y < 10.0);
    }

    #[test]
    fn pinned_node_is_left_alone() {
        let mut nodes = [Node::new(Vec2::new(20.0f32, 20.0), 0.0)];
        nodes[0].prev_pos = Vec2::new(0.0, 0.0);
        nodes[0].pin();
        integrate(&mut nodes, &Bounds::new(10.0, 10.0), 1.0, 1.0, 0.5);
        // Outside the bounds, but pinned nodes are never clamped.
        assert_eq!(nodes[0].pos, Vec2::new(20.0, 20.0));
        assert_eq!(nodes[0].prev_pos, Vec2::new(0.0, 0.0));
    }
}
