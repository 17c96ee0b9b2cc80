//! Iterative stick relaxation.

use crate::float::Float;
use crate::node::Node;
use crate::observer::StepObserver;
use crate::stick::{Relaxation, Stick};

/// One relaxation pass over `sticks` in insertion order.
///
/// Each intact stick nudges its endpoints toward its rest length; a stick
/// stretched beyond `rest_length * tear_ratio` breaks instead and is reported
/// to `observer`. Corrections are applied immediately, so later sticks see
/// positions already moved by earlier ones (Gauss-Seidel style). Repeating
/// the pass stiffens the cloth.
///
/// Returns the number of sticks that broke during this pass.
pub fn relax<F: Float, O: StepObserver>(
    nodes: &mut [Node<F>],
    sticks: &mut [Stick<F>],
    tear_ratio: F,
    observer: &mut O,
) -> usize {
    let mut torn = 0;
    for (index, stick) in sticks.iter_mut().enumerate() {
        if stick.relax(nodes, tear_ratio) == Relaxation::Torn {
            observer.on_stick_broken(index);
            torn += 1;
        }
    }
    torn
}
