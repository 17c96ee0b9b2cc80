//! Frame driver: owns the fabric and advances it one rendered frame at a time.

use crate::bounds::Bounds;
use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::grid::{Fabric, GridConfig};
use crate::integrator::integrate;
use crate::node::Node;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::solver::relax;
use crate::stick::Stick;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Whether the lattice will be rebuilt before the next frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClothState {
    /// Frames step the existing fabric.
    Active,
    /// The next `advance` rebuilds the fabric before stepping.
    ResetPending,
}

/// A tearable cloth inside a rectangular region.
///
/// The host owns the frame cadence: call [`advance`](Self::advance) once per
/// displayed frame, then draw from [`nodes`](Self::nodes) and
/// [`segments`](Self::segments). Tunables may be changed between frames and
/// are picked up by the next one.
///
/// ```
/// use tatter::{Cloth, GridConfig};
///
/// let mut cloth: Cloth<f32> = Cloth::new(GridConfig::new(10, 15.0), 800.0, 600.0);
/// cloth.fix_node(0);
/// cloth.fix_node(9);
/// for _ in 0..60 {
///     cloth.step();
/// }
/// assert_eq!(cloth.node_count(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    fabric: Fabric<F>,
    grid: GridConfig<F>,
    bounds: Bounds<F>,
    config: ClothConfig<F>,
    state: ClothState,
}

impl<F: Float> Cloth<F> {
    /// Weave a cloth with default tunables inside `[0, width] x [0, height]`.
    pub fn new(grid: GridConfig<F>, width: F, height: F) -> Self {
        Cloth::with_config(grid, Bounds::new(width, height), ClothConfig::new())
    }

    pub fn with_config(grid: GridConfig<F>, bounds: Bounds<F>, config: ClothConfig<F>) -> Self {
        Cloth {
            fabric: Fabric::weave(&grid),
            grid,
            bounds,
            config,
            state: ClothState::Active,
        }
    }

    /// Pin a node so it never moves. Out-of-range indices are ignored.
    ///
    /// A pending reset is carried out first so the pin lands on the fabric
    /// that the next frame steps.
    pub fn fix_node(&mut self, index: usize) {
        self.flush_pending_reset();
        self.fabric.fix_node(index);
    }

    /// Pin a node, reporting an out-of-range index.
    pub fn try_fix_node(&mut self, index: usize) -> Result<(), ClothError> {
        self.flush_pending_reset();
        self.fabric.try_fix_node(index)
    }

    pub fn fix_nodes(&mut self, indices: &[usize]) {
        for &index in indices {
            self.fix_node(index);
        }
    }

    /// Rebuild the lattice from the current grid configuration right away.
    ///
    /// Torn sticks are restored and manual pins are dropped; only the pins
    /// listed in the grid configuration survive.
    pub fn reset(&mut self) {
        self.reset_with(&mut NoOpStepObserver);
    }

    /// [`reset`](Self::reset), reporting the rebuild to `observer`.
    pub fn reset_with<O: StepObserver>(&mut self, observer: &mut O) {
        self.fabric = Fabric::weave(&self.grid);
        self.state = ClothState::Active;
        observer.on_reset(self.fabric.node_count(), self.fabric.stick_count());
    }

    fn flush_pending_reset(&mut self) {
        if self.state == ClothState::ResetPending {
            self.reset();
        }
    }

    /// Rebuild the lattice at the start of the next frame, or earlier if a
    /// node is pinned before then.
    pub fn request_reset(&mut self) {
        self.state = ClothState::ResetPending;
    }

    /// Run one frame: `accuracy - 1` substeps of relaxation then integration.
    ///
    /// A pending reset is processed first, so the frame always steps a
    /// complete lattice. The configuration is read once up front.
    pub fn advance<O: StepObserver>(&mut self, observer: &mut O) {
        if self.state == ClothState::ResetPending {
            self.reset_with(observer);
        }

        let config = self.config;
        let bounds = self.bounds;
        for substep in 0..config.substeps() {
            let (nodes, sticks) = self.fabric.split_mut();
            for pass in 0..config.iterations {
                relax(nodes, sticks, config.tear_ratio, observer);
                observer.on_relax(substep, pass);
            }

            integrate(
                nodes,
                &bounds,
                config.gravity,
                config.friction,
                config.bounce,
            );
            observer.on_integrate(substep);
        }

        observer.on_frame_complete();
    }

    /// [`advance`](Self::advance) without observation.
    pub fn step(&mut self) {
        self.advance(&mut NoOpStepObserver);
    }

    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn config_mut(&mut self) -> &mut ClothConfig<F> { &mut self.config }

    pub fn set_config(&mut self, config: ClothConfig<F>) {
        self.config = config;
    }

    /// Lattice parameters used by the next rebuild.
    pub fn grid_config(&self) -> &GridConfig<F> { &self.grid }
    pub fn grid_config_mut(&mut self) -> &mut GridConfig<F> { &mut self.grid }

    pub fn bounds(&self) -> &Bounds<F> { &self.bounds }

    pub fn set_bounds(&mut self, bounds: Bounds<F>) {
        self.bounds = bounds;
    }

    pub fn state(&self) -> ClothState { self.state }
    pub fn fabric(&self) -> &Fabric<F> { &self.fabric }
    pub fn nodes(&self) -> &[Node<F>] { self.fabric.nodes() }
    pub fn sticks(&self) -> &[Stick<F>] { self.fabric.sticks() }
    pub fn node(&self, index: usize) -> Option<&Node<F>> { self.fabric.nodes().get(index) }
    pub fn node_count(&self) -> usize { self.fabric.node_count() }
    pub fn stick_count(&self) -> usize { self.fabric.stick_count() }
    pub fn broken_count(&self) -> usize { self.fabric.broken_count() }
    pub fn positions(&self) -> AllocVec<Vec2<F>> { self.fabric.positions() }

    /// Endpoints of intact sticks, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.fabric.segments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        resets: usize,
        relaxes: usize,
        integrates: usize,
        frames: usize,
    }

    impl StepObserver for Counter {
        fn on_reset(&mut self, _nodes: usize, _sticks: usize) { self.resets += 1; }
        fn on_relax(&mut self, _substep: usize, _pass: usize) { self.relaxes += 1; }
        fn on_integrate(&mut self, _substep: usize) { self.integrates += 1; }
        fn on_frame_complete(&mut self) { self.frames += 1; }
    }

    fn cloth() -> Cloth<f32> {
        Cloth::new(GridConfig::new(3, 10.0).with_origin(Vec2::new(10.0, 10.0)), 100.0, 100.0)
    }

    #[test]
    fn frame_runs_accuracy_minus_one_substeps() {
        let mut c = cloth();
        c.config_mut().accuracy = 4;
        c.config_mut().iterations = 2;
        let mut counter = Counter::default();
        c.advance(&mut counter);
        assert_eq!(counter.integrates, 3);
        assert_eq!(counter.relaxes, 6);
        assert_eq!(counter.frames, 1);
        assert_eq!(counter.resets, 0);
    }

    #[test]
    fn accuracy_of_one_only_completes_the_frame() {
        let mut c = cloth();
        c.set_config(ClothConfig::new().with_accuracy(1));
        let before = c.positions();
        let mut counter = Counter::default();
        c.advance(&mut counter);
        assert_eq!(counter.integrates, 0);
        assert_eq!(counter.frames, 1);
        assert_eq!(c.positions(), before);
    }

    #[test]
    fn pending_reset_runs_before_substeps() {
        let mut c = cloth();
        for _ in 0..10 {
            c.step();
        }
        c.request_reset();
        assert_eq!(c.state(), ClothState::ResetPending);

        let mut counter = Counter::default();
        c.set_config(ClothConfig::new().with_accuracy(1));
        c.advance(&mut counter);
        assert_eq!(counter.resets, 1);
        assert_eq!(c.state(), ClothState::Active);
        assert_eq!(c.positions(), c.grid_config().positions());
    }

    #[test]
    fn pin_after_request_reset_survives_the_rebuild() {
        let mut c = cloth();
        for _ in 0..10 {
            c.step();
        }
        c.request_reset();
        c.fix_node(0);
        assert_eq!(c.state(), ClothState::Active);

        c.step();
        let node = c.node(0).unwrap();
        assert!(node.fixed);
        assert_eq!(node.pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn try_fix_node_after_request_reset_pins_the_new_fabric() {
        let mut c = cloth();
        c.request_reset();
        assert!(c.try_fix_node(4).is_ok());
        let mut counter = Counter::default();
        c.advance(&mut counter);
        assert_eq!(counter.resets, 0, "rebuild already happened when pinning");
        assert!(c.node(4).unwrap().fixed);
    }

    #[test]
    fn reset_with_notifies_observer() {
        let mut c = cloth();
        let mut counter = Counter::default();
        c.reset_with(&mut counter);
        assert_eq!(counter.resets, 1);
        assert_eq!(counter.frames, 0);
    }

    #[test]
    fn reset_picks_up_new_grid_parameters() {
        let mut c = cloth();
        c.grid_config_mut().side = 5;
        assert_eq!(c.node_count(), 9);
        c.reset();
        assert_eq!(c.node_count(), 25);
        assert_eq!(c.stick_count(), 40);
    }

    #[test]
    fn node_accessor_is_bounds_checked() {
        let c = cloth();
        assert!(c.node(8).is_some());
        assert!(c.node(9).is_none());
    }
}
