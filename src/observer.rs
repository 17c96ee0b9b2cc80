//! Step observer trait for monitoring cloth frames.

/// Hooks called by [`Cloth::advance`](crate::cloth::Cloth::advance).
///
/// Implement this to watch the simulation (debug overlays, tear counters,
/// profiling). All methods default to no-ops.
pub trait StepObserver {
    /// The lattice was rebuilt, by `advance` processing a pending reset or by
    /// `reset_with`.
    fn on_reset(&mut self, _nodes: usize, _sticks: usize) {}

    /// Called after each relaxation pass.
    fn on_relax(&mut self, _substep: usize, _pass: usize) {}

    /// A stick exceeded the tear ratio and broke.
    fn on_stick_broken(&mut self, _index: usize) {}

    /// Called after all nodes have been integrated and collided.
    fn on_integrate(&mut self, _substep: usize) {}

    /// All substeps of the frame are done.
    fn on_frame_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that reports cloth events through `ftlog`.
///
/// Tears and the resets it is handed (a pending reset run by `advance`, or
/// an explicit `reset_with`) are logged as they happen; frame and tear
/// totals are kept for the host to display.
#[cfg(feature = "logging")]
#[derive(Debug, Default)]
pub struct LogObserver {
    frames: u64,
    tears: u64,
    tears_this_frame: usize,
}

#[cfg(feature = "logging")]
impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tears(&self) -> u64 {
        self.tears
    }
}

#[cfg(feature = "logging")]
impl StepObserver for LogObserver {
    fn on_reset(&mut self, nodes: usize, sticks: usize) {
        ftlog::info!("Rebuilt cloth with {nodes} nodes and {sticks} sticks.");
    }

    fn on_stick_broken(&mut self, index: usize) {
        self.tears += 1;
        self.tears_this_frame += 1;
        ftlog::debug!("Stick {index} tore.");
    }

    fn on_frame_complete(&mut self) {
        self.frames += 1;
        if self.tears_this_frame > 0 {
            ftlog::debug!(
                "Frame {} tore {} sticks ({} total).",
                self.frames,
                self.tears_this_frame,
                self.tears
            );
            self.tears_this_frame = 0;
        }
    }
}
