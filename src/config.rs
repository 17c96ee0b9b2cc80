//! Per-frame tunables for the cloth simulation.

use crate::error::ClothError;
use crate::float::Float;
use crate::stick::DEFAULT_TEAR_RATIO;

/// Parameters read by [`Cloth::advance`](crate::cloth::Cloth::advance) at the
/// start of every frame.
///
/// Units are per substep: `gravity` is added to each node's vertical
/// displacement once per substep, so it behaves like `g * dt²`.
///
/// # Builder Pattern
/// ```
/// use tatter::config::ClothConfig;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_gravity(0.3)
///     .with_friction(0.98)
///     .with_accuracy(6);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Downward displacement added per substep. Default: 0.2.
    pub gravity: F,
    /// Velocity retained per substep, in [0, 1]. 1.0 = no air drag. Default: 0.99.
    pub friction: F,
    /// Restitution on hitting the bounds, in [0, 1]. Default: 0.5.
    pub bounce: F,
    /// Substep control: a frame runs `accuracy - 1` substeps. Default: 4.
    pub accuracy: usize,
    /// Relaxation passes per substep. Default: 1.
    pub iterations: usize,
    /// Stretch ratio past which a stick tears. Default: [`DEFAULT_TEAR_RATIO`].
    pub tear_ratio: F,
}

impl<F: Float> ClothConfig<F> {
    pub fn new() -> Self {
        ClothConfig {
            gravity: F::from_f64(0.2),
            friction: F::from_f64(0.99),
            bounce: F::from_f64(0.5),
            accuracy: 4,
            iterations: 1,
            tear_ratio: F::from_f64(DEFAULT_TEAR_RATIO),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_bounce(mut self, bounce: F) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_accuracy(mut self, accuracy: usize) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_tear_ratio(mut self, tear_ratio: F) -> Self {
        self.tear_ratio = tear_ratio;
        self
    }

    /// Number of substeps a frame runs with this configuration.
    pub fn substeps(&self) -> usize {
        self.accuracy.saturating_sub(1)
    }

    /// Check the ranges a control panel would normally enforce.
    ///
    /// The simulation accepts anything; this is for hosts that want to reject
    /// implausible input before it reaches the cloth.
    pub fn validate(&self) -> Result<(), ClothError> {
        let unit = |v: F| v >= F::zero() && v <= F::one();
        if !unit(self.friction) {
            return Err(ClothError::InvalidFriction);
        }
        if !unit(self.bounce) {
            return Err(ClothError::InvalidBounce);
        }
        if self.accuracy < 2 {
            return Err(ClothError::InvalidAccuracy);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_tuning() {
        let c: ClothConfig<f64> = ClothConfig::default();
        assert_eq!(c.gravity, 0.2);
        assert_eq!(c.friction, 0.99);
        assert_eq!(c.bounce, 0.5);
        assert_eq!(c.accuracy, 4);
        assert_eq!(c.substeps(), 3);
        assert_eq!(c.iterations, 1);
        assert_eq!(c.tear_ratio, DEFAULT_TEAR_RATIO);
    }

    #[test]
    fn accuracy_below_two_runs_nothing() {
        assert_eq!(ClothConfig::<f32>::new().with_accuracy(1).substeps(), 0);
        assert_eq!(ClothConfig::<f32>::new().with_accuracy(0).substeps(), 0);
    }

    #[test]
    fn validate_flags_out_of_range_values() {
        let base: ClothConfig<f32> = ClothConfig::new();
        assert!(base.validate().is_ok());
        assert_eq!(base.with_friction(1.5).validate(), Err(ClothError::InvalidFriction));
        assert_eq!(base.with_bounce(-0.1).validate(), Err(ClothError::InvalidBounce));
        assert_eq!(base.with_accuracy(1).validate(), Err(ClothError::InvalidAccuracy));
        assert_eq!(base.with_friction(f32::NAN).validate(), Err(ClothError::InvalidFriction));
    }
}
