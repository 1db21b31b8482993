//! Simulation tuning: timestep, friction, gravity, floor and point size.

use crate::error::PhysicsError;
use crate::float::Float;

/// Constants shared by every particle of a simulation.
///
/// Defaults match a 512x512 pixel surface with the floor on its bottom edge.
///
/// # Builder Pattern
/// ```
/// use springmesh::config::SimulationConfig;
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_dt(0.002)
///     .with_friction(0.99)
///     .with_gravity(9.81)
///     .with_floor(480.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Fixed timestep used to advance positions. Default: 0.003.
    pub dt: F,
    /// Velocity multiplier applied every step, on both axes. Default: 0.994.
    ///
    /// [`SimulationConfig::validate`] accepts `[0, 1)`; 1.0 would leave motion
    /// undamped.
    pub friction: F,
    /// Downward (+y) acceleration primed after every step. Default: 4.905.
    pub gravity: F,
    /// Y coordinate of the floor. Particles at or below it bounce. Default: 512.
    pub floor_y: F,
    /// Radius of the disc drawn for each particle. Default: 4.
    pub point_radius: i32,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            dt: F::from_f32(0.003),
            friction: F::from_f32(0.994),
            gravity: F::from_f32(9.81 / 2.0),
            floor_y: F::from_f32(512.0),
            point_radius: 4,
        }
    }

    /// Set the integration timestep.
    pub fn with_dt(mut self, dt: F) -> Self {
        self.dt = dt;
        self
    }

    /// Set the per-step velocity multiplier.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the gravity constant (positive is downward).
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the floor height.
    pub fn with_floor(mut self, floor_y: F) -> Self {
        self.floor_y = floor_y;
        self
    }

    /// Set the particle draw radius.
    pub fn with_point_radius(mut self, radius: i32) -> Self {
        self.point_radius = radius;
        self
    }

    /// Check the values for obvious mistakes.
    ///
    /// Stepping never calls this; it is for callers that take tuning from
    /// user input.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.dt.is_finite() || self.dt <= F::zero() {
            return Err(PhysicsError::InvalidTimestep);
        }
        if !self.friction.is_finite() || self.friction < F::zero() || self.friction >= F::one() {
            return Err(PhysicsError::InvalidFriction);
        }
        if !self.gravity.is_finite() || !self.floor_y.is_finite() {
            return Err(PhysicsError::NonFiniteParameter);
        }
        if self.point_radius < 0 {
            return Err(PhysicsError::InvalidPointRadius);
        }
        Ok(())
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
