//! Unit-mass particles advanced with semi-implicit Euler.

use crate::config::SimulationConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// A point mass. All particles weigh the same, so forces and accelerations
/// are interchangeable.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub acceleration: Vec2<F>,
}

impl<F: Float> Particle<F> {
    /// A particle at rest with no pending acceleration.
    pub fn new(position: Vec2<F>) -> Self {
        Particle {
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
        }
    }

    pub fn apply_acceleration(&mut self, accel: Vec2<F>) {
        self.acceleration += accel;
    }

    /// Advance by one timestep.
    ///
    /// The accumulated acceleration is added to velocity unscaled, then
    /// position moves by `velocity * dt`. Friction is applied after the move,
    /// the floor is resolved, and gravity is primed for the next step.
    pub fn update(&mut self, config: &SimulationConfig<F>) {
        self.velocity += self.acceleration;
        self.position += self.velocity.scale(config.dt);

        self.velocity = self.velocity.scale(config.friction);
        self.acceleration = Vec2::zero();

        if self.position.y >= config.floor_y {
            self.position.y = config.floor_y;
            self.velocity.y = -self.velocity.y;
        }
        self.acceleration.y = config.gravity;
    }

    /// Whether the particle is resting on (or was just clamped to) the floor.
    pub fn on_floor(&self, config: &SimulationConfig<F>) -> bool {
        self.position.y >= config.floor_y
    }
}
