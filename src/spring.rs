//! Hookean springs between two particles of the same body.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// A spring pulling particles `a` and `b` back toward their initial separation.
///
/// The endpoints are indices into the owning body's particle slice.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    rest_length: F,
    pub stiffness: F,
    /// Stored with the spring but not read by [`SpringConstraint::apply`].
    pub damping: F,
}

impl<F: Float> SpringConstraint<F> {
    /// Build a spring whose rest length is the current distance between `a` and `b`.
    pub fn from_particles(
        a: usize,
        b: usize,
        particles: &[Particle<F>],
        stiffness: F,
        damping: F,
    ) -> Self {
        let rest_length = particles[a].position.distance(particles[b].position);
        SpringConstraint { a, b, rest_length, stiffness, damping }
    }

    pub fn rest_length(&self) -> F {
        self.rest_length
    }

    /// Current distance between the endpoints.
    pub fn length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].position.distance(particles[self.b].position)
    }

    /// The acceleration this spring would add to `a`. `b` receives the negation.
    ///
    /// The direction is the separation divided by the *rest* length rather
    /// than the current length, so it is only a unit vector near rest. This
    /// overestimates the force on stretched springs and underestimates it on
    /// compressed ones; it is kept because tuned scenes depend on it.
    pub fn force(&self, particles: &[Particle<F>]) -> Vec2<F> {
        let d = particles[self.a].position - particles[self.b].position;
        let cur_dist = d.length();

        let dir = Vec2::new(d.x / self.rest_length, d.y / self.rest_length);
        let f = (self.rest_length - cur_dist) * self.stiffness;
        dir.scale(f)
    }

    /// Accumulate the spring force into both endpoints' accelerations.
    pub fn apply(&self, particles: &mut [Particle<F>]) {
        let delta = self.force(particles);
        particles[self.a].acceleration += delta;
        particles[self.b].acceleration -= delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(bx: f32, by: f32) -> [Particle<f32>; 2] {
        [
            Particle::new(Vec2::new(0.0, 0.0)),
            Particle::new(Vec2::new(bx, by)),
        ]
    }

    #[test]
    fn rest_length_from_initial_geometry() {
        let particles = pair(3.0, 4.0);
        let spring = SpringConstraint::from_particles(0, 1, &particles, 10.0, 0.1);
        assert!((spring.rest_length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn no_force_at_rest() {
        let mut particles = pair(3.0, 4.0);
        let spring = SpringConstraint::from_particles(0, 1, &particles, 10.0, 0.1);
        spring.apply(&mut particles);
        assert_eq!(particles[0].acceleration, Vec2::zero());
        assert_eq!(particles[1].acceleration, Vec2::zero());
    }

    #[test]
    fn stretched_spring_pulls_endpoints_together() {
        let mut particles = pair(10.0, 0.0);
        let spring = SpringConstraint::from_particles(0, 1, &particles, 2.0, 0.1);
        particles[1].position.x = 12.0;
        spring.apply(&mut particles);
        // d = (-12, 0), f = (10 - 12) * 2 = -4, dir = (-1.2, 0)
        assert!((particles[0].acceleration.x - 4.8).abs() < 1e-5);
        assert!((particles[1].acceleration.x + 4.8).abs() < 1e-5);
    }

    #[test]
    fn damping_does_not_change_force() {
        let mut particles = pair(10.0, 0.0);
        let stiff = SpringConstraint::from_particles(0, 1, &particles, 2.0, 0.0);
        let damped = SpringConstraint::from_particles(0, 1, &particles, 2.0, 50.0);
        particles[0].velocity = Vec2::new(-30.0, 7.0);
        particles[1].position = Vec2::new(13.0, 1.0);
        assert_eq!(stiff.force(&particles), damped.force(&particles));
    }
}
