//! Mass-spring soft body: a fixed set of particles wired together by springs.

use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::spring::SpringConstraint;
use crate::surface::{RenderStyle, Surface};
use crate::topology::{ChainConfig, GridConfig, Topology};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A deformable body.
///
/// Particles are stored in generation order (row-major for grids) and never
/// added or removed after construction, so the springs' particle indices stay
/// valid for the life of the body.
#[derive(Clone, Debug)]
pub struct SoftBody<F: Float> {
    particles: AllocVec<Particle<F>>,
    springs: AllocVec<SpringConstraint<F>>,
}

impl<F: Float> SoftBody<F> {
    /// Build a body from a topology with its first particle at `origin`.
    pub fn from_topology(origin: Vec2<F>, topology: &Topology<F>) -> Self {
        let (particles, springs) = topology.generate(origin);
        log::debug!(
            "built soft body: {} particles, {} springs",
            particles.len(),
            springs.len()
        );
        SoftBody { particles, springs }
    }

    /// A `cols x rows` quad mesh with both diagonals in every cell.
    pub fn grid(origin: Vec2<F>, config: GridConfig<F>) -> Self {
        Self::from_topology(origin, &Topology::Grid(config))
    }

    /// A horizontal chain of `segments` springs.
    pub fn chain(origin: Vec2<F>, config: ChainConfig<F>) -> Self {
        Self::from_topology(origin, &Topology::Chain(config))
    }

    /// Accumulate every spring's force into its endpoints.
    ///
    /// Must run before [`SoftBody::integrate`] in a frame.
    pub fn apply_forces(&mut self) {
        for s in self.springs.iter() {
            s.apply(&mut self.particles);
        }
    }

    /// Advance every particle by one timestep.
    pub fn integrate(&mut self, config: &SimulationConfig<F>) {
        for p in self.particles.iter_mut() {
            p.update(config);
        }
    }

    /// One frame of physics: forces, then integration.
    pub fn step<O: StepObserver>(&mut self, config: &SimulationConfig<F>, observer: &mut O) {
        self.apply_forces();
        observer.on_forces_applied(self.springs.len());

        self.integrate(config);
        observer.on_integrate(self.particles.len());

        observer.on_step_complete();
    }

    /// Draw springs as lines, then particles as discs on top of them.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, style: &RenderStyle) {
        for s in self.springs.iter() {
            let a = self.particles[s.a].position;
            let b = self.particles[s.b].position;
            surface.draw_line(
                a.x.to_i32(),
                a.y.to_i32(),
                b.x.to_i32(),
                b.y.to_i32(),
                style.spring_color,
            );
        }
        for p in self.particles.iter() {
            surface.draw_filled_circle(
                p.position.x.to_i32(),
                p.position.y.to_i32(),
                style.point_radius,
                style.particle_color,
            );
        }
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn springs(&self) -> &[SpringConstraint<F>] {
        &self.springs
    }

    /// # Panics
    ///
    /// Panics if `index >= particle_count()`. Use
    /// [`SoftBody::try_particle_mut`] for a checked lookup.
    pub fn particle(&self, index: usize) -> &Particle<F> {
        &self.particles[index]
    }

    pub fn try_particle_mut(&mut self, index: usize) -> Result<&mut Particle<F>, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
    }

    /// Seed an initial velocity, e.g. to fling one corner of the body.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec2<F>) -> Result<(), PhysicsError> {
        self.try_particle_mut(index)?.velocity = velocity;
        Ok(())
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.position).collect()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Average particle position.
    pub fn centroid(&self) -> Vec2<F> {
        if self.particles.is_empty() {
            return Vec2::zero();
        }
        let n = F::from_usize(self.particles.len());
        let mut sum = Vec2::zero();
        for p in &self.particles {
            sum += p.position;
        }
        sum.scale(F::one() / n)
    }

    /// Sum of `|v|² / 2` over all (unit-mass) particles.
    pub fn kinetic_energy(&self) -> F {
        let mut total = F::zero();
        for p in &self.particles {
            total = total + p.velocity.length_sq() * F::half();
        }
        total
    }

    /// Largest relative deviation `|length - rest| / rest` over all springs.
    ///
    /// Springs with zero rest length are skipped.
    pub fn max_strain(&self) -> F {
        let mut worst = F::zero();
        for s in &self.springs {
            let rest = s.rest_length();
            if rest.is_near_zero(F::from_f32(1e-12)) {
                continue;
            }
            let strain = ((s.length(&self.particles) - rest) / rest).abs();
            worst = worst.max(strain);
        }
        worst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_grid() {
        let body = SoftBody::grid(Vec2::new(0.0f32, 0.0), GridConfig::new(2, 2, 10.0, 50.0));
        assert_eq!(body.particle_count(), 4);
        assert_eq!(body.spring_count(), 6);
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mut body = SoftBody::grid(Vec2::new(0.0f32, 0.0), GridConfig::new(2, 2, 10.0, 50.0));
        assert_eq!(
            body.set_velocity(4, Vec2::new(1.0, 0.0)),
            Err(PhysicsError::ParticleOutOfBounds { index: 4, count: 4 })
        );
        assert!(body.set_velocity(3, Vec2::new(1.0, 0.0)).is_ok());
        assert_eq!(body.particle(3).velocity, Vec2::new(1.0, 0.0));
    }

    #[test]
    #[should_panic]
    fn particle_index_past_end_panics() {
        let body = SoftBody::grid(Vec2::new(0.0f32, 0.0), GridConfig::new(2, 2, 10.0, 50.0));
        body.particle(4);
    }

    #[test]
    fn centroid_of_grid() {
        let body = SoftBody::grid(Vec2::new(3.0f64, 4.0), GridConfig::new(3, 3, 1.0, 1.0));
        let c = body.centroid();
        assert!((c.x - 4.0).abs() < 1e-12, "centroid.x = {}", c.x);
        assert!((c.y - 5.0).abs() < 1e-12, "centroid.y = {}", c.y);
    }

    #[test]
    fn strain_is_zero_at_rest() {
        let body = SoftBody::grid(Vec2::new(0.0f32, 0.0), GridConfig::new(4, 4, 7.0, 1.0));
        assert_eq!(body.max_strain(), 0.0);
        assert_eq!(body.kinetic_energy(), 0.0);
    }
}
