//! Topology generators: lay out particles and wire them together with springs.

use crate::float::Float;
use crate::particle::Particle;
use crate::spring::SpringConstraint;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration for a quad mesh.
///
/// Particle at (col, row) has index `row * cols + col`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig<F: Float> {
    pub cols: usize,
    pub rows: usize,
    pub spacing: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> GridConfig<F> {
    pub fn new(cols: usize, rows: usize, spacing: F, stiffness: F) -> Self {
        GridConfig {
            cols,
            rows,
            spacing,
            stiffness,
            damping: F::from_f32(0.1),
        }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Number of springs the grid generator emits for these dimensions.
    pub fn spring_count(&self) -> usize {
        let (w, h) = (self.cols, self.rows);
        let w1 = w.saturating_sub(1);
        let h1 = h.saturating_sub(1);
        h * w1 + w * h1 + 2 * w1 * h1
    }
}

/// Configuration for a straight chain of particles along +x.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig<F: Float> {
    pub segments: usize,
    pub spacing: F,
    pub stiffness: F,
    pub damping: F,
}

impl<F: Float> ChainConfig<F> {
    pub fn new(segments: usize, spacing: F, stiffness: F) -> Self {
        ChainConfig {
            segments,
            spacing,
            stiffness,
            damping: F::from_f32(0.1),
        }
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }
}

/// Shapes a soft body can be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum Topology<F: Float> {
    Grid(GridConfig<F>),
    Chain(ChainConfig<F>),
}

impl<F: Float> Topology<F> {
    /// Generate particles and springs with the first particle at `origin`.
    pub fn generate(
        &self,
        origin: Vec2<F>,
    ) -> (AllocVec<Particle<F>>, AllocVec<SpringConstraint<F>>) {
        match self {
            Topology::Grid(config) => generate_grid(origin, config),
            Topology::Chain(config) => generate_chain(origin, config),
        }
    }
}

/// Build a `cols x rows` quad mesh with edge springs and both diagonals in
/// every cell.
///
/// Springs are emitted family by family (horizontal, vertical, down-right,
/// down-left), each family walking columns in the outer loop. Rest lengths are
/// measured from the generated positions.
pub fn generate_grid<F: Float>(
    origin: Vec2<F>,
    config: &GridConfig<F>,
) -> (AllocVec<Particle<F>>, AllocVec<SpringConstraint<F>>) {
    let w = config.cols;
    let h = config.rows;
    let dist = config.spacing;
    let mut particles = AllocVec::with_capacity(w * h);
    let mut pairs = AllocVec::with_capacity(config.spring_count());

    for row in 0..h {
        for col in 0..w {
            let x = origin.x + F::from_usize(col) * dist;
            let y = origin.y + F::from_usize(row) * dist;
            particles.push(Particle::new(Vec2::new(x, y)));
        }
    }

    // Horizontal: (col, row) - (col + 1, row)
    for col in 0..w.saturating_sub(1) {
        for row in 0..h {
            pairs.push((row * w + col, row * w + col + 1));
        }
    }

    // Vertical: (col, row) - (col, row + 1)
    for col in 0..w {
        for row in 0..h.saturating_sub(1) {
            pairs.push((row * w + col, (row + 1) * w + col));
        }
    }

    // Down-right diagonal: (col, row) - (col + 1, row + 1)
    for col in 0..w.saturating_sub(1) {
        for row in 0..h.saturating_sub(1) {
            pairs.push((row * w + col, (row + 1) * w + col + 1));
        }
    }

    // Down-left diagonal: (col, row) - (col - 1, row + 1)
    for col in 1..w {
        for row in 0..h.saturating_sub(1) {
            pairs.push((row * w + col, (row + 1) * w + col - 1));
        }
    }

    let springs = pairs
        .into_iter()
        .map(|(a, b)| {
            SpringConstraint::from_particles(a, b, &particles, config.stiffness, config.damping)
        })
        .collect();

    (particles, springs)
}

/// Build `segments + 1` particles in a horizontal line joined by `segments` springs.
pub fn generate_chain<F: Float>(
    origin: Vec2<F>,
    config: &ChainConfig<F>,
) -> (AllocVec<Particle<F>>, AllocVec<SpringConstraint<F>>) {
    let mut particles = AllocVec::with_capacity(config.segments + 1);
    let mut springs = AllocVec::with_capacity(config.segments);

    for i in 0..=config.segments {
        let x = origin.x + F::from_usize(i) * config.spacing;
        particles.push(Particle::new(Vec2::new(x, origin.y)));
    }

    for i in 0..config.segments {
        springs.push(SpringConstraint::from_particles(
            i,
            i + 1,
            &particles,
            config.stiffness,
            config.damping,
        ));
    }

    (particles, springs)
}
