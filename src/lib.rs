//! Mass-spring soft bodies for 2D games and toys.
//!
//! `springmesh` models a deformable body as unit-mass particles joined by
//! Hookean springs. Each frame every spring accumulates its force into its two
//! endpoints, then every particle is advanced with semi-implicit Euler, bounced
//! off a floor, and primed with gravity for the next frame.
//!
//! # Features
//!
//! - **Grid soft bodies**: edge springs plus both diagonals in every cell
//! - **Chains**: a line of particles for ropes and strings
//! - **Explicit tuning**: timestep, friction, gravity and floor live in `SimulationConfig`
//! - **Rendering**: draw through any `Surface`; a clipped `Framebuffer` is included
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use springmesh::{Framebuffer, GridConfig, NoOpStepObserver, RenderStyle, SimulationConfig, SoftBody, Vec2};
//!
//! let config = SimulationConfig::<f32>::new();
//! let mut body = SoftBody::grid(Vec2::new(156.0, 30.0), GridConfig::new(5, 18, 17.0, 50.0));
//! body.set_velocity(0, Vec2::new(1200.0, 0.0)).unwrap();
//!
//! let mut frame = Framebuffer::new(512, 512);
//! for _ in 0..10 {
//!     body.step(&config, &mut NoOpStepObserver);
//!     frame.clear();
//!     body.render(&mut frame, &RenderStyle::from_config(&config));
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod topology;
pub mod softbody;
pub mod surface;
pub mod framebuffer;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use spring::SpringConstraint;
pub use topology::{Topology, GridConfig, ChainConfig};
pub use softbody::SoftBody;
pub use surface::{Surface, RenderStyle, Color};
pub use framebuffer::Framebuffer;
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver, LogStepObserver};
pub use error::PhysicsError;
