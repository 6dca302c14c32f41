/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The simulation core (params, boid, flock, neighbors, rules, physics) has no
 * knowledge of windows or drawing; the nannou shell (app, renderer, input, ui)
 * feeds it elapsed time and consumes per-boid transforms.
 */

// Re-export key components for easier access
pub use boid::{Boid, BoidTransform};
pub use error::ConfigError;
pub use flock::Flock;
pub use params::SimulationParams;
pub use physics::Simulation;
pub use debug::{DebugInfo, FrameStats};

// Define modules
pub mod boid;
pub mod error;
pub mod flock;
pub mod neighbors;
pub mod params;
pub mod physics;
pub mod rules;
pub mod debug;
pub mod cli;
pub mod app;
pub mod input;
pub mod renderer;
pub mod ui;

// Constants
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 800;
pub const MARGIN_SIZE: u32 = 200;
pub const BOID_SIZE: f32 = 9.0;

// Velocities are expressed in units per frame at this rate
pub const REFERENCE_FPS: f32 = 60.0;
