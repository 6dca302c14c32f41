/*
 * Error Module
 *
 * Errors raised when a parameter set breaks one of the simulation invariants.
 * These are only ever produced at startup or when an edited parameter set is
 * offered to a running simulation; the frame loop itself cannot fail.
 */

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("minimum speed {min} exceeds maximum speed {max}")]
    SpeedRange { min: f32, max: f32 },

    #[error("speed limits must be non-negative (min {min}, max {max})")]
    NegativeSpeed { min: f32, max: f32 },

    #[error("world dimensions must be positive, got {width}x{height}")]
    EmptyWorld { width: f32, height: f32 },

    #[error("population must contain at least one boid")]
    EmptyPopulation,

    /// A radius or factor that is negative or not a finite number.
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidValue { name: &'static str, value: f32 },
}
