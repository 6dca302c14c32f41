/*
 * Boid Module
 *
 * This module defines the Boid struct, the state of a single agent, and the
 * BoidTransform handed to the renderer once per frame. Boids carry no identity
 * beyond their index in the flock.
 */

use nannou::prelude::{vec2, Point2, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Point2,
    // Units per frame at the reference frame rate
    pub velocity: Vec2,
}

/// Read-only placement of one boid for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidTransform {
    pub translation: Vec2,
    /// Signed angle in radians from the boid's heading to +Y. Positive values
    /// mean the boid faces clockwise of +Y.
    pub rotation: f32,
    pub scale: Vec2,
}

impl Boid {
    pub fn new(position: Point2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Heading relative to the +Y reference axis, or `None` when the boid has
    /// no direction of travel.
    pub fn heading(&self) -> Option<f32> {
        if self.velocity == Vec2::ZERO || !self.velocity.is_finite() {
            return None;
        }
        Some(self.velocity.x.atan2(self.velocity.y))
    }

    // A boid without a heading is drawn facing the reference axis
    pub fn transform(&self, scale: f32) -> BoidTransform {
        BoidTransform {
            translation: self.position,
            rotation: self.heading().unwrap_or(0.0),
            scale: vec2(scale, scale),
        }
    }
}
