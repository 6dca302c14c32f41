/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * tunable constants of the flocking model. A parameter set is validated once
 * before it reaches the simulation and is never modified during a step.
 */

use nannou::prelude::{vec2, Vec2};

use crate::error::ConfigError;
use crate::{MARGIN_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    // Size of the region boids are steered back into, centered on the origin
    pub inner_width: f32,
    pub inner_height: f32,
    pub vision_radius: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub centering_factor: f32,
    pub avoid_distance: f32,
    pub avoid_factor: f32,
    pub match_factor: f32,
    pub margin_turn_factor: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 400,
            inner_width: (WINDOW_WIDTH - MARGIN_SIZE * 2) as f32,
            inner_height: (WINDOW_HEIGHT - MARGIN_SIZE * 2) as f32,
            vision_radius: 75.0,
            min_speed: 1.0,
            max_speed: 10.0,
            centering_factor: 0.005,
            avoid_distance: 20.0,
            avoid_factor: 0.05,
            match_factor: 0.05,
            margin_turn_factor: 1.0,
        }
    }
}

impl SimulationParams {
    /// Checks every invariant the rules rely on.
    ///
    /// `avoid_distance <= vision_radius` is the usual setup but is not
    /// required: separation runs its own scan.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_boids == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        // Written as negated comparisons so NaN is rejected too
        if !(self.inner_width > 0.0 && self.inner_height > 0.0)
            || !self.inner_width.is_finite()
            || !self.inner_height.is_finite()
        {
            return Err(ConfigError::EmptyWorld {
                width: self.inner_width,
                height: self.inner_height,
            });
        }

        if !(self.min_speed >= 0.0 && self.max_speed >= 0.0) || !self.max_speed.is_finite() {
            return Err(ConfigError::NegativeSpeed {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        let non_negative = [
            ("vision_radius", self.vision_radius),
            ("centering_factor", self.centering_factor),
            ("avoid_distance", self.avoid_distance),
            ("avoid_factor", self.avoid_factor),
            ("match_factor", self.match_factor),
            ("margin_turn_factor", self.margin_turn_factor),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ConfigError::InvalidValue { name, value });
            }
        }

        Ok(())
    }

    pub fn half_extents(&self) -> Vec2 {
        vec2(self.inner_width * 0.5, self.inner_height * 0.5)
    }

    // Parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn get_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=30.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.2
    }

    pub fn get_turn_factor_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }
}
