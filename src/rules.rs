/*
 * Behavior Rules Module
 *
 * The four steering rules and the speed clamp. Each rule returns the change it
 * makes to a velocity; `steer` applies them in their fixed order:
 * 1. Cohesion: fly towards the center of visible neighbors
 * 2. Separation: move away from neighbors that are too close
 * 3. Alignment: match the average velocity of visible neighbors
 * 4. Margin turning: turn back when outside the inner world
 * followed by clamping the speed into the configured range.
 */

use nannou::prelude::{vec2, Point2, Vec2};

use crate::boid::Boid;
use crate::neighbors::NeighborScan;
use crate::params::SimulationParams;

pub fn cohesion(position: Point2, visible: &[Boid], centering_factor: f32) -> Vec2 {
    if visible.is_empty() {
        return Vec2::ZERO;
    }

    let center = visible
        .iter()
        .fold(Vec2::ZERO, |sum, other| sum + other.position)
        / visible.len() as f32;

    (center - position) * centering_factor
}

// Raw displacement, not inverse-distance weighted
pub fn separation(position: Point2, too_close: &[Boid], avoid_factor: f32) -> Vec2 {
    let push = too_close
        .iter()
        .fold(Vec2::ZERO, |sum, other| sum + (position - other.position));

    push * avoid_factor
}

pub fn alignment(velocity: Vec2, visible: &[Boid], match_factor: f32) -> Vec2 {
    if visible.is_empty() {
        return Vec2::ZERO;
    }

    let average = visible
        .iter()
        .fold(Vec2::ZERO, |sum, other| sum + other.velocity)
        / visible.len() as f32;

    (average - velocity) * match_factor
}

/// Four one-sided checks, so a boid past a corner is nudged on both axes.
pub fn margin_turn(position: Point2, half_extents: Vec2, turn_factor: f32) -> Vec2 {
    let mut turn = Vec2::ZERO;

    if position.x < -half_extents.x {
        turn.x += turn_factor;
    }
    if position.x > half_extents.x {
        turn.x -= turn_factor;
    }
    if position.y < -half_extents.y {
        turn.y += turn_factor;
    }
    if position.y > half_extents.y {
        turn.y -= turn_factor;
    }

    turn
}

/// Rescales `velocity` so its length lies in `[min_speed, max_speed]`.
///
/// A zero or NaN velocity has no direction to rescale; it is replaced by the
/// +Y reference heading at `min_speed`. A velocity whose length overflows
/// (or underflows) f32 keeps its direction.
pub fn clamp_speed(velocity: Vec2, min_speed: f32, max_speed: f32) -> Vec2 {
    if velocity.x.is_nan() || velocity.y.is_nan() || velocity == Vec2::ZERO {
        return vec2(0.0, min_speed);
    }

    let speed = velocity.length();

    if speed.is_infinite() {
        return direction(velocity) * max_speed;
    }
    if speed == 0.0 {
        return direction(velocity) * min_speed;
    }

    if speed > max_speed {
        velocity * (max_speed / speed)
    } else if speed < min_speed {
        velocity * (min_speed / speed)
    } else {
        velocity
    }
}

// Unit direction of a non-zero, non-NaN velocity whose length is not representable
fn direction(velocity: Vec2) -> Vec2 {
    let largest = velocity.x.abs().max(velocity.y.abs());

    let scaled = if largest.is_finite() {
        velocity / largest
    } else {
        let axis = |component: f32| if component.is_infinite() { component.signum() } else { 0.0 };
        vec2(axis(velocity.x), axis(velocity.y))
    };

    scaled.normalize()
}

/// Computes the next velocity of `boid` from its neighbor sets.
///
/// The boid's own velocity accumulates rule by rule, so alignment compares
/// the neighbors' average against the velocity already adjusted by cohesion
/// and separation.
pub fn steer(boid: &Boid, neighbors: &NeighborScan, params: &SimulationParams) -> Vec2 {
    let mut velocity = boid.velocity;

    velocity += cohesion(boid.position, &neighbors.visible, params.centering_factor);
    velocity += separation(boid.position, &neighbors.too_close, params.avoid_factor);
    velocity += alignment(velocity, &neighbors.visible, params.match_factor);
    velocity += margin_turn(boid.position, params.half_extents(), params.margin_turn_factor);

    clamp_speed(velocity, params.min_speed, params.max_speed)
}
