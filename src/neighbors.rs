/*
 * Neighbor Scan Module
 *
 * Brute-force neighbor detection. Every boid is compared against every other
 * boid each frame, which is fine at the few hundred boids this simulation
 * targets. Two independent scans are made per boid: one with the vision
 * radius for cohesion and alignment, one with the avoid distance for
 * separation.
 */

use crate::boid::Boid;

/// Collects copies of every boid other than `index` whose distance to it is
/// strictly less than `radius`. Order follows the flock order.
pub fn scan(boids: &[Boid], index: usize, radius: f32, out: &mut Vec<Boid>) {
    out.clear();

    let origin = boids[index].position;
    let radius_sq = radius * radius;

    out.extend(
        boids
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != index && origin.distance_squared(other.position) < radius_sq)
            .map(|(_, other)| *other),
    );
}

/// Reusable buffers for the two neighbor sets of one boid.
#[derive(Debug, Default)]
pub struct NeighborScan {
    pub visible: Vec<Boid>,
    pub too_close: Vec<Boid>,
}

impl NeighborScan {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visible: Vec::with_capacity(capacity),
            too_close: Vec::with_capacity(capacity),
        }
    }

    pub fn run(&mut self, boids: &[Boid], index: usize, vision_radius: f32, avoid_distance: f32) {
        scan(boids, index, vision_radius, &mut self.visible);
        scan(boids, index, avoid_distance, &mut self.too_close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::{pt2, Vec2};

    fn line_of_boids(xs: &[f32]) -> Vec<Boid> {
        xs.iter().map(|&x| Boid::new(pt2(x, 0.0), Vec2::ZERO)).collect()
    }

    #[test]
    fn excludes_self_and_far_boids() {
        let boids = line_of_boids(&[0.0, 10.0, 80.0]);
        let mut out = Vec::new();
        scan(&boids, 0, 75.0, &mut out);
        assert_eq!(out, vec![boids[1]]);
    }

    #[test]
    fn radius_is_exclusive() {
        let boids = line_of_boids(&[0.0, 75.0]);
        let mut out = Vec::new();
        scan(&boids, 0, 75.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn coincident_boids_see_each_other() {
        let boids = line_of_boids(&[3.0, 3.0]);
        let mut out = Vec::new();
        scan(&boids, 1, 1.0, &mut out);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn scans_are_independent() {
        // Separation must not depend on the boid also being visible
        let boids = line_of_boids(&[0.0, 15.0, 50.0]);
        let mut neighbors = NeighborScan::default();
        neighbors.run(&boids, 0, 10.0, 20.0);
        assert!(neighbors.visible.is_empty());
        assert_eq!(neighbors.too_close, vec![boids[1]]);
    }

    #[test]
    fn buffers_are_cleared_between_runs() {
        let boids = line_of_boids(&[0.0, 1.0, 2.0, 500.0]);
        let mut neighbors = NeighborScan::with_capacity(4);
        neighbors.run(&boids, 1, 75.0, 20.0);
        assert_eq!(neighbors.visible.len(), 2);
        neighbors.run(&boids, 3, 75.0, 20.0);
        assert!(neighbors.visible.is_empty());
        assert!(neighbors.too_close.is_empty());
    }
}
