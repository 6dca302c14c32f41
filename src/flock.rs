/*
 * Flock Module
 *
 * This module owns the population of boids. It keeps a second buffer holding
 * the state at the start of the current frame, so every boid in a step reads
 * the same snapshot of its neighbors no matter the order they are updated in.
 */

use nannou::prelude::{pt2, vec2, Vec2};
use rand::Rng;

use crate::boid::{Boid, BoidTransform};
use crate::params::SimulationParams;

#[derive(Debug, Clone, Default)]
pub struct Flock {
    boids: Vec<Boid>,
    snapshot: Vec<Boid>,
}

impl Flock {
    pub fn new<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> Self {
        let mut flock = Self::default();
        flock.randomize(params, rng);
        flock
    }

    /// Builds a flock from explicit boids, mostly useful for scripted scenarios.
    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self {
            snapshot: Vec::with_capacity(boids.len()),
            boids,
        }
    }

    /// Replaces every boid with a fresh random one.
    ///
    /// Positions are uniform over the inner world, directions come from a
    /// normalized sample of the `[-1, 1]` square and speeds are uniform in
    /// `[min_speed, max_speed]`. The new population is built aside and swapped
    /// in, so nothing ever sees a half-reset flock.
    pub fn randomize<R: Rng + ?Sized>(&mut self, params: &SimulationParams, rng: &mut R) {
        let half = params.half_extents();

        let boids = (0..params.num_boids)
            .map(|_| {
                let position = pt2(rng.gen_range(-half.x..half.x), rng.gen_range(-half.y..half.y));
                let speed = rng.gen_range(params.min_speed..=params.max_speed);
                Boid::new(position, random_direction(rng) * speed)
            })
            .collect();

        self.boids = boids;
        self.snapshot.clear();
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn transforms(&self, scale: f32) -> impl Iterator<Item = BoidTransform> + '_ {
        self.boids.iter().map(move |boid| boid.transform(scale))
    }

    // Copies the live state into the snapshot and hands out both halves
    pub(crate) fn frame_buffers(&mut self) -> (&[Boid], &mut [Boid]) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(&self.boids);
        (&self.snapshot, &mut self.boids)
    }
}

// Box-then-normalize sampling; the zero vector is redrawn instead of normalized
fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let candidate = vec2(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if candidate.length_squared() > 0.0 {
            return candidate.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_flock_matches_population_size() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = SimulationParams {
            num_boids: 37,
            ..SimulationParams::default()
        };
        let flock = Flock::new(&params, &mut rng);
        assert_eq!(flock.len(), 37);
        assert!(!flock.is_empty());
    }

    #[test]
    fn randomize_resizes_to_current_params() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut flock = Flock::new(&SimulationParams::default(), &mut rng);

        let smaller = SimulationParams {
            num_boids: 10,
            ..SimulationParams::default()
        };
        flock.randomize(&smaller, &mut rng);
        assert_eq!(flock.len(), 10);
    }

    #[test]
    fn random_direction_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let direction = random_direction(&mut rng);
            assert!((direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn frame_buffers_snapshot_the_live_state() {
        let boids = vec![
            Boid::new(pt2(0.0, 0.0), vec2(1.0, 0.0)),
            Boid::new(pt2(5.0, 5.0), vec2(0.0, 1.0)),
        ];
        let mut flock = Flock::from_boids(boids.clone());

        let (snapshot, live) = flock.frame_buffers();
        live[0].position = pt2(100.0, 100.0);
        assert_eq!(snapshot, boids.as_slice());
        assert_eq!(flock.boids()[0].position, pt2(100.0, 100.0));
    }
}
