/*
 * Physics Module
 *
 * This module runs one frame of the flocking simulation:
 * neighbor scan -> rule application -> integration.
 *
 * Every boid reads its neighbors from the snapshot taken at the start of the
 * frame, so the outcome does not depend on the order boids are visited in.
 * Positions are integrated only after all new velocities are known.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::boid::{Boid, BoidTransform};
use crate::error::ConfigError;
use crate::flock::Flock;
use crate::neighbors::NeighborScan;
use crate::params::SimulationParams;
use crate::rules;
use crate::{BOID_SIZE, REFERENCE_FPS};

pub struct Simulation {
    flock: Flock,
    params: SimulationParams,
    scan: NeighborScan,
    rng: StdRng,
}

impl Simulation {
    /// Validates `params` and creates a randomized flock. Without a seed the
    /// generator is seeded from the operating system.
    pub fn new(params: SimulationParams, seed: Option<u64>) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let flock = Flock::new(&params, &mut rng);

        info!(boids = flock.len(), ?seed, "created flock");

        Ok(Self {
            scan: NeighborScan::with_capacity(params.num_boids),
            flock,
            params,
            rng,
        })
    }

    /// Wraps an existing flock, e.g. a hand-placed scenario.
    pub fn with_flock(flock: Flock, params: SimulationParams, seed: u64) -> Result<Self, ConfigError> {
        params.validate()?;

        Ok(Self {
            scan: NeighborScan::with_capacity(flock.len()),
            flock,
            params,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn boids(&self) -> &[Boid] {
        self.flock.boids()
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    /// Advances every boid by `delta_time` seconds of wall-clock time.
    pub fn step(&mut self, delta_time: f32) {
        step_flock(&mut self.flock, &mut self.scan, &self.params, delta_time);
    }

    /// Re-randomizes the whole population.
    pub fn reset(&mut self) {
        self.flock.randomize(&self.params, &mut self.rng);
        info!(boids = self.flock.len(), "randomized flock");
    }

    /// Replaces the parameter set between frames.
    ///
    /// Returns `Ok(true)` when the population size changed, in which case the
    /// flock has been re-randomized at the new size.
    pub fn set_params(&mut self, params: SimulationParams) -> Result<bool, ConfigError> {
        params.validate()?;

        let resized = params.num_boids != self.params.num_boids;
        self.params = params;
        debug!(?params, "applied simulation parameters");

        if resized {
            self.reset();
        }
        Ok(resized)
    }

    pub fn transforms(&self) -> impl Iterator<Item = BoidTransform> + '_ {
        self.flock.transforms(BOID_SIZE)
    }
}

/// One synchronous update of `flock`.
pub fn step_flock(flock: &mut Flock, scan: &mut NeighborScan, params: &SimulationParams, delta_time: f32) {
    let (snapshot, boids) = flock.frame_buffers();

    // Velocities first, all from the same snapshot
    for (i, boid) in boids.iter_mut().enumerate() {
        scan.run(snapshot, i, params.vision_radius, params.avoid_distance);
        boid.velocity = rules::steer(&snapshot[i], scan, params);
    }

    let time_scale = delta_time * REFERENCE_FPS;
    for boid in boids.iter_mut() {
        boid.position += boid.velocity * time_scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::{pt2, vec2};

    #[test]
    fn rejects_invalid_params() {
        let params = SimulationParams {
            min_speed: 20.0,
            ..SimulationParams::default()
        };
        assert!(matches!(
            Simulation::new(params, Some(1)),
            Err(ConfigError::SpeedRange { .. })
        ));
    }

    #[test]
    fn integration_scales_with_elapsed_time() {
        let params = SimulationParams::default();
        let flock = Flock::from_boids(vec![Boid::new(pt2(0.0, 0.0), vec2(2.0, 0.0))]);
        let mut simulation = Simulation::with_flock(flock, params, 0).unwrap();

        // One reference frame moves the boid by exactly its velocity
        simulation.step(1.0 / 60.0);
        let boid = simulation.boids()[0];
        assert!((boid.position.x - 2.0).abs() < 1e-4);
        assert_eq!(boid.position.y, 0.0);
    }

    #[test]
    fn zero_delta_time_only_updates_velocity() {
        let params = SimulationParams::default();
        let flock = Flock::from_boids(vec![Boid::new(pt2(401.0, 0.0), vec2(3.0, 0.0))]);
        let mut simulation = Simulation::with_flock(flock, params, 0).unwrap();

        simulation.step(0.0);
        let boid = simulation.boids()[0];
        assert_eq!(boid.position, pt2(401.0, 0.0));
        assert_eq!(boid.velocity, vec2(2.0, 0.0));
    }

    #[test]
    fn update_order_does_not_matter() {
        let params = SimulationParams::default();
        let a = Boid::new(pt2(0.0, 0.0), vec2(1.0, 2.0));
        let b = Boid::new(pt2(10.0, 3.0), vec2(-2.0, 1.0));
        let c = Boid::new(pt2(-5.0, 12.0), vec2(0.5, -3.0));

        let mut forward = Simulation::with_flock(Flock::from_boids(vec![a, b, c]), params, 0).unwrap();
        let mut reversed = Simulation::with_flock(Flock::from_boids(vec![c, b, a]), params, 0).unwrap();
        forward.step(0.016);
        reversed.step(0.016);

        let mut expected: Vec<Boid> = reversed.boids().to_vec();
        expected.reverse();
        for (lhs, rhs) in forward.boids().iter().zip(&expected) {
            assert!((lhs.position - rhs.position).length() < 1e-5);
            assert!((lhs.velocity - rhs.velocity).length() < 1e-5);
        }
    }

    #[test]
    fn set_params_resets_only_on_population_change() {
        let mut simulation = Simulation::new(SimulationParams::default(), Some(3)).unwrap();
        let before = simulation.boids().to_vec();

        let tweaked = SimulationParams {
            vision_radius: 50.0,
            ..SimulationParams::default()
        };
        assert_eq!(simulation.set_params(tweaked), Ok(false));
        assert_eq!(simulation.boids(), before.as_slice());

        let resized = SimulationParams {
            num_boids: 50,
            ..tweaked
        };
        assert_eq!(simulation.set_params(resized), Ok(true));
        assert_eq!(simulation.boids().len(), 50);
    }

    #[test]
    fn set_params_keeps_previous_params_on_error() {
        let mut simulation = Simulation::new(SimulationParams::default(), Some(3)).unwrap();
        let broken = SimulationParams {
            inner_width: -1.0,
            ..SimulationParams::default()
        };
        assert!(simulation.set_params(broken).is_err());
        assert_eq!(simulation.params(), &SimulationParams::default());
    }
}
