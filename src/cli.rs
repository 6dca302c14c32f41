/*
 * Command Line Module
 *
 * Every simulation constant can be overridden from the command line. Unset
 * flags keep the defaults from SimulationParams.
 */

use clap::Parser;

use crate::params::SimulationParams;

#[derive(Parser, Debug, Clone)]
#[command(name = "flocking", version, about = "Real-time boid flocking simulation")]
pub struct Cli {
    /// Number of boids in the flock
    #[arg(long)]
    pub boids: Option<usize>,

    /// Width of the region boids are steered back into
    #[arg(long)]
    pub inner_width: Option<f32>,

    /// Height of the region boids are steered back into
    #[arg(long)]
    pub inner_height: Option<f32>,

    /// Distance within which neighbors count for cohesion and alignment
    #[arg(long)]
    pub vision: Option<f32>,

    #[arg(long)]
    pub min_speed: Option<f32>,

    #[arg(long)]
    pub max_speed: Option<f32>,

    #[arg(long)]
    pub centering_factor: Option<f32>,

    /// Distance below which neighbors push each other apart
    #[arg(long)]
    pub avoid_distance: Option<f32>,

    #[arg(long)]
    pub avoid_factor: Option<f32>,

    #[arg(long)]
    pub match_factor: Option<f32>,

    #[arg(long)]
    pub margin_turn_factor: Option<f32>,

    /// Seed for reproducible initial flocks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Applies the given overrides on top of the default parameters. The
    /// result is not validated here.
    pub fn params(&self) -> SimulationParams {
        let defaults = SimulationParams::default();

        SimulationParams {
            num_boids: self.boids.unwrap_or(defaults.num_boids),
            inner_width: self.inner_width.unwrap_or(defaults.inner_width),
            inner_height: self.inner_height.unwrap_or(defaults.inner_height),
            vision_radius: self.vision.unwrap_or(defaults.vision_radius),
            min_speed: self.min_speed.unwrap_or(defaults.min_speed),
            max_speed: self.max_speed.unwrap_or(defaults.max_speed),
            centering_factor: self.centering_factor.unwrap_or(defaults.centering_factor),
            avoid_distance: self.avoid_distance.unwrap_or(defaults.avoid_distance),
            avoid_factor: self.avoid_factor.unwrap_or(defaults.avoid_factor),
            match_factor: self.match_factor.unwrap_or(defaults.match_factor),
            margin_turn_factor: self.margin_turn_factor.unwrap_or(defaults.margin_turn_factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_defaults() {
        let cli = Cli::try_parse_from(["flocking"]).unwrap();
        assert_eq!(cli.params(), SimulationParams::default());
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn flags_override_individual_params() {
        let cli = Cli::try_parse_from([
            "flocking",
            "--boids",
            "120",
            "--vision",
            "40",
            "--min-speed",
            "2.5",
            "--seed",
            "42",
        ])
        .unwrap();

        let params = cli.params();
        assert_eq!(params.num_boids, 120);
        assert_eq!(params.vision_radius, 40.0);
        assert_eq!(params.min_speed, 2.5);
        assert_eq!(params.max_speed, SimulationParams::default().max_speed);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn inverted_speeds_parse_but_fail_validation() {
        let cli = Cli::try_parse_from(["flocking", "--min-speed", "11"]).unwrap();
        assert!(cli.params().validate().is_err());
    }
}
