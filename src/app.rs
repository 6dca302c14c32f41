/*
 * Application Module
 *
 * This module defines the nannou model for the flocking simulation and the
 * per-frame update. Each update runs in this order:
 * 1. Control panel, which may offer new parameters or ask for a reset
 * 2. Pending parameter changes and resets, applied between steps
 * 3. One simulation step using the measured time since the last frame
 */

use std::sync::Mutex;
use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{debug, info, warn};

use crate::debug::{DebugInfo, FrameStats};
use crate::input;
use crate::params::SimulationParams;
use crate::physics::Simulation;
use crate::renderer;
use crate::ui;
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

// nannou's model constructor is a plain fn, so the simulation built in main
// is handed over through here
static PENDING_SIMULATION: Mutex<Option<Simulation>> = Mutex::new(None);

pub struct Model {
    pub simulation: Simulation,
    // Edited by the control panel, applied between frames once valid
    pub draft_params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub frame_stats: FrameStats,
    pub show_debug: bool,
    pub paused: bool,
    pub reset_requested: bool,
}

/// Opens the window and runs the frame loop until the window closes or a
/// quit key is pressed.
pub fn launch(simulation: Simulation) {
    if let Ok(mut pending) = PENDING_SIMULATION.lock() {
        *pending = Some(simulation);
    }
    nannou::app(model).update(update).run();
}

pub fn model(app: &App) -> Model {
    let simulation = PENDING_SIMULATION
        .lock()
        .ok()
        .and_then(|mut pending| pending.take())
        .expect("launch must hand over a simulation before the model is built");

    let window_id = app
        .new_window()
        .title("flocking")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to create window");

    let window = app.window(window_id).expect("window closed during setup");
    let egui = Egui::from_window(&window);

    info!(
        boids = simulation.boids().len(),
        width = WINDOW_WIDTH,
        height = WINDOW_HEIGHT,
        "entering main loop"
    );

    Model {
        draft_params: *simulation.params(),
        simulation,
        egui,
        debug_info: DebugInfo::default(),
        frame_stats: FrameStats::default(),
        show_debug: false,
        paused: false,
        reset_requested: false,
    }
}

pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    model.egui.set_elapsed_time(update.since_start);
    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.draft_params,
        &mut model.show_debug,
        &mut model.paused,
        &model.debug_info,
    );
    if actions.reset {
        model.reset_requested = true;
    }

    apply_draft_params(model);

    if model.reset_requested {
        model.simulation.reset();
        model.reset_requested = false;
    }

    if !model.paused {
        let started = Instant::now();
        model.simulation.step(update.since_last.as_secs_f32());
        model.debug_info.step_time = started.elapsed();
    }

    let boids = model.simulation.boids();
    model.debug_info.average_speed = if boids.is_empty() {
        0.0
    } else {
        boids.iter().map(|boid| boid.speed()).sum::<f32>() / boids.len() as f32
    };

    if let Some(report) = model.frame_stats.record(update.since_last) {
        debug!(
            fps = report.fps,
            frame_ms = report.mean_frame_time.as_secs_f64() * 1000.0,
            step_ms = model.debug_info.step_time.as_secs_f64() * 1000.0,
            "frame timing"
        );
    }
}

// An invalid draft is rolled back so the panel always shows live values
fn apply_draft_params(model: &mut Model) {
    if model.draft_params == *model.simulation.params() {
        return;
    }

    match model.simulation.set_params(model.draft_params) {
        Ok(resized) => {
            if resized {
                info!(boids = model.draft_params.num_boids, "population size changed");
            }
        }
        Err(err) => {
            warn!(%err, "rejected parameter change");
            model.draft_params = *model.simulation.params();
        }
    }
}
