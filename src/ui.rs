/*
 * UI Module
 *
 * This module contains the nannou_egui control panel for editing simulation
 * parameters and the debug text overlay. The panel edits a draft copy of the
 * parameters; the app decides whether the draft is valid.
 */

use nannou::prelude::*;
use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

/// What the user asked for in this frame's panel.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiActions {
    pub reset: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    draft: &mut SimulationParams,
    show_debug: &mut bool,
    paused: &mut bool,
    debug_info: &DebugInfo,
) -> UiActions {
    let mut actions = UiActions::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut draft.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                ui.add(egui::Slider::new(&mut draft.min_speed, SimulationParams::get_speed_range()).text("Min Speed"));
                ui.add(egui::Slider::new(&mut draft.max_speed, SimulationParams::get_speed_range()).text("Max Speed"));

                if ui.button("Randomize").clicked() {
                    actions.reset = true;
                }
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut draft.vision_radius, SimulationParams::get_radius_range()).text("Vision Radius"));
                ui.add(egui::Slider::new(&mut draft.avoid_distance, SimulationParams::get_radius_range()).text("Avoid Distance"));
                ui.add(egui::Slider::new(&mut draft.centering_factor, SimulationParams::get_factor_range()).text("Centering Factor"));
                ui.add(egui::Slider::new(&mut draft.avoid_factor, SimulationParams::get_factor_range()).text("Avoid Factor"));
                ui.add(egui::Slider::new(&mut draft.match_factor, SimulationParams::get_factor_range()).text("Match Factor"));
                ui.add(egui::Slider::new(&mut draft.margin_turn_factor, SimulationParams::get_turn_factor_range()).text("Margin Turn Factor"));
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));

            ui.checkbox(show_debug, "Show Debug Info");
            ui.checkbox(paused, "Pause Simulation");
        });

    actions
}

// Draw debug information in the top-left corner
pub fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect, boids_len: usize, paused: bool) {
    let margin = 20.0;
    let line_height = 20.0;

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Step time: {:.2} ms", debug_info.step_time.as_secs_f64() * 1000.0),
        format!("Boids: {}", boids_len),
        format!("Average speed: {:.2}", debug_info.average_speed),
        if paused { "Paused".to_string() } else { String::new() },
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(BLACK)
            .font_size(14);
    }
}
