/*
 * Input Module
 *
 * This module maps keyboard input to simulation events:
 * - Escape or Q: quit once the current frame has finished
 * - Space: pause or resume stepping
 * - D: toggle the debug overlay
 * - any other key: re-randomize the flock
 */

use nannou::prelude::*;
use tracing::info;

use crate::app::Model;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Reset,
    Quit,
    TogglePause,
    ToggleDebug,
}

pub fn classify_key(key: Key) -> InputEvent {
    match key {
        Key::Escape | Key::Q => InputEvent::Quit,
        Key::Space => InputEvent::TogglePause,
        Key::D => InputEvent::ToggleDebug,
        _ => InputEvent::Reset,
    }
}

pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Typing into the control panel is not a command
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match classify_key(key) {
        InputEvent::Quit => {
            info!("quit requested");
            app.quit();
        }
        InputEvent::TogglePause => model.paused = !model.paused,
        InputEvent::ToggleDebug => model.show_debug = !model.show_debug,
        // Applied at the start of the next update, never inside a step
        InputEvent::Reset => model.reset_requested = true,
    }
}

// Forward window events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
