/*
 * Renderer Module
 *
 * This module draws one frame: a triangle per boid placed by its transform,
 * plus the inner-world outline and debug text when the overlay is enabled.
 * It only reads simulation state.
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::ui;

// Unit triangle pointing along +Y, scaled by the transform
const BOID_SHAPE: [[f32; 2]; 3] = [[0.0, 1.0], [-0.6, -1.0], [0.6, -1.0]];

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(rgb(230u8, 230, 230));

    for transform in model.simulation.transforms() {
        let points = BOID_SHAPE
            .iter()
            .map(|&[x, y]| pt2(x * transform.scale.x, y * transform.scale.y));

        // Rotation is measured from the heading to +Y, so turn back by it
        draw.polygon()
            .color(rgb(51u8, 51, 51))
            .points(points)
            .xy(transform.translation)
            .rotate(-transform.rotation);
    }

    if model.show_debug {
        let params = model.simulation.params();
        draw.rect()
            .x_y(0.0, 0.0)
            .w_h(params.inner_width, params.inner_height)
            .no_fill()
            .stroke_weight(1.0)
            .stroke(rgba(0.3, 0.3, 0.3, 1.0));

        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            app.window_rect(),
            model.simulation.boids().len(),
            model.paused,
        );
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(?err, "failed to draw frame");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(?err, "failed to draw control panel");
    }
}
