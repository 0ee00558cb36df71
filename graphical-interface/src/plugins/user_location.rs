use egui::{Color32, Response, Stroke};
use walkers::{Plugin, Projector};

use crate::types::CircleOverlay;

/// Draws the user's own position indicator together with the fixed-radius
/// translucent emphasis circle around it.
pub struct UserLocation<'a> {
    emphasis: &'a CircleOverlay,
}

impl<'a> UserLocation<'a> {
    pub fn new(emphasis: &'a CircleOverlay) -> Self {
        Self { emphasis }
    }
}

impl Plugin for UserLocation<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let overlay = self.emphasis;

        let center = projector.project(overlay.center).to_pos2();
        let pixels_per_meter = projector.scale_pixel_per_meter(overlay.center);
        let radius = overlay.radius_meters * pixels_per_meter;

        let painter = ui.painter();
        painter.circle(center, radius, overlay.fill, overlay.stroke);

        // The position indicator itself: a solid dot with a white rim.
        painter.circle(
            center,
            7.0,
            Color32::from_rgb(0, 122, 255),
            Stroke::new(2.0, Color32::WHITE),
        );
    }
}
