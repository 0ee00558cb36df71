use egui::{Align2, RichText, Ui, Window};
use walkers::MapMemory;

/// Zoom controls in the lower-left corner of the map.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Zoom")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10.0, -10.0])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }
                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Recenter affordance, shown once the user has dragged the map away from
/// their own position.
pub fn recenter(ui: &Ui, map_memory: &mut MapMemory) {
    if map_memory.detached().is_none() {
        return;
    }

    Window::new("Recenter")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ui.ctx(), |ui| {
            if ui.button(RichText::new("📍 my location").heading()).clicked() {
                map_memory.follow_my_position();
            }
        });
}
