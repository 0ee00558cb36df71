use std::{cell::RefCell, rc::Rc};

use egui::{include_image, Image, Rect, Response, Vec2};
use walkers::{Plugin, Projector};

use crate::{state::SelectionState, types::PoiMarker};

/// Draws one clickable pin per POI marker. Clicking a pin toggles its
/// selection, which is what opens and closes the detail view.
pub struct Pois<'a> {
    markers: &'a [PoiMarker],
    selection_state: Rc<RefCell<SelectionState>>,
}

impl<'a> Pois<'a> {
    pub fn new(markers: &'a [PoiMarker], selection_state: Rc<RefCell<SelectionState>>) -> Self {
        Self {
            markers,
            selection_state,
        }
    }
}

impl Plugin for Pois<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for marker in self.markers {
            marker.draw(ui, projector, &mut self.selection_state.borrow_mut());
        }
    }
}

impl PoiMarker {
    fn draw(&self, ui: &mut egui::Ui, projector: &Projector, selection_state: &mut SelectionState) {
        let screen_position = projector.project(self.position);

        let symbol_size = Vec2::new(30.0, 30.0);

        // The pin tip points at the projected position, so the image sits
        // above it while the clickable area stays centered on it.
        let rect = {
            let min_pos =
                screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y - 15.0);
            Rect::from_min_size(min_pos, symbol_size)
        };

        let clickable_area = Rect::from_center_size(screen_position.to_pos2(), symbol_size);

        let response = ui.allocate_rect(clickable_area, egui::Sense::click());

        let image = if response.hovered() {
            Image::new(include_image!(r"../../pin-poi-selected.svg"))
        } else {
            Image::new(include_image!(r"../../pin-poi.svg"))
        }
        .fit_to_exact_size(symbol_size);

        ui.put(rect, image);

        let response = response.on_hover_text(format!("{}\n{}", self.title, self.description));

        if response.clicked() {
            selection_state.toggle_poi_selection(self);
        }
    }
}
