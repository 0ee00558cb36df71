use std::{cell::RefCell, rc::Rc, time::Duration};

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use location::{Coordinate, LocationGate, LocationState};

use crate::{
    plugins,
    state::{SelectionState, ViewState},
    store::PoiStore,
    types::MapScene,
    widgets::WidgetPoi,
    windows,
};

const LOADING_POLL_MS: u64 = 100;

/// The map screen.
///
/// Polls the location gate each frame: a spinner while the fix is being
/// acquired, a plain message when no location is available, the map once a
/// fix arrives. The scene (viewport, emphasis circle, markers) is composed
/// once per fix and handed to the plugins to draw.
pub struct TrailApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    selection_state: Rc<RefCell<SelectionState>>,
    view_state: ViewState,
    poi_widget: Option<WidgetPoi>,
    store: PoiStore,
    gate: LocationGate,
    scene: Option<MapScene>,
}

impl TrailApp {
    /// Creates the screen, loading the POI list from the store.
    pub fn new(egui_ctx: Context, mut store: PoiStore, gate: LocationGate) -> Self {
        install_image_loaders(&egui_ctx);

        let mut view_state = ViewState::new(vec![]);
        view_state.update_pois(&mut store);

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: MapMemory::default(),
            selection_state: Rc::new(RefCell::new(SelectionState::new())),
            view_state,
            poi_widget: None,
            store,
            gate,
            scene: None,
        }
    }

    /// Composes the scene for `fix` if it is not the one already on screen,
    /// and snaps the map zoom to the scene's viewport.
    fn ensure_scene(&mut self, fix: &Coordinate) {
        let center = Position::from_lat_lon(fix.latitude, fix.longitude);
        if self.scene.as_ref().map(|scene| scene.viewport.center) != Some(center) {
            let scene = MapScene::compose(fix, &self.view_state.pois);
            let _ = self.map_memory.set_zoom(scene.viewport.zoom());
            self.scene = Some(scene);
        }
    }
}

impl eframe::App for TrailApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        match self.gate.state() {
            LocationState::Loading => {
                ctx.request_repaint_after(Duration::from_millis(LOADING_POLL_MS));

                egui::CentralPanel::default()
                    .frame(rimless)
                    .show(ctx, |ui| {
                        ui.centered_and_justified(|ui| {
                            ui.add(egui::Spinner::new().size(40.0));
                        });
                    });
            }
            LocationState::Unavailable => {
                egui::CentralPanel::default()
                    .frame(rimless)
                    .show(ctx, |ui| {
                        ui.centered_and_justified(|ui| {
                            ui.label(egui::RichText::new("No location available").size(18.0));
                        });
                    });
            }
            LocationState::Ready(fix) => {
                self.ensure_scene(&fix);

                egui::CentralPanel::default()
                    .frame(rimless)
                    .show(ctx, |ui| {
                        let scene = match self.scene.as_ref() {
                            Some(scene) => scene,
                            None => return,
                        };

                        let tiles = self.tiles.as_mut();

                        let poi_plugin =
                            plugins::Pois::new(&scene.markers, self.selection_state.clone());
                        let user_plugin = plugins::UserLocation::new(&scene.emphasis);

                        let map = Map::new(Some(tiles), &mut self.map_memory, scene.viewport.center)
                            .with_plugin(user_plugin)
                            .with_plugin(poi_plugin);

                        ui.add(map);

                        let selected = self.selection_state.borrow().poi.clone();
                        if let Some(marker) = selected {
                            let marker_id = marker.id.to_string();
                            match &mut self.poi_widget {
                                Some(widget) if widget.poi_id == marker_id => {
                                    if !widget.show(ctx) {
                                        self.selection_state.borrow_mut().poi = None;
                                        self.poi_widget = None;
                                    }
                                }
                                _ => {
                                    self.poi_widget =
                                        Some(WidgetPoi::new(marker_id, &mut self.store));
                                }
                            }
                        } else {
                            self.poi_widget = None;
                        }

                        windows::zoom(ui, &mut self.map_memory);
                        windows::recenter(ui, &mut self.map_memory);
                    });
            }
        }
    }
}

impl Drop for TrailApp {
    fn drop(&mut self) {
        // The screen is going away; a resolution still in flight must not
        // land on it.
        self.gate.deactivate();
    }
}
