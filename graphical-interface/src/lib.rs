use location::LocationGate;
use store::PoiStore;

mod map;
mod plugins;
mod state;
pub mod store;
pub mod types;
pub mod widgets;
mod windows;
use map::TrailApp;

/// Opens the map screen and runs it until the window closes.
///
/// The gate is expected to have been activated by the caller; the screen
/// polls it and deactivates it when it goes away.
pub fn run(store: PoiStore, gate: LocationGate) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Trail Map",
        Default::default(),
        Box::new(|cc| Ok(Box::new(TrailApp::new(cc.egui_ctx.clone(), store, gate)))),
    )
}
