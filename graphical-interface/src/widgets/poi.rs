use crate::store::PoiProvider;
use crate::types::PointOfInterest;

/// Window title for the POI detail view.
pub const DETAIL_TITLE: &str = "POI Details";

/// Outcome of resolving the selected identifier against the POI store.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLookup {
    Found(PointOfInterest),
    NotFound,
}

/// A window displaying the details of the POI selected on the map.
///
/// The identifier arrives as the string the navigation layer carries and is
/// resolved against the store once, when the widget opens. An identifier that
/// names no POI still opens the window; it just says so.
pub struct WidgetPoi {
    pub poi_id: String,
    lookup: DetailLookup,
}

impl WidgetPoi {
    /// Creates the widget for `poi_id`, resolving it through the store.
    pub fn new<P: PoiProvider>(poi_id: String, store: &mut P) -> Self {
        let lookup = match store.get_poi(&poi_id) {
            Ok(poi) => DetailLookup::Found(poi),
            Err(_) => DetailLookup::NotFound,
        };

        Self { poi_id, lookup }
    }

    pub fn lookup(&self) -> &DetailLookup {
        &self.lookup
    }

    /// The `ID: …` line, shown verbatim whatever the lookup found.
    pub fn id_line(&self) -> String {
        format!("ID: {}", self.poi_id)
    }

    /// Shows the detail window. Returns whether it is still open.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;

        egui::Window::new(DETAIL_TITLE)
            .resizable(false)
            .collapsible(true)
            .open(&mut open)
            .fixed_pos([20.0, 20.0])
            .show(ctx, |ui| {
                ui.add_space(10.0);

                ui.label(egui::RichText::new(self.id_line()).size(16.0));

                ui.add_space(5.0);

                match &self.lookup {
                    DetailLookup::Found(poi) => {
                        ui.label(egui::RichText::new(&poi.title).size(18.0).strong());
                        ui.label(&poi.description);
                        ui.add_space(5.0);
                        ui.label(format!("({:.5}, {:.5})", poi.latitude, poi.longitude));
                    }
                    DetailLookup::NotFound => {
                        ui.label(format!("No POI with id {}", self.poi_id));
                    }
                }
            });

        open
    }
}
