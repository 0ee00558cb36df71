use crate::{
    store::PoiProvider,
    types::{PoiMarker, PointOfInterest},
};

/// Tracks which marker is selected on the map. Selection is how the
/// navigation layer hands an identifier to the detail view.
pub struct SelectionState {
    pub poi: Option<PoiMarker>,
}

impl SelectionState {
    pub fn new() -> SelectionState {
        Self { poi: None }
    }

    /// If the provided marker is already selected, it will be deselected.
    /// Otherwise, it will be selected.
    pub fn toggle_poi_selection(&mut self, marker: &PoiMarker) {
        if let Some(selected) = &self.poi {
            if *selected == *marker {
                self.poi = None;
            } else {
                self.poi = Some(marker.clone());
            }
        } else {
            self.poi = Some(marker.clone());
        }
    }
}

/// Tracks the POIs to display.
pub struct ViewState {
    pub pois: Vec<PointOfInterest>,
}

impl ViewState {
    pub fn new(pois: Vec<PointOfInterest>) -> Self {
        Self { pois }
    }

    pub fn update_pois<P: PoiProvider>(&mut self, store: &mut P) {
        if let Ok(new_pois) = store.get_pois() {
            self.pois = new_pois;
        }
    }
}
