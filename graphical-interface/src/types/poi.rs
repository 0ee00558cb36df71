use serde::{Deserialize, Serialize};
use walkers::Position;

/// Represents a named, located entry shown as a map marker, with its unique
/// identifier, display texts and geographical position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PointOfInterest {
    pub fn position(&self) -> Position {
        Position::from_lat_lon(self.latitude, self.longitude)
    }
}
