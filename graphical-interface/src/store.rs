use std::fmt;
use std::path::Path;

use crate::types::PointOfInterest;

/// Represents errors that can occur while loading or querying POIs.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NotFound(String), // No POI with the given identifier
    Io(String),       // The backing file could not be read
    Malformed(String), // The backing file could not be parsed
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(ref id) => write!(f, "No POI with id {}", id),
            StoreError::Io(ref reason) => write!(f, "Could not read POI data: {}", reason),
            StoreError::Malformed(ref reason) => {
                write!(f, "Could not parse POI data: {}", reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// A trait that defines the required methods for a provider of POI data.
/// Implemented by any structure that can list the known POIs and resolve a
/// single one by the identifier the navigation layer carries.
pub trait PoiProvider {
    fn get_pois(&mut self) -> Result<Vec<PointOfInterest>, StoreError>;

    fn get_poi(&mut self, id: &str) -> Result<PointOfInterest, StoreError>;
}

/// In-memory POI repository, filled from the built-in sample set or from a
/// CSV file at startup.
pub struct PoiStore {
    pois: Vec<PointOfInterest>,
}

impl PoiStore {
    /// A store holding the built-in sample POIs.
    pub fn with_sample_data() -> Self {
        Self {
            pois: sample_pois(),
        }
    }

    /// Loads a store from a CSV file with the columns
    /// `id,title,description,latitude,longitude` (header row included).
    pub fn from_csv(path: &Path) -> Result<Self, StoreError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| StoreError::Io(e.to_string()))?;

        let mut pois = Vec::new();
        for record in reader.deserialize() {
            let poi: PointOfInterest =
                record.map_err(|e| StoreError::Malformed(e.to_string()))?;
            pois.push(poi);
        }

        Ok(Self { pois })
    }
}

impl PoiProvider for PoiStore {
    fn get_pois(&mut self) -> Result<Vec<PointOfInterest>, StoreError> {
        Ok(self.pois.clone())
    }

    /// Resolves the identifier the navigation layer carries. A non-numeric
    /// identifier cannot name any POI and resolves the same as an unknown
    /// one.
    fn get_poi(&mut self, id: &str) -> Result<PointOfInterest, StoreError> {
        let wanted: u32 = id
            .parse()
            .map_err(|_| StoreError::NotFound(id.to_string()))?;

        self.pois
            .iter()
            .find(|poi| poi.id == wanted)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// The built-in demo dataset.
pub fn sample_pois() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest {
            id: 1,
            title: "Coffee Shop".to_string(),
            description: "Best coffee in town".to_string(),
            latitude: 37.78825,
            longitude: -122.4324,
        },
        PointOfInterest {
            id: 2,
            title: "Restaurant".to_string(),
            description: "Great food and atmosphere".to_string(),
            latitude: 37.78925,
            longitude: -122.4334,
        },
        PointOfInterest {
            id: 3,
            title: "Park".to_string(),
            description: "Beautiful green space".to_string(),
            latitude: 37.78725,
            longitude: -122.4314,
        },
    ]
}
