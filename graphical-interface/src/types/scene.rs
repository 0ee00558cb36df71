use egui::{Color32, Stroke};
use location::Coordinate;
use walkers::Position;

use super::PointOfInterest;

/// Span of the initial viewport, in degrees on both axes.
pub const VIEWPORT_SPAN_DEGREES: f64 = 0.05;

/// Radius of the emphasis circle drawn around the user, in meters.
pub const EMPHASIS_RADIUS_METERS: f32 = 100.0;

/// Initial region the map shows: the user's fix with a fixed span.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: Position,
    pub lat_span: f64,
    pub lon_span: f64,
}

impl Viewport {
    pub fn centered_on(center: Position) -> Self {
        Self {
            center,
            lat_span: VIEWPORT_SPAN_DEGREES,
            lon_span: VIEWPORT_SPAN_DEGREES,
        }
    }

    /// Zoom level showing roughly `lon_span` degrees across. Zoom 0 shows
    /// the full 360 degrees of longitude; each level halves the span.
    pub fn zoom(&self) -> f64 {
        (360.0 / self.lon_span).log2()
    }
}

/// Translucent circle of fixed real-world radius drawn around the user's
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleOverlay {
    pub center: Position,
    pub radius_meters: f32,
    pub stroke: Stroke,
    pub fill: Color32,
}

/// One map marker, carrying what its tooltip and the detail view display.
#[derive(Debug, Clone, PartialEq)]
pub struct PoiMarker {
    pub id: u32,
    pub position: Position,
    pub title: String,
    pub description: String,
}

/// Everything the map draws for one resolved location: the initial viewport,
/// the emphasis circle and one marker per POI.
///
/// Composition is a pure function of its inputs; composing twice from the
/// same fix and POI list yields equal scenes.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub viewport: Viewport,
    pub emphasis: CircleOverlay,
    pub markers: Vec<PoiMarker>,
}

impl MapScene {
    pub fn compose(fix: &Coordinate, pois: &[PointOfInterest]) -> Self {
        let center = Position::from_lat_lon(fix.latitude, fix.longitude);

        MapScene {
            viewport: Viewport::centered_on(center),
            emphasis: CircleOverlay {
                center,
                radius_meters: EMPHASIS_RADIUS_METERS,
                stroke: Stroke::new(2.0, Color32::from_rgba_unmultiplied(0, 122, 255, 128)),
                fill: Color32::from_rgba_unmultiplied(0, 122, 255, 26),
            },
            markers: pois
                .iter()
                .map(|poi| PoiMarker {
                    id: poi.id,
                    position: poi.position(),
                    title: poi.title.clone(),
                    description: poi.description.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_pois;

    #[test]
    fn viewport_is_centered_on_the_fix_with_the_fixed_span() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let scene = MapScene::compose(&fix, &sample_pois());

        assert_eq!(
            scene.viewport.center,
            Position::from_lat_lon(37.78825, -122.4324)
        );
        assert_eq!(scene.viewport.lat_span, 0.05);
        assert_eq!(scene.viewport.lon_span, 0.05);
    }

    #[test]
    fn emphasis_circle_sits_on_the_fix_with_radius_100() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let scene = MapScene::compose(&fix, &sample_pois());

        assert_eq!(scene.emphasis.center, scene.viewport.center);
        assert_eq!(scene.emphasis.radius_meters, 100.0);
    }

    #[test]
    fn one_marker_per_poi_at_its_own_position() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let pois = sample_pois();
        let scene = MapScene::compose(&fix, &pois);

        assert_eq!(scene.markers.len(), 3);
        for (marker, poi) in scene.markers.iter().zip(&pois) {
            assert_eq!(marker.id, poi.id);
            assert_eq!(marker.position, poi.position());
            assert_eq!(marker.title, poi.title);
        }
    }

    #[test]
    fn composition_is_idempotent() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let pois = sample_pois();

        assert_eq!(MapScene::compose(&fix, &pois), MapScene::compose(&fix, &pois));
    }

    #[test]
    fn zoom_grows_as_the_span_shrinks() {
        let wide = Viewport {
            center: Position::from_lat_lon(0.0, 0.0),
            lat_span: 0.5,
            lon_span: 0.5,
        };
        let narrow = Viewport::centered_on(Position::from_lat_lon(0.0, 0.0));

        assert!(narrow.zoom() > wide.zoom());
        // A 0.05 degree span lands in street-level zoom territory.
        assert!(narrow.zoom() > 12.0 && narrow.zoom() < 14.0);
    }
}
