mod poi;
pub use poi::PointOfInterest;

mod scene;
pub use scene::{
    CircleOverlay, MapScene, PoiMarker, Viewport, EMPHASIS_RADIUS_METERS, VIEWPORT_SPAN_DEGREES,
};
