mod pois;
mod user_location;
pub use pois::Pois;
pub use user_location::UserLocation;
