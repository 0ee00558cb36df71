mod poi;
pub use poi::{DetailLookup, WidgetPoi, DETAIL_TITLE};
