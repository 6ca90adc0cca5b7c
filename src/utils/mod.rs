pub use self::conversions::{camera_view, isometry_from_transform, write_isometry};

mod conversions;
