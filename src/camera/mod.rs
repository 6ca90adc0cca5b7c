pub use self::fly::{FlyCamera, FlyCameraPlugin};

mod fly;
