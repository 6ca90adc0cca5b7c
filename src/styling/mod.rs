pub use self::colors::{color_to_rgba, rgba_to_color, SceneColors};
pub use self::plugin::{StylingPlugin, Theme};

mod colors;
pub(self) mod dark_mode;
mod plugin;
