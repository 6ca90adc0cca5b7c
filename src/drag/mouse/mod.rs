pub use self::click::handle_drag_click;
pub use self::motion::handle_drag_motion;

mod click;
mod motion;
