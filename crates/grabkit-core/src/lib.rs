pub extern crate rapier3d as rapier;
extern crate nalgebra as na;

pub use rapier::parry;

pub mod camera;
pub mod description;
pub mod drag;
pub mod error;
pub mod memory;
pub mod menu;
pub mod object_list;
pub mod palette;
pub mod raycast;
pub mod rig;
pub mod scene;
pub mod selection;

pub use error::InteractionError;
