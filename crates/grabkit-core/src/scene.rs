//! Traits implemented by the host scene graph, and the appearance values exchanged with it.

use crate::error::InteractionError;
use crate::rapier::math::{Point, Real};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Rgba::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Draw-order bucket of a material. The values follow the usual engine conventions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RenderQueue {
    Geometry = 2000,
    AlphaTest = 2450,
    Transparent = 3000,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlendMode {
    pub alpha_blend: bool,
    pub depth_write: bool,
    pub queue: RenderQueue,
}

impl BlendMode {
    pub const OPAQUE: BlendMode = BlendMode {
        alpha_blend: false,
        depth_write: true,
        queue: RenderQueue::Geometry,
    };

    pub const TRANSPARENT: BlendMode = BlendMode {
        alpha_blend: true,
        depth_write: false,
        queue: RenderQueue::Transparent,
    };
}

impl Default for BlendMode {
    fn default() -> Self {
        Self::OPAQUE
    }
}

/// Access to the objects of the host scene.
///
/// Handles are non-owning: an object may disappear at any time, in which case
/// [`SceneObjects::exists`] returns `false` and the getters return `None`.
pub trait SceneObjects {
    type Handle: Copy + Eq + Hash + Debug;

    fn exists(&self, object: Self::Handle) -> bool;
    fn is_draggable(&self, object: Self::Handle) -> bool;
    fn is_visible(&self, object: Self::Handle) -> bool;
    fn set_visible(&mut self, object: Self::Handle, visible: bool) -> Result<(), InteractionError>;
    fn position(&self, object: Self::Handle) -> Option<Point<Real>>;
    fn set_position(
        &mut self,
        object: Self::Handle,
        position: Point<Real>,
    ) -> Result<(), InteractionError>;
    fn name(&self, object: Self::Handle) -> Option<String>;
    /// Every object of the scene, in a stable order.
    fn handles(&self) -> Vec<Self::Handle>;

    /// Objects the pointer may interact with.
    fn is_interactive(&self, object: Self::Handle) -> bool {
        self.is_draggable(object) && self.is_visible(object)
    }
}

/// The render/material side of the scene.
pub trait MaterialBackend: SceneObjects {
    fn color(&self, object: Self::Handle) -> Result<Rgba, InteractionError>;
    fn set_color(&mut self, object: Self::Handle, color: Rgba) -> Result<(), InteractionError>;
    fn blend_mode(&self, object: Self::Handle) -> Result<BlendMode, InteractionError>;
    fn set_blend_mode(
        &mut self,
        object: Self::Handle,
        mode: BlendMode,
    ) -> Result<(), InteractionError>;
}
