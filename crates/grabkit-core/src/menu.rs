//! Right-click context menu acting on the selected object.

use crate::camera::CameraView;
use crate::error::InteractionError;
use crate::palette::ColorGenerator;
use crate::rapier::math::{Point, Real};
use crate::raycast::{PointerRaycaster, SceneQuery};
use crate::scene::{BlendMode, MaterialBackend, SceneObjects};
use crate::selection::SelectionContext;
use na::{Point2, Vector2};
use std::fmt::Debug;
use strum_macros::EnumIter;

/// Menu position relative to the clicked point, in pixels: right of and above the click.
pub const DEFAULT_MENU_OFFSET: [Real; 2] = [100.0, -150.0];

pub const TRANSPARENT_ALPHA: f32 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum ContextAction {
    Recolor,
    ToggleTransparency,
    Hide,
}

impl ContextAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Recolor => "Change color",
            Self::ToggleTransparency => "Toggle transparency",
            Self::Hide => "Hide",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Hidden,
    Visible {
        /// Top-left corner of the menu, in screen pixels.
        anchor: Point2<Real>,
        /// World point where the selected object was clicked.
        target_point: Point<Real>,
    },
}

#[derive(Clone, Debug)]
pub struct ContextActionMenu<H> {
    selection: SelectionContext<H>,
    state: MenuState,
    pub offset: Vector2<Real>,
    pub raycaster: PointerRaycaster,
}

impl<H: Copy + Eq> Default for ContextActionMenu<H> {
    fn default() -> Self {
        Self::new(Vector2::from(DEFAULT_MENU_OFFSET))
    }
}

impl<H: Copy + Eq> ContextActionMenu<H> {
    pub fn new(offset: Vector2<Real>) -> Self {
        Self {
            selection: SelectionContext::default(),
            state: MenuState::Hidden,
            offset,
            raycaster: PointerRaycaster::default(),
        }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, MenuState::Visible { .. })
    }

    pub fn selection(&self) -> &SelectionContext<H> {
        &self.selection
    }

    pub fn anchor(&self) -> Option<Point2<Real>> {
        match self.state {
            MenuState::Visible { anchor, .. } => Some(anchor),
            MenuState::Hidden => None,
        }
    }

    /// Hides the menu and forgets the selection.
    pub fn close(&mut self) {
        self.state = MenuState::Hidden;
        self.selection.clear();
    }
}

impl<H: Copy + Eq + Debug> ContextActionMenu<H> {
    /// Selects the draggable object under the pointer and opens the menu next to it.
    ///
    /// Clicking empty space leaves the selection and the menu untouched.
    pub fn on_secondary_click<S>(
        &mut self,
        pointer: &Point2<Real>,
        camera: &CameraView,
        scene: &S,
    ) -> Option<H>
    where
        S: SceneQuery<Handle = H>,
    {
        let hit = self.raycaster.resolve_hit(pointer, camera, scene)?;
        if !scene.is_draggable(hit.object) {
            return None;
        }

        let clicked = camera
            .world_to_screen(&hit.point)
            .map(|s| Point2::new(s.x, s.y))
            .unwrap_or(*pointer);

        self.selection.select(hit.object);
        self.state = MenuState::Visible {
            anchor: clicked + self.offset,
            target_point: hit.point,
        };
        log::debug!("Context menu opened on {:?}", hit.object);
        Some(hit.object)
    }

    /// Closes the menu when the click did not land on an interactive UI element.
    pub fn on_primary_click(&mut self, over_interactive_ui: bool) {
        if !over_interactive_ui {
            self.close();
        }
    }

    /// Per-frame check that the selected object still exists.
    pub fn tick<S>(&mut self, scene: &S)
    where
        S: SceneObjects<Handle = H>,
    {
        let stale = self.selection.handle().is_some() && self.selection.current(scene).is_none();
        if stale || (self.is_visible() && self.selection.is_empty()) {
            log::debug!("Closing the context menu: its target is gone");
            self.close();
        }
    }

    pub fn apply<S>(
        &mut self,
        action: ContextAction,
        scene: &mut S,
        colors: &mut ColorGenerator,
    ) -> Result<(), InteractionError>
    where
        S: MaterialBackend<Handle = H>,
    {
        match action {
            ContextAction::Recolor => self.recolor(scene, colors),
            ContextAction::ToggleTransparency => self.toggle_transparency(scene),
            ContextAction::Hide => self.hide_object(scene),
        }
    }

    /// Gives the selected object a random color, keeping its alpha.
    pub fn recolor<S>(
        &mut self,
        scene: &mut S,
        colors: &mut ColorGenerator,
    ) -> Result<(), InteractionError>
    where
        S: MaterialBackend<Handle = H>,
    {
        let target = self.target(scene)?;
        let alpha = scene.color(target)?.a;
        scene.set_color(target, colors.gen_color(alpha))?;
        self.close();
        Ok(())
    }

    /// Switches the selected object between fully opaque and half transparent.
    pub fn toggle_transparency<S>(&mut self, scene: &mut S) -> Result<(), InteractionError>
    where
        S: MaterialBackend<Handle = H>,
    {
        let target = self.target(scene)?;
        let color = scene.color(target)?;

        if color.is_opaque() {
            scene.set_blend_mode(target, BlendMode::TRANSPARENT)?;
            scene.set_color(target, color.with_alpha(TRANSPARENT_ALPHA))?;
        } else {
            scene.set_color(target, color.with_alpha(1.0))?;
        }

        self.close();
        Ok(())
    }

    pub fn hide_object<S>(&mut self, scene: &mut S) -> Result<(), InteractionError>
    where
        S: SceneObjects<Handle = H>,
    {
        let target = self.target(scene)?;
        scene.set_visible(target, false)?;
        self.close();
        Ok(())
    }

    fn target<S>(&mut self, scene: &S) -> Result<H, InteractionError>
    where
        S: SceneObjects<Handle = H>,
    {
        match self.selection.handle() {
            None => Err(InteractionError::NoSelection),
            Some(object) if !scene.exists(object) => {
                self.close();
                Err(InteractionError::NoSelection)
            }
            Some(object) => Ok(object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Projection, Viewport};
    use crate::memory::{MemoryScene, ObjectId};
    use crate::rapier::math::Vector;
    use crate::scene::{RenderQueue, Rgba};
    use strum::IntoEnumIterator;

    fn camera() -> CameraView {
        CameraView::look_at(
            Point::origin(),
            Point::new(0.0, 0.0, 1.0),
            Vector::y(),
            Projection::default(),
            Viewport::new(800.0, 600.0),
        )
    }

    fn scene_with_cube() -> (MemoryScene, ObjectId) {
        let mut scene = MemoryScene::default();
        let cube = scene.add_box(
            "cube",
            Point::new(0.0, 0.0, 5.0),
            Vector::repeat(0.5),
            Rgba::new(0.2, 0.3, 0.4, 1.0),
            true,
        );
        (scene, cube)
    }

    fn open_on_center(
        menu: &mut ContextActionMenu<ObjectId>,
        scene: &MemoryScene,
    ) -> Option<ObjectId> {
        menu.on_secondary_click(&Point2::new(400.0, 300.0), &camera(), scene)
    }

    #[test]
    fn secondary_click_selects_and_anchors_the_menu() {
        let (scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();

        assert_eq!(open_on_center(&mut menu, &scene), Some(cube));
        assert!(menu.selection().is_selected(cube));
        match *menu.state() {
            MenuState::Visible {
                anchor,
                target_point,
            } => {
                assert!((anchor - Point2::new(500.0, 150.0)).norm() < 1.0e-3);
                assert!((target_point - Point::new(0.0, 0.0, 4.5)).norm() < 1.0e-4);
            }
            MenuState::Hidden => panic!("the menu should be visible"),
        }
    }

    #[test]
    fn secondary_click_on_nothing_keeps_the_open_menu() {
        let (scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();
        open_on_center(&mut menu, &scene);
        let before = *menu.state();

        assert_eq!(
            menu.on_secondary_click(&Point2::new(5.0, 5.0), &camera(), &scene),
            None,
        );
        assert_eq!(*menu.state(), before);
        assert!(menu.selection().is_selected(cube));
    }

    #[test]
    fn secondary_click_ignores_fixed_objects() {
        let mut scene = MemoryScene::default();
        scene.add_box(
            "wall",
            Point::new(0.0, 0.0, 5.0),
            Vector::repeat(0.5),
            Rgba::WHITE,
            false,
        );
        let mut menu = ContextActionMenu::default();
        assert_eq!(open_on_center(&mut menu, &scene), None);
        assert!(!menu.is_visible());
    }

    #[test]
    fn primary_click_outside_ui_always_closes() {
        let (scene, _) = scene_with_cube();

        let mut menu = ContextActionMenu::<ObjectId>::default();
        menu.on_primary_click(false);
        assert!(!menu.is_visible());
        assert!(menu.selection().is_empty());

        open_on_center(&mut menu, &scene);
        menu.on_primary_click(true);
        assert!(menu.is_visible());
        menu.on_primary_click(false);
        assert_eq!(*menu.state(), MenuState::Hidden);
        assert!(menu.selection().is_empty());
    }

    #[test]
    fn recolor_keeps_alpha_and_closes() {
        let (mut scene, cube) = scene_with_cube();
        scene.set_color(cube, Rgba::new(0.2, 0.3, 0.4, 0.5)).unwrap();
        let mut colors = ColorGenerator::new(7);
        let expected = ColorGenerator::new(7).gen_color(0.5);
        let mut menu = ContextActionMenu::default();
        open_on_center(&mut menu, &scene);

        menu.recolor(&mut scene, &mut colors).unwrap();
        assert_eq!(scene.color(cube).unwrap(), expected);
        assert!(!menu.is_visible());
        assert!(menu.selection().is_empty());
    }

    #[test]
    fn actions_without_selection_change_nothing() {
        let (mut scene, cube) = scene_with_cube();
        let before = scene.color(cube).unwrap();
        let mut colors = ColorGenerator::default();
        let mut menu = ContextActionMenu::<ObjectId>::default();

        for action in ContextAction::iter() {
            assert_eq!(
                menu.apply(action, &mut scene, &mut colors),
                Err(InteractionError::NoSelection)
            );
        }
        assert_eq!(scene.color(cube).unwrap(), before);
        assert!(scene.is_visible(cube));
        assert_eq!(*menu.state(), MenuState::Hidden);
    }

    #[test]
    fn transparency_toggles_between_opaque_and_half() {
        let (mut scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();

        open_on_center(&mut menu, &scene);
        menu.toggle_transparency(&mut scene).unwrap();
        assert_eq!(scene.color(cube).unwrap().a, 0.5);
        let blend = scene.blend_mode(cube).unwrap();
        assert!(blend.alpha_blend);
        assert!(!blend.depth_write);
        assert_eq!(blend.queue, RenderQueue::Transparent);
        assert!(!menu.is_visible());

        open_on_center(&mut menu, &scene);
        menu.toggle_transparency(&mut scene).unwrap();
        assert_eq!(scene.color(cube).unwrap().a, 1.0);
        assert_eq!(scene.color(cube).unwrap().r, 0.2);
    }

    #[test]
    fn missing_material_aborts_without_closing() {
        let (mut scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();
        open_on_center(&mut menu, &scene);
        scene.get_mut(cube).unwrap().material = None;

        assert_eq!(
            menu.toggle_transparency(&mut scene),
            Err(InteractionError::MissingMaterial)
        );
        assert!(menu.is_visible());
        assert!(menu.selection().is_selected(cube));
    }

    #[test]
    fn hide_makes_the_object_unreachable() {
        let (mut scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();
        open_on_center(&mut menu, &scene);

        menu.hide_object(&mut scene).unwrap();
        assert!(!scene.is_visible(cube));
        assert!(!menu.is_visible());
        assert_eq!(open_on_center(&mut menu, &scene), None);
    }

    #[test]
    fn removed_target_closes_the_menu() {
        let (mut scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();
        open_on_center(&mut menu, &scene);
        scene.remove(cube);

        let mut colors = ColorGenerator::default();
        assert_eq!(
            menu.recolor(&mut scene, &mut colors),
            Err(InteractionError::NoSelection)
        );
        assert!(!menu.is_visible());

        open_on_center(&mut menu, &scene);
        menu.tick(&scene);
        assert!(!menu.is_visible());
    }

    #[test]
    fn tick_closes_when_the_target_disappears() {
        let (mut scene, cube) = scene_with_cube();
        let mut menu = ContextActionMenu::default();
        open_on_center(&mut menu, &scene);

        menu.tick(&scene);
        assert!(menu.is_visible());

        scene.remove(cube);
        menu.tick(&scene);
        assert!(!menu.is_visible());
        assert!(menu.selection().is_empty());
    }
}
