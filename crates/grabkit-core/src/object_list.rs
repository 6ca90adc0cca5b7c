use crate::error::InteractionError;
use crate::scene::SceneObjects;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectListEntry<H> {
    pub object: H,
    pub name: String,
}

/// The rows of the panel listing every draggable object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectList<H> {
    entries: Vec<ObjectListEntry<H>>,
}

impl<H> Default for ObjectList<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H: Copy + Eq> ObjectList<H> {
    /// One row per draggable object of `scene`, in scene order.
    pub fn collect<S>(scene: &S) -> Self
    where
        S: SceneObjects<Handle = H>,
    {
        let entries = scene
            .handles()
            .into_iter()
            .filter(|object| scene.is_draggable(*object))
            .map(|object| ObjectListEntry {
                object,
                name: scene.name(object).unwrap_or_default(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ObjectListEntry<H>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flips the visibility of `object` and returns the new state.
    pub fn toggle_visibility<S>(&self, object: H, scene: &mut S) -> Result<bool, InteractionError>
    where
        S: SceneObjects<Handle = H>,
    {
        if !scene.exists(object) {
            return Err(InteractionError::StaleHandle);
        }

        let visible = !scene.is_visible(object);
        scene.set_visible(object, visible)?;
        Ok(visible)
    }

    /// Drops the rows whose objects left the scene.
    pub fn retain_existing<S>(&mut self, scene: &S)
    where
        S: SceneObjects<Handle = H>,
    {
        self.entries.retain(|e| scene.exists(e.object));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::SceneDescription;
    use crate::memory::MemoryScene;
    use crate::rapier::math::{Point, Vector};
    use crate::scene::Rgba;

    #[test]
    fn only_draggable_objects_are_listed() {
        let scene = MemoryScene::from_description(&SceneDescription::demo());
        let list = ObjectList::collect(&scene);
        let names: Vec<_> = list.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Red cube", "Green cube", "Blue cube"]);
    }

    #[test]
    fn toggling_flips_visibility_back_and_forth() {
        let mut scene = MemoryScene::from_description(&SceneDescription::demo());
        let list = ObjectList::collect(&scene);
        let object = list.entries()[0].object;

        assert_eq!(list.toggle_visibility(object, &mut scene), Ok(false));
        assert!(!scene.is_visible(object));
        assert_eq!(list.toggle_visibility(object, &mut scene), Ok(true));
        assert!(scene.is_visible(object));
    }

    #[test]
    fn removed_objects_are_pruned() {
        let mut scene = MemoryScene::from_description(&SceneDescription::demo());
        let mut list = ObjectList::collect(&scene);
        let object = list.entries()[1].object;
        scene.remove(object);

        assert_eq!(
            list.toggle_visibility(object, &mut scene),
            Err(InteractionError::StaleHandle)
        );
        list.retain_existing(&scene);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn scenes_without_draggables_give_an_empty_list() {
        let mut scene = MemoryScene::default();
        scene.add_box(
            "wall",
            Point::origin(),
            Vector::repeat(0.5),
            Rgba::WHITE,
            false,
        );

        assert!(ObjectList::collect(&scene).is_empty());
    }
}
