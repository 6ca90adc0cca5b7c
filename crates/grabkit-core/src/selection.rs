use crate::scene::SceneObjects;

/// The object currently targeted by the context menu, if any.
///
/// The selection never owns its object: the handle is checked against the scene
/// each time it is read and a vanished object reads as no selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SelectionContext<H> {
    selected: Option<H>,
}

impl<H> Default for SelectionContext<H> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<H: Copy + Eq> SelectionContext<H> {
    pub fn select(&mut self, object: H) {
        self.selected = Some(object);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// The raw handle, without checking it still exists.
    pub fn handle(&self) -> Option<H> {
        self.selected
    }

    pub fn is_selected(&self, object: H) -> bool {
        self.selected == Some(object)
    }

    /// The selected object, if it still exists in `scene`.
    pub fn current<S>(&self, scene: &S) -> Option<H>
    where
        S: SceneObjects<Handle = H>,
    {
        self.selected.filter(|object| scene.exists(*object))
    }
}
