use std::fmt;

/// Failures reported by the interaction core.
///
/// None of them is fatal: the host logs them and the interaction is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InteractionError {
    /// A menu action was invoked while nothing is selected.
    NoSelection,
    /// The handle refers to an object that was removed from the scene.
    StaleHandle,
    /// The target has no material to read or write a color from.
    MissingMaterial,
    /// The point lies behind the camera or the viewport is empty.
    Unprojectable,
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSelection => write!(f, "no object is selected"),
            Self::StaleHandle => write!(f, "the object no longer exists"),
            Self::MissingMaterial => write!(f, "material component not found on the object"),
            Self::Unprojectable => write!(f, "the point cannot be projected by the camera"),
        }
    }
}

impl std::error::Error for InteractionError {}
