use bevy::prelude::*;
use grabkit_core::palette::ColorGenerator;
use grabkit_core::scene::Rgba;

/// Random colors handed out by the context menu.
#[derive(Clone, Debug, Default, Resource, Deref, DerefMut)]
pub struct SceneColors(pub ColorGenerator);

pub fn rgba_to_color(color: Rgba) -> Color {
    Color::srgba(color.r, color.g, color.b, color.a)
}

pub fn color_to_rgba(color: Color) -> Rgba {
    let srgba = color.to_srgba();
    Rgba::new(srgba.red, srgba.green, srgba.blue, srgba.alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_survive_the_conversion() {
        let rgba = Rgba::new(0.25, 0.5, 0.75, 0.5);
        let back = color_to_rgba(rgba_to_color(rgba));
        assert!((back.r - rgba.r).abs() < 1.0e-6);
        assert!((back.g - rgba.g).abs() < 1.0e-6);
        assert!((back.b - rgba.b).abs() < 1.0e-6);
        assert_eq!(back.a, 0.5);
    }
}
