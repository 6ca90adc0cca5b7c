use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use grabkit_core::description::SceneDescription;
use grabkit_core::menu::DEFAULT_MENU_OFFSET;
use grabkit_core::palette::DEFAULT_SEED;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON scene description. The built-in demo scene is used if omitted.
    #[arg(long)]
    pub scene: Option<PathBuf>,
    /// Seed of the random colors picked by the context menu.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    #[arg(long, default_value_t = 1000.0)]
    pub mouse_sensitivity: f32,
    #[arg(long, default_value_t = 10.0)]
    pub move_speed: f32,
    #[arg(long, default_value_t = 5.0)]
    pub scroll_speed: f32,
    #[arg(long, default_value_t = DEFAULT_MENU_OFFSET[0], allow_negative_numbers = true)]
    pub menu_offset_x: f32,
    #[arg(long, default_value_t = DEFAULT_MENU_OFFSET[1], allow_negative_numbers = true)]
    pub menu_offset_y: f32,
    #[arg(long, default_value_t = false)]
    pub light_theme: bool,
}

impl CliArgs {
    pub fn scene_description(&self) -> anyhow::Result<SceneDescription> {
        let Some(path) = &self.scene else {
            return Ok(SceneDescription::demo());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the scene file {}", path.display()))?;
        SceneDescription::from_json(&json)
            .with_context(|| format!("invalid scene description in {}", path.display()))
    }
}
