use crate::selection::UiFocus;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

pub fn focus_ui(mut ui_context: EguiContexts, mut focus: ResMut<UiFocus>) {
    let ctx = ui_context.ctx_mut();
    focus.pointer_over_ui = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}
