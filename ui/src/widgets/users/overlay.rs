//! The dismissible full-screen overlay.
//!
//! Shown over the whole screen on first render and whenever a row action
//! re-arms it. Dismissal only flips the flag for this process; nothing is
//! persisted across restarts.

use egui::{Align2, Color32, Id, Order, RichText, Sense, vec2};

use super::state::UserListState;

/// Paints the overlay over everything else and handles its close affordance.
pub fn user_info_overlay(state: &mut UserListState, ctx: &egui::Context) {
    let screen = ctx.screen_rect();

    // Opaque background that swallows pointer input to the list below.
    egui::Area::new(Id::new("user_info_overlay_bg"))
        .order(Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(screen, 0.0, ui.visuals().extreme_bg_color);
            ui.allocate_rect(screen, Sense::click());
        });

    // Close affordance near the top-right corner.
    egui::Area::new(Id::new("user_info_overlay_close"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, vec2(-0.1 * screen.width(), 0.1 * screen.height()))
        .show(ctx, |ui| {
            if ui
                .add(egui::Button::new(RichText::new("X").size(42.0)).frame(false))
                .clicked()
            {
                state.dismiss_overlay();
            }
        });

    // Centered content.
    egui::Area::new(Id::new("user_info_overlay_content"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(RichText::new("User info").color(Color32::GRAY));
        });
}
