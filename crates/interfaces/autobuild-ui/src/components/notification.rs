use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use autobuild_app_core::Notification;
use eframe::egui;

/// Shows `note` as a modal dialog. Returns true once the user dismisses it.
pub fn show(ctx: &egui::Context, note: &Notification) -> bool {
    let title_col = if note.is_error() { COL_DANGER } else { COL_SUCCESS };
    let mut dismissed = false;

    let resp = egui::Modal::new(egui::Id::new("notification")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.label(
            egui::RichText::new(note.title())
                .size(15.0)
                .strong()
                .color(title_col),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new(note.message()).color(COL_TEXT));
        ui.add_space(10.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if cmd_button(ui, "OK", ButtonKind::Primary, true).clicked() {
                dismissed = true;
            }
        });
    });

    dismissed || resp.should_close()
}
