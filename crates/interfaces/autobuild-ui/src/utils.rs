use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Outline,
}

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(11.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn cmd_button(
    ui: &mut egui::Ui,
    label: &str,
    kind: ButtonKind,
    enabled: bool,
) -> egui::Response {
    let text_col = match kind {
        ButtonKind::Primary => COL_BG_DARK,
        ButtonKind::Outline => COL_ACCENT,
    };
    let text = egui::RichText::new(label)
        .size(12.0)
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let fill = if enabled && kind == ButtonKind::Primary {
        COL_ACCENT
    } else {
        Color32::TRANSPARENT
    };

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(140.0, 26.0))
        .fill(fill)
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { COL_ACCENT } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}
