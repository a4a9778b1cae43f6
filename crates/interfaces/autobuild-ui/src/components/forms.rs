use crate::utils::section_label;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
    enabled: bool,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui_add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .interactive(enabled)
                .desired_width(f32::INFINITY),
        );
    });
}

/// Multiline monospace editor inside its own scroll area.
pub fn code_editor<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    height: f32,
    enabled: bool,
) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        flex_shrink: 0.0,
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, label));
        tui.ui(|ui| {
            egui::ScrollArea::vertical()
                .id_salt("source_editor")
                .max_height(height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_sized(
                        [ui.available_width(), height],
                        egui::TextEdit::multiline(value)
                            .code_editor()
                            .interactive(enabled)
                            .hint_text("export default function App() { ... }"),
                    );
                });
        });
    });
}
