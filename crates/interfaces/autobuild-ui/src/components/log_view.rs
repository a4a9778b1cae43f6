use crate::theme::*;
use crate::utils::section_label;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

const ROW_HEIGHT: f32 = 16.0;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, lines: &[String]) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(2.0),
        flex_grow: 1.0,
        min_size: taffy::Size {
            width: percent(1.),
            height: length(160.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        tui.ui(|ui| section_label(ui, "Build Log:"));

        tui.style(taffy::Style {
            flex_grow: 1.0,
            padding: length(4.0),
            size: taffy::Size {
                width: percent(1.),
                height: percent(1.),
            },
            ..Default::default()
        })
        .bg_add(
            TuiBackground::new()
                .with_background_color(COL_BG_DARK)
                .with_border_color(COL_BORDER)
                .with_border_width(1.0),
            |tui| {
                tui.ui(|ui| {
                    // Rows are virtualised; npm output runs to thousands of lines.
                    egui::ScrollArea::both()
                        .id_salt("build_log")
                        .stick_to_bottom(true)
                        .auto_shrink([false, false])
                        .show_rows(ui, ROW_HEIGHT, lines.len(), |ui, range| {
                            for line in &lines[range] {
                                ui.label(
                                    egui::RichText::new(line.as_str())
                                        .monospace()
                                        .color(line_color(line)),
                                );
                            }
                        });
                });
            },
        );
    });
}

fn line_color(line: &str) -> egui::Color32 {
    if line.starts_with("Step ") {
        COL_ACCENT
    } else if line.starts_with("> ") {
        COL_TEXT
    } else if line.starts_with("Error:") || line.starts_with("A build step failed") {
        COL_DANGER
    } else {
        COL_TEXT_DIM
    }
}
