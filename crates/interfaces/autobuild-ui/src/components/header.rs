use crate::theme::*;
use autobuild_app_core::DependencyStatus;
use autobuild_config::APP_NAME;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, is_busy: bool, deps: &DependencyStatus) {
    let (deps_text, deps_col) = match deps {
        DependencyStatus::Unknown => ("TOOLS: UNCHECKED".to_string(), COL_TEXT_DIM),
        DependencyStatus::Ready => ("TOOLS: OK".to_string(), COL_SUCCESS),
        DependencyStatus::Missing(missing) => {
            (format!("MISSING: {}", missing.join(", ")), COL_DANGER)
        }
    };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
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
            tui.label(
                egui::RichText::new(APP_NAME)
                    .size(14.0)
                    .strong()
                    .color(COL_TEXT),
            );

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(10.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(egui::RichText::new(deps_text).color(deps_col).size(11.0));

                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                    tui.label(egui::RichText::new("BUILDING").color(COL_WARN).size(11.0));
                } else {
                    tui.label(egui::RichText::new("IDLE").color(COL_ACCENT).size(11.0));
                }
            });
        },
    );
}
