use crate::components::{forms, log_view};
use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use autobuild_app_core::AutoBuildApplication;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

const EDITOR_HEIGHT: f32 = 240.0;

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, app: &mut AutoBuildApplication) {
    let busy = app.is_build_running();

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: percent(1.),
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        forms::text_field(
            &mut *tui,
            "App Name:",
            &mut app.state.form.product_name,
            autobuild_config::DEFAULT_PRODUCT_NAME,
            !busy,
        );

        forms::code_editor(
            &mut *tui,
            "Paste your React App.js code or select a file:",
            &mut app.state.form.source_code,
            EDITOR_HEIGHT,
            !busy,
        );

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            justify_content: Some(taffy::JustifyContent::Center),
            gap: length(8.0),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .add(|tui| {
            if tui
                .ui(|ui| cmd_button(ui, "Select React File", ButtonKind::Outline, !busy))
                .clicked()
            {
                pick_source_file(app);
            }

            if tui
                .ui(|ui| cmd_button(ui, "Build Electron App", ButtonKind::Primary, !busy))
                .clicked()
            {
                if let Err(e) = app.start_build() {
                    tracing::error!("Failed to start build: {e:#}");
                }
            }

            if tui
                .ui(|ui| cmd_button(ui, "Recheck Dependencies", ButtonKind::Outline, true))
                .clicked()
            {
                app.recheck_dependencies();
            }
        });

        log_view::draw(&mut *tui, &app.state.build.log);

        let status_col = match app.state.build.succeeded {
            _ if busy => COL_WARN,
            Some(true) => COL_SUCCESS,
            Some(false) => COL_DANGER,
            None => COL_TEXT_DIM,
        };
        tui.style(taffy::Style {
            justify_content: Some(taffy::JustifyContent::Center),
            size: taffy::Size {
                width: percent(1.),
                height: auto(),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })
        .add(|tui| {
            tui.label(egui::RichText::new(app.state.status_line.as_str()).color(status_col));
        });
    });
}

fn pick_source_file(app: &mut AutoBuildApplication) {
    let picked = rfd::FileDialog::new()
        .add_filter("JavaScript Files", &["js"])
        .add_filter("All Files", &["*"])
        .pick_file();

    if let Some(path) = picked {
        if let Err(e) = app.load_source_file(&path) {
            tracing::warn!("{e:#}");
            app.report_error(format!("{e:#}"));
        }
    }
}
