use crate::components::{header, notification};
use crate::screens::build;
use autobuild_app_core::AutoBuildApplication;
use autobuild_config::EVENT_POLL_INTERVAL;
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

pub struct AutoBuildUiApp {
    core: AutoBuildApplication,
}

impl AutoBuildUiApp {
    pub fn new(core: AutoBuildApplication) -> Self {
        Self { core }
    }
}

impl eframe::App for AutoBuildUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.core.handle_build_events();

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // Width-independent text measurement keeps egui_taffy's multi-pass layout stable.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    gap: length(8.0),
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(30.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        header::draw(
                            tui,
                            self.core.is_build_running(),
                            &self.core.state.dependencies,
                        );
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        min_size: taffy::Size {
                            width: length(0.0),
                            height: length(0.0),
                        },
                        padding: length(8.0),
                        ..Default::default()
                    })
                    .add(|tui| build::draw(tui, &mut self.core));
                });
        });

        if let Some(note) = self.core.state.notification.clone() {
            if notification::show(ctx, &note) {
                self.core.dismiss_notification();
            }
        }

        if self.core.is_build_running() {
            ctx.request_repaint_after(EVENT_POLL_INTERVAL);
        }
    }
}
