// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use crossbeam::channel::Receiver;
use eframe::{egui, App, Frame, NativeOptions};
use egui::{Color32, FontId, RichText};
use tracing::Level;
use tracing_subscriber::{self};
use tweak_panel::{
    config::PanelConfig,
    constants::{
        LABEL_FONT_SIZE, TOP_BAR_HEIGHT, UI_PADDING, UI_SPACING, WINDOW_HEIGHT, WINDOW_WIDTH,
    },
    tweaks::{
        declare::{offset_x, padding, Tweakable},
        values::ValueEvent,
    },
    ui::{combobox::PolicyComboBox, switch::ToggleSwitch},
    TweakPanel,
};

pub struct MyApp {
    /// Owns the tweak values and draws the slider editor
    pub panel: TweakPanel,

    /// Value changes published by the panel, drained every frame for logging
    pub value_events: Receiver<ValueEvent>,

    /// Whether the `offset` tweakable is mounted this frame
    pub show_offset: bool,
}

impl MyApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let app_span = tracing::span!(Level::INFO, "App Initialization");
        let _app_guard = app_span.enter();

        let mut panel = TweakPanel::new(PanelConfig::default());
        let value_events = panel.subscribe_values();

        tracing::debug!("Merge policy: {}", panel.merge_policy());

        Self {
            panel,
            value_events,
            show_offset: true,
        }
    }

    fn drain_value_events(&self) {
        for event in self.value_events.try_iter() {
            tracing::debug!("Tweak value event: {:?}", event);
        }
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .exact_height(TOP_BAR_HEIGHT)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::same(UI_PADDING))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new("Merge policy")
                                    .font(FontId::proportional(LABEL_FONT_SIZE)),
                            );
                            let mut policy = self.panel.merge_policy();
                            if ui.add(PolicyComboBox::new(&mut policy)).changed() {
                                self.panel.set_merge_policy(policy);
                            }

                            ui.separator();
                            ui.label(
                                RichText::new("Mount offset")
                                    .font(FontId::proportional(LABEL_FONT_SIZE)),
                            );
                            if ui.add(ToggleSwitch::new(&mut self.show_offset)).changed() {
                                tracing::debug!("Offset tweakable mounted: {}", self.show_offset);
                            }
                        });
                    });
            });
    }

    fn draw_content(&mut self, ctx: &egui::Context) {
        let show_offset = self.show_offset;
        self.panel.show(ctx, |ui, tweaks| {
            ui.vertical_centered(|ui| {
                ui.add_space(UI_SPACING);
                egui::Frame::none().fill(Color32::BLUE).show(ui, |ui| {
                    Tweakable::new("padding", 10.0).show(ui, tweaks, |ui, tweaks, pad| {
                        padding(ui, pad, |ui| {
                            if show_offset {
                                Tweakable::new("offset", 10.0).show(ui, tweaks, |ui, _, x| {
                                    offset_x(ui, x, |ui| hello(ui));
                                });
                            } else {
                                hello(ui);
                            }
                        });
                    });
                });
            });
        });
    }
}

fn hello(ui: &mut egui::Ui) -> egui::Response {
    ui.label(
        RichText::new("Hello, world!")
            .color(Color32::WHITE)
            .font(FontId::proportional(LABEL_FONT_SIZE + UI_SPACING)),
    )
}

impl App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.draw_top_bar(ctx);
        self.draw_content(ctx);
        self.drain_value_events();
    }
}

fn init_logging() -> anyhow::Result<()> {
    // Initialize tracing to log to terminal (stdout) in debug mode
    #[cfg(debug_assertions)]
    {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install the fmt subscriber: {}", e))?;
    }

    #[cfg(not(debug_assertions))]
    {
        // In release mode, set up a no-op subscriber to disable logging
        use anyhow::Context;
        use tracing_subscriber::Registry;
        let noop_subscriber = Registry::default();
        tracing::subscriber::set_global_default(noop_subscriber)
            .context("Failed to set global subscriber.")?;
    }

    Ok(())
}

fn main() -> eframe::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("{:?}", e);
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0]),
        ..Default::default()
    };

    let run_span = tracing::span!(Level::INFO, "Run Native");
    run_span.in_scope(|| {
        eframe::run_native(
            "Tweak Panel",
            options,
            Box::new(|cc| Ok(Box::new(MyApp::new(cc)))),
        )
    })
}
