// src/ui/panel.rs

use std::collections::BTreeMap;

use crossbeam::channel::Receiver;
use eframe::egui::{self, RichText, Ui};
use egui::FontId;

use super::slider::TweakSlider;
use crate::{
    config::{MergePolicy, PanelConfig},
    constants::{LABEL_FONT_SIZE, SLIDER_LABEL_WIDTH, UI_PADDING, UI_SPACING},
    errors::TweakError,
    tweaks::{
        announce::{AnnouncementBoard, BoardEvent},
        values::{ValueEvent, ValueRegistry},
        TweakContext, TweakValue,
    },
};

const EDITOR_PANEL_ID: &str = "tweak_panel_editor";

/// Owns the live tweak values and draws one slider per announced label in a
/// fixed-height panel at the bottom of the screen.
pub struct TweakPanel {
    config: PanelConfig,
    values: ValueRegistry,
    board: AnnouncementBoard,
    board_events: Receiver<BoardEvent>,
}

impl Default for TweakPanel {
    fn default() -> Self {
        Self::new(PanelConfig::default())
    }
}

impl TweakPanel {
    pub fn new(config: PanelConfig) -> Self {
        let mut board = AnnouncementBoard::new();
        let board_events = board.subscribe();
        Self {
            values: ValueRegistry::new(config.value_range.clone()),
            config,
            board,
            board_events,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.config.merge_policy
    }

    /// Takes effect on the next announcement change.
    pub fn set_merge_policy(&mut self, policy: MergePolicy) {
        if self.config.merge_policy != policy {
            tracing::debug!("Merge policy changed to {}", policy);
            self.config.merge_policy = policy;
        }
    }

    pub fn values(&self) -> &ValueRegistry {
        &self.values
    }

    pub fn value(&self, label: &str) -> Option<TweakValue> {
        self.values.lookup(label)
    }

    pub fn subscribe_values(&mut self) -> Receiver<ValueEvent> {
        self.values.subscribe()
    }

    /// Applies a slider edit. The stored (clamped) value is visible to every
    /// declaration site drawn after this call.
    pub fn set_value(&mut self, label: &str, value: TweakValue) -> Result<TweakValue, TweakError> {
        self.values.set(label, value)
    }

    /// Puts every mounted label back to its announced default.
    pub fn reset_to_defaults(&mut self) {
        tracing::debug!("Resetting tweaks to announced defaults");
        self.values.clear_edits();
        self.apply_announcements(self.board.merged());
    }

    /// Wraps `add_contents` with the slider editor. The editor is drawn first
    /// so edits reach the content in the same frame.
    pub fn show<R>(
        &mut self,
        ctx: &egui::Context,
        add_contents: impl FnOnce(&mut Ui, &mut TweakContext<'_>) -> R,
    ) -> R {
        self.draw_editor(ctx);

        let (inner, changed) = egui::CentralPanel::default()
            .show(ctx, |ui| self.run_frame(|tweaks| add_contents(ui, tweaks)))
            .inner;

        // New or removed labels only show up in the editor on the next pass.
        if changed {
            ctx.request_repaint();
        }
        inner
    }

    /// One frame of the declare/merge cycle without drawing the editor.
    pub fn render_frame<R>(&mut self, add_contents: impl FnOnce(&mut TweakContext<'_>) -> R) -> R {
        self.run_frame(add_contents).0
    }

    fn run_frame<R>(&mut self, add_contents: impl FnOnce(&mut TweakContext<'_>) -> R) -> (R, bool) {
        self.board.begin_frame();
        let inner = {
            let mut tweaks = TweakContext::new(&self.values, &mut self.board);
            add_contents(&mut tweaks)
        };
        self.board.end_frame();
        let changed = self.sync();
        (inner, changed)
    }

    /// Folds pending mount/unmount events into the stored values. Returns
    /// whether anything was announced since the last call.
    fn sync(&mut self) -> bool {
        let mut changed = false;
        for event in self.board_events.try_iter() {
            tracing::debug!("Announcement event: {:?}", event);
            changed = true;
        }
        if changed {
            self.apply_announcements(self.board.merged());
        }
        changed
    }

    fn apply_announcements(&mut self, announced: BTreeMap<String, TweakValue>) {
        match self.config.merge_policy {
            MergePolicy::Replace => self.values.replace_all(announced),
            MergePolicy::Preserve => self.values.merge_defaults(announced),
        }
    }

    fn draw_editor(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom(EDITOR_PANEL_ID)
            .exact_height(self.config.panel_height)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin::same(UI_PADDING))
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .auto_shrink([false; 2])
                            .show(ui, |ui| self.draw_sliders(ui));
                    });
            });
    }

    fn draw_sliders(&mut self, ui: &mut Ui) {
        if self.values.is_empty() {
            ui.label(RichText::new("No tweakable values mounted").weak());
            return;
        }

        let labels: Vec<String> = self.values.labels().map(str::to_owned).collect();
        let range = self.values.range();

        egui::Grid::new("tweak_slider_grid")
            .num_columns(2)
            .min_col_width(SLIDER_LABEL_WIDTH)
            .spacing([UI_SPACING, UI_SPACING / 2.0])
            .show(ui, |ui| {
                for label in &labels {
                    let Some(mut value) = self.values.lookup(label) else {
                        tracing::warn!("Skipping slider for unregistered tweak '{}'", label);
                        continue;
                    };

                    ui.label(RichText::new(label).font(FontId::proportional(LABEL_FONT_SIZE)));
                    if ui.add(TweakSlider::new(&mut value, range.clone())).changed() {
                        if let Err(e) = self.set_value(label, value) {
                            tracing::warn!("Failed to apply slider edit: {}", e);
                        }
                    }
                    ui.end_row();
                }
            });

        ui.add_space(UI_SPACING);
        if ui.button("Reset to defaults").clicked() {
            self.reset_to_defaults();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tweaks::declare::{attach, offset_x, padding, Tweakable};

    /// Declares the two tweakables of the demo view and returns what each
    /// site rendered with.
    fn demo_frame(panel: &mut TweakPanel) -> (TweakValue, TweakValue) {
        panel.render_frame(|tweaks| {
            let padding = attach(tweaks, "padding", 10.0, (), |_, value| value);
            let offset = attach(tweaks, "offset", 10.0, (), |_, value| value);
            (padding, offset)
        })
    }

    fn labels(panel: &TweakPanel) -> Vec<String> {
        panel.values().labels().map(str::to_owned).collect()
    }

    #[test]
    fn test_first_mount_uses_defaults() {
        let mut panel = TweakPanel::default();
        assert_eq!(demo_frame(&mut panel), (10.0, 10.0));
        assert_eq!(panel.value("padding"), Some(10.0));
        assert_eq!(panel.value("offset"), Some(10.0));
    }

    #[test]
    fn test_site_sees_default_before_panel_observes_it() {
        let mut panel = TweakPanel::default();
        let resolved = panel.render_frame(|tweaks| {
            let value = tweaks.declare("padding", 10.0);
            (value, tweaks.lookup("padding"))
        });
        assert_eq!(resolved, (10.0, None));
        assert_eq!(panel.value("padding"), Some(10.0));
    }

    #[test]
    fn test_padding_edit_regression() {
        let mut panel = TweakPanel::default();
        demo_frame(&mut panel);

        assert_eq!(labels(&panel), vec!["offset", "padding"]);

        panel.set_value("padding", 50.0).unwrap();
        assert_eq!(demo_frame(&mut panel), (50.0, 10.0));
    }

    #[test]
    fn test_edit_visible_to_every_site_sharing_label() {
        let mut panel = TweakPanel::default();
        let frame = |panel: &mut TweakPanel| {
            panel.render_frame(|tweaks| {
                let a = attach(tweaks, "padding", 10.0, (), |_, value| value);
                let b = attach(tweaks, "padding", 10.0, (), |_, value| value);
                (a, b)
            })
        };
        frame(&mut panel);
        panel.set_value("padding", 64.0).unwrap();
        assert_eq!(frame(&mut panel), (64.0, 64.0));
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut panel = TweakPanel::default();
        let events = panel.subscribe_values();
        demo_frame(&mut panel);
        panel.set_value("offset", 33.0).unwrap();
        let before = panel.values().snapshot();
        let _ = events.try_iter().count();

        for _ in 0..5 {
            assert_eq!(demo_frame(&mut panel), (10.0, 33.0));
        }

        assert_eq!(panel.values().snapshot(), before);
        assert_eq!(events.try_iter().count(), 0);
    }

    #[test]
    fn test_slider_values_clamped() {
        let mut panel = TweakPanel::default();
        demo_frame(&mut panel);

        assert_eq!(panel.set_value("padding", 1000.0), Ok(100.0));
        assert_eq!(panel.set_value("offset", 0.0), Ok(1.0));
        assert!(panel.set_value("offset", f32::INFINITY).is_err());
        assert_eq!(demo_frame(&mut panel), (100.0, 1.0));
    }

    #[test]
    fn test_remount_preserves_edit_by_default() {
        let mut panel = TweakPanel::default();
        demo_frame(&mut panel);
        panel.set_value("padding", 50.0).unwrap();

        // Unmount everything for one frame, then mount again.
        panel.render_frame(|_| ());
        assert_eq!(panel.value("padding"), Some(50.0));
        assert_eq!(demo_frame(&mut panel), (50.0, 10.0));
    }

    #[test]
    fn test_remount_resets_edit_with_replace_policy() {
        let mut panel = TweakPanel::new(PanelConfig::default().with_merge_policy(MergePolicy::Replace));
        demo_frame(&mut panel);
        panel.set_value("padding", 50.0).unwrap();

        panel.render_frame(|_| ());
        assert!(panel.values().is_empty());

        assert_eq!(demo_frame(&mut panel), (10.0, 10.0));
        assert_eq!(panel.value("padding"), Some(10.0));
    }

    #[test]
    fn test_replace_policy_resets_all_on_any_mount() {
        let mut panel = TweakPanel::new(PanelConfig::default().with_merge_policy(MergePolicy::Replace));
        demo_frame(&mut panel);
        panel.set_value("padding", 50.0).unwrap();

        panel.render_frame(|tweaks| {
            attach(tweaks, "padding", 10.0, (), |_, _| ());
            attach(tweaks, "offset", 10.0, (), |_, _| ());
            attach(tweaks, "scale", 5.0, (), |_, _| ());
        });

        assert_eq!(panel.value("padding"), Some(10.0));
        assert_eq!(panel.value("scale"), Some(5.0));
    }

    #[test]
    fn test_preserve_policy_keeps_unmounted_labels() {
        let mut panel = TweakPanel::default();
        demo_frame(&mut panel);
        panel.render_frame(|tweaks| {
            attach(tweaks, "padding", 10.0, (), |_, _| ());
        });
        assert_eq!(labels(&panel), vec!["offset", "padding"]);
    }

    #[test]
    fn test_duplicate_label_single_entry() {
        let mut panel = TweakPanel::default();
        panel.render_frame(|tweaks| {
            attach(tweaks, "padding", 10.0, (), |_, _| ());
            attach(tweaks, "padding", 20.0, (), |_, _| ());
        });

        assert_eq!(labels(&panel), vec!["padding"]);
        assert_eq!(panel.value("padding"), Some(20.0));
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut panel = TweakPanel::default();
        demo_frame(&mut panel);
        panel.set_value("padding", 50.0).unwrap();
        panel.set_value("offset", 70.0).unwrap();

        panel.reset_to_defaults();

        assert_eq!(demo_frame(&mut panel), (10.0, 10.0));
        assert!(!panel.values().is_edited("padding"));
    }

    #[test]
    fn test_unknown_label_edit_rejected() {
        let mut panel = TweakPanel::default();
        assert_eq!(
            panel.set_value("padding", 10.0),
            Err(TweakError::UnknownLabel("padding".to_string()))
        );
    }

    #[test]
    fn test_show_with_egui_context() {
        let mut panel = TweakPanel::default();
        let ctx = egui::Context::default();
        let mut rendered = Vec::new();

        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                let values = panel.show(ctx, |ui, tweaks| {
                    Tweakable::new("padding", 10.0).show(ui, tweaks, |ui, tweaks, pad| {
                        Tweakable::new("offset", 10.0).show(ui, tweaks, |ui, _, offset| {
                            padding(ui, pad, |ui| {
                                offset_x(ui, offset, |ui| ui.label("Hello, world!"));
                            });
                            (pad, offset)
                        })
                    })
                });
                rendered.push(values);
            });
        }

        // egui may run a pass more than once, so only the values are checked.
        assert!(rendered.len() >= 2);
        assert!(rendered.iter().all(|values| *values == (10.0, 10.0)));
        assert_eq!(labels(&panel), vec!["offset", "padding"]);
    }
}
