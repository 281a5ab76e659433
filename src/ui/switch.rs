// src/ui/switch.rs

use eframe::egui::{self, Color32, Pos2, Response, Sense, Ui, Widget};

/// Pill-shaped on/off switch bound to a boolean.
pub struct ToggleSwitch<'a> {
    on: &'a mut bool,
}

impl<'a> ToggleSwitch<'a> {
    pub fn new(on: &'a mut bool) -> Self {
        Self { on }
    }
}

impl Widget for ToggleSwitch<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = ui.spacing().interact_size.y * egui::vec2(2.0, 1.0);
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click());

        if response.clicked() {
            *self.on = !*self.on;
            response.mark_changed();
        }

        let on = *self.on;
        response.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::Checkbox, ui.is_enabled(), on, "")
        });

        if ui.is_rect_visible(rect) {
            let radius = rect.height() / 2.0;
            let track_color = if on {
                Color32::from_rgb(0, 200, 0)
            } else {
                Color32::from_rgb(200, 200, 200)
            };

            ui.painter().rect_filled(rect, radius, track_color);

            let knob_x = if on {
                rect.right() - radius
            } else {
                rect.left() + radius
            };
            ui.painter().circle_filled(
                Pos2::new(knob_x, rect.center().y),
                radius * 0.75,
                Color32::WHITE,
            );
        }

        response
    }
}
