// src/ui/slider.rs

use std::ops::RangeInclusive;

use eframe::egui::{self, Response, Widget};

use crate::{constants::SLIDER_WIDTH, tweaks::TweakValue};

/// A fixed-width slider bound to one tweakable value.
pub struct TweakSlider<'a> {
    value: &'a mut TweakValue,
    range: RangeInclusive<TweakValue>,
}

impl<'a> TweakSlider<'a> {
    pub fn new(value: &'a mut TweakValue, range: RangeInclusive<TweakValue>) -> Self {
        Self { value, range }
    }
}

impl Widget for TweakSlider<'_> {
    fn ui(self, ui: &mut egui::Ui) -> Response {
        let Self { value, range } = self;

        let before = *value;
        ui.spacing_mut().slider_width = SLIDER_WIDTH;
        let mut response = ui.add(egui::Slider::new(&mut *value, range.clone()));

        *value = value.clamp(*range.start(), *range.end());
        if *value != before {
            response.mark_changed();
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_value_clamped_on_draw() {
        let ctx = egui::Context::default();
        let mut value: TweakValue = 250.0;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(TweakSlider::new(&mut value, 1.0..=100.0));
            });
        });

        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_in_range_value_untouched() {
        let ctx = egui::Context::default();
        let mut value: TweakValue = 42.0;
        let mut changed = true;

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = ui.add(TweakSlider::new(&mut value, 1.0..=100.0)).changed();
            });
        });

        assert_eq!(value, 42.0);
        assert!(!changed);
    }
}
