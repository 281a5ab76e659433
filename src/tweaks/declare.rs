// src/tweaks/declare.rs

use egui::{InnerResponse, Ui};

use super::{TweakContext, TweakValue};

/// Marks `node` as tweakable under `label` and renders it through `render`
/// with the live value, or `initial` if the panel has none yet.
///
/// The announcement always carries `initial`, never the live value.
pub fn attach<N, O>(
    tweaks: &mut TweakContext<'_>,
    label: &str,
    initial: TweakValue,
    node: N,
    render: impl FnOnce(N, TweakValue) -> O,
) -> O {
    let value = tweaks.declare(label, initial);
    render(node, value)
}

/// egui form of [`attach`]: the wrapped content is drawn by `add_contents`,
/// which gets the context back so further tweakables can nest inside.
///
/// ```ignore
/// Tweakable::new("padding", 10.0).show(ui, tweaks, |ui, _tweaks, value| {
///     padding(ui, value, |ui| ui.label("Hello, world!"))
/// });
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Tweakable<'l> {
    label: &'l str,
    initial: TweakValue,
}

impl<'l> Tweakable<'l> {
    pub fn new(label: &'l str, initial: TweakValue) -> Self {
        Self { label, initial }
    }

    pub fn show<R>(
        self,
        ui: &mut Ui,
        tweaks: &mut TweakContext<'_>,
        add_contents: impl FnOnce(&mut Ui, &mut TweakContext<'_>, TweakValue) -> R,
    ) -> R {
        let value = tweaks.declare(self.label, self.initial);
        add_contents(ui, tweaks, value)
    }
}

/// Surrounds the contents with a uniform margin of `value` points.
pub fn padding<R>(
    ui: &mut Ui,
    value: TweakValue,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    egui::Frame::none()
        .inner_margin(egui::Margin::same(value))
        .show(ui, add_contents)
}

/// Shifts the contents right by `value` points.
pub fn offset_x<R>(
    ui: &mut Ui,
    value: TweakValue,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    ui.horizontal(|ui| {
        ui.add_space(value);
        add_contents(ui)
    })
}
