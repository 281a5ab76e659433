use eframe::egui::{self, ComboBox as EguiComboBox, Response, Widget};
use egui::FontId;
use strum::IntoEnumIterator;

use crate::{config::MergePolicy, constants::LABEL_FONT_SIZE};

/// A combo box choosing how the panel merges announcements.
pub struct PolicyComboBox<'a> {
    id_source: &'static str,
    selected: &'a mut MergePolicy,
}

impl<'a> PolicyComboBox<'a> {
    pub fn new(selected: &'a mut MergePolicy) -> Self {
        Self {
            id_source: "merge_policy_combo_box",
            selected,
        }
    }
}

impl Widget for PolicyComboBox<'_> {
    fn ui(self, ui: &mut egui::Ui) -> Response {
        let Self {
            id_source,
            selected,
        } = self;

        let original = *selected;
        let selected_text = selected.to_string();

        // set the combo box width to the text width
        let text_width = ui.fonts(|fonts| {
            fonts
                .layout_no_wrap(
                    selected_text.clone(),
                    FontId::proportional(LABEL_FONT_SIZE),
                    egui::Color32::WHITE,
                )
                .size()
                .x
        });

        let mut response = EguiComboBox::from_id_salt(id_source)
            .selected_text(selected_text)
            .width(text_width)
            .show_ui(ui, |ui| {
                for policy in MergePolicy::iter() {
                    ui.selectable_value(selected, policy, policy.to_string());
                }
            })
            .response;

        if *selected != original {
            response.mark_changed();
        }

        response
    }
}
