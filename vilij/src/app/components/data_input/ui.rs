use app_core::properties::Properties;

use crate::app::resources::{PropertyKey, PropertyText};

use super::TextChanged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditToggle {
    Start,
    Finish,
}

/// What happened in the data input during one frame. A content change and
/// an Edit/Done click can both occur in the same frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputResponse {
    pub changed: Option<TextChanged>,
    pub toggle: Option<EditToggle>,
}

impl super::DataInput {
    pub fn render(&mut self, properties: &Properties, ui: &mut egui::Ui) -> InputResponse {
        let mut response = InputResponse::default();

        ui.heading(properties.text(PropertyKey::LeftPaneTitle));

        let text_edit = egui::TextEdit::multiline(&mut self.text)
            .code_editor()
            .interactive(self.is_editing)
            .desired_rows(12)
            .desired_width(f32::INFINITY);
        if ui.add(text_edit).changed() {
            response.changed = Some(self.on_edit());
        }

        ui.horizontal(|ui| {
            let (label, toggle) = if self.is_editing {
                (PropertyKey::DoneText, EditToggle::Finish)
            } else {
                (PropertyKey::EditText, EditToggle::Start)
            };
            if ui.button(properties.text(label)).clicked() {
                response.toggle = Some(toggle);
            }
        });

        let note = match &self.loaded_note {
            Some(note) => note.as_str(),
            None => properties.text(PropertyKey::NoDataLoadedInPlaceholder),
        };
        ui.add(egui::Label::new(note).wrap());

        response
    }
}
