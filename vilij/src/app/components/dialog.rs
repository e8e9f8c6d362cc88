use app_core::properties::Properties;

use crate::app::resources::{PropertyKey, PropertyText};

/// Modal dialogs. Only one is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Error { title: String, message: String },
    /// Asks whether unsaved work should be saved before it is discarded.
    UnsavedWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAnswer {
    Dismissed,
    Save,
    Discard,
    Cancel,
}

impl Dialog {
    /// Builds an error dialog from property keys, the error itself is
    /// appended to the message.
    pub fn error(
        properties: &Properties,
        title: PropertyKey,
        message: PropertyKey,
        error: &dyn std::fmt::Display,
    ) -> Self {
        Dialog::Error {
            title: properties.text(title).to_owned(),
            message: format!("{}\n\n{}", properties.text(message), error),
        }
    }

    pub fn render(&self, properties: &Properties, ctx: &egui::Context) -> Option<DialogAnswer> {
        let mut answer = None;
        let modal = egui::Modal::new("dialog".into()).show(ctx, |ui| {
            ui.set_max_width(400.0);
            match self {
                Dialog::Error { title, message } => {
                    ui.heading(title);
                    ui.separator();
                    ui.label(message);
                    ui.separator();
                    if ui.button(properties.text(PropertyKey::OkText)).clicked() {
                        answer = Some(DialogAnswer::Dismissed);
                    }
                }
                Dialog::UnsavedWork => {
                    ui.heading(properties.text(PropertyKey::SaveUnsavedWorkTitle));
                    ui.separator();
                    ui.label(properties.text(PropertyKey::SaveUnsavedWork));
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button(properties.text(PropertyKey::YesText)).clicked() {
                            answer = Some(DialogAnswer::Save);
                        }
                        if ui.button(properties.text(PropertyKey::NoText)).clicked() {
                            answer = Some(DialogAnswer::Discard);
                        }
                        if ui.button(properties.text(PropertyKey::CancelText)).clicked() {
                            answer = Some(DialogAnswer::Cancel);
                        }
                    });
                }
            }
        });
        // Escape or a click outside the modal.
        if answer.is_none() && modal.should_close() {
            answer = Some(match self {
                Dialog::Error { .. } => DialogAnswer::Dismissed,
                Dialog::UnsavedWork => DialogAnswer::Cancel,
            });
        }
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_dialog_text() {
        let properties =
            Properties::parse("LOAD_ERROR_TITLE=Load Error\nLOAD_ERROR_MESSAGE=Could not load.")
                .unwrap();
        let dialog = Dialog::error(
            &properties,
            PropertyKey::LoadErrorTitle,
            PropertyKey::LoadErrorMessage,
            &"file not found",
        );
        assert_eq!(
            dialog,
            Dialog::Error {
                title: "Load Error".into(),
                message: "Could not load.\n\nfile not found".into()
            }
        );
    }
}
