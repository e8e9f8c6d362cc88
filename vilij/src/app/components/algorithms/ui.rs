use algo_selector::SelectorError;
use app_core::properties::{Properties, StringLookup};

use crate::app::resources::{PropertyKey, PropertyText};

impl super::AlgorithmPanel {
    /// Renders both radio groups. Clicks are applied after rendering, so at
    /// most one selection change happens per frame.
    pub fn render(
        &mut self,
        enabled: bool,
        properties: &Properties,
        ui: &mut egui::Ui,
    ) -> Result<(), SelectorError> {
        let mut clicked_category = None;
        let mut clicked_item = None;

        ui.add_enabled_ui(enabled, |ui| {
            ui.label(egui::RichText::new(properties.text(PropertyKey::SelectText)).strong());
            for control in self.selector.category_controls() {
                let label = properties.get_or_key(control.id);
                if ui.radio(control.selected, label).clicked() && !control.selected {
                    clicked_category = Some(control.id.to_owned());
                }
            }

            if self.selector.item_controls().next().is_some() {
                ui.separator();
                ui.label(
                    egui::RichText::new(properties.text(PropertyKey::AlgorithmsTitle)).strong(),
                );
                egui::ScrollArea::vertical()
                    .id_salt("algorithm_items")
                    .max_height(150.0)
                    .show(ui, |ui| {
                        for control in self.selector.item_controls() {
                            let label = properties.get_or_key(control.id);
                            if ui.radio(control.selected, label).clicked() && !control.selected {
                                clicked_item = Some(control.id.to_owned());
                            }
                        }
                    });
            }
        });

        if let Some(category) = clicked_category {
            self.selector.select_category(&category)?;
        } else if let Some(item) = clicked_item {
            self.selector.select_item(&item)?;
        }
        Ok(())
    }
}
