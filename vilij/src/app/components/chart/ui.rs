use app_core::properties::Properties;
use egui_plot::{Legend, PlotBounds, Points};

impl super::Chart {
    pub fn render(&mut self, properties: &Properties, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| ui.heading(self.title(properties)));

        let request_plot_bounds = self.request_plot_bounds.take();
        let response = egui_plot::Plot::new("chart")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                if let Some([xmin, xmax, ymin, ymax]) = request_plot_bounds {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([xmin, ymin], [xmax, ymax]));
                }

                if let Some(data) = &self.data {
                    for (idx, (label, points)) in data.series().into_iter().enumerate() {
                        // Unlabelled instances are listed under the raw "null" label.
                        let name = label.unwrap_or(tsd_parser::NULL_LABEL);
                        plot_ui.points(
                            Points::new(points)
                                .name(name)
                                .color(auto_color(idx as i32))
                                .radius(4.0),
                        );
                    }
                }

                // Exfiltrate the bounds from the closure.
                let [xmin, ymin] = plot_ui.plot_bounds().min();
                let [xmax, ymax] = plot_ui.plot_bounds().max();
                [xmin, xmax, ymin, ymax]
            });
        self.current_plot_bounds = response.inner;
    }
}

pub fn auto_color(color_idx: i32) -> egui::Color32 {
    // analog to egui_plot
    let golden_ratio = (5.0_f32.sqrt() - 1.0) / 2.0; // 0.61803398875
    let h = color_idx as f32 * golden_ratio;
    egui::epaint::Hsva::new(h, 0.85, 0.5, 1.0).into()
}
