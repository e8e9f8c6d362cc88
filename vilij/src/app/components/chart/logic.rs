use algo_selector::SelectionChanged;
use app_core::properties::{Properties, StringLookup};
use tsd_parser::DataSet;

use crate::app::resources::{PropertyKey, PropertyText};

/// Relative margin added around the data when fitting the bounds.
const BOUNDS_MARGIN: f64 = 0.1;

impl super::Chart {
    pub fn set_data(&mut self, data: DataSet) {
        log::debug!("displaying {} instances", data.len());
        self.request_plot_bounds = data.bounds().map(padded_bounds);
        self.data = Some(data);
    }

    pub fn data(&self) -> Option<&DataSet> {
        self.data.as_ref()
    }

    pub fn clear(&mut self) {
        self.data = None;
        self.request_plot_bounds = None;
    }

    pub fn apply_selection(&mut self, event: &SelectionChanged) {
        self.selection.category = event.category.clone();
        self.selection.item = event.item.clone();
    }

    /// The chart title, extended by the selected algorithm (if any).
    pub fn title(&self, properties: &Properties) -> String {
        let title = properties.text(PropertyKey::ChartTitle);
        match &self.selection.item {
            Some(item) => format!("{title} ({})", properties.get_or_key(item)),
            None => title.to_owned(),
        }
    }

    pub fn apply_bounds(&mut self, bounds: [f64; 4]) {
        self.request_plot_bounds = Some(bounds);
    }

    pub fn get_current_plot_bounds(&self) -> [f64; 4] {
        self.current_plot_bounds
    }
}

/// Widens `[xmin, xmax, ymin, ymax]` so points do not sit on the border.
/// Degenerate ranges (a single point) get a span of 1.
fn padded_bounds([xmin, xmax, ymin, ymax]: [f64; 4]) -> [f64; 4] {
    let pad = |min: f64, max: f64| {
        let span = max - min;
        if span > 0.0 {
            (min - span * BOUNDS_MARGIN, max + span * BOUNDS_MARGIN)
        } else {
            (min - 0.5, max + 0.5)
        }
    };
    let (xmin, xmax) = pad(xmin, xmax);
    let (ymin, ymax) = pad(ymin, ymax);
    [xmin, xmax, ymin, ymax]
}
