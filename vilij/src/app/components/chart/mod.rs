mod logic;
mod ui;

use algo_selector::SelectorState;
use tsd_parser::DataSet;

/// Scatter chart of the current data set, one series per label.
pub struct Chart {
    data: Option<DataSet>,
    /// Selection as last announced by the algorithm panel.
    selection: SelectorState,
    current_plot_bounds: [f64; 4],
    request_plot_bounds: Option<[f64; 4]>,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            data: None,
            selection: SelectorState::default(),
            current_plot_bounds: [0.0, 0.0, 0.0, 0.0],
            request_plot_bounds: None,
        }
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}
