mod algorithms;
mod chart;
mod data_input;
mod dialog;

pub use algorithms::AlgorithmPanel;
pub use chart::Chart;
pub use data_input::{DataInput, EditToggle, InputResponse, TextChanged};
pub use dialog::{Dialog, DialogAnswer};
