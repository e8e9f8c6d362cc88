use std::path::{Path, PathBuf};

use algo_selector::SelectorState;
use app_core::storage::Storage;
use serde::{Deserialize, Serialize};

use crate::VilijApp;

/// What a quick save stores. Everything else is derived from the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct SessionStorage {
    pub text: String,
    pub selection: SelectorState,
    pub current_file: Option<PathBuf>,
    #[serde(default)]
    pub plot_bounds: Option<[f64; 4]>,
}

pub fn save_json(app: &VilijApp, path: Option<&Path>) -> Result<(), String> {
    let storage = Storage::new(app.session());
    storage.save_json(path)
}

pub fn load_json(app: &mut VilijApp, path: Option<&Path>) -> Result<(), String> {
    let Storage::<SessionStorage> { session } = Storage::load_json(path)?;
    app.restore_session(session)?;
    app.request_redraw();
    Ok(())
}
