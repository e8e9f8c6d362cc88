mod logic;
mod ui;

pub use logic::TextChanged;
pub use ui::{EditToggle, InputResponse};

/// The text area in which data is typed, together with the signals derived
/// from its content.
#[derive(Debug)]
pub struct DataInput {
    text: String,
    is_empty: bool,
    /// Set if the content ends with a line break, independent of `is_empty`.
    has_new_line: bool,
    is_unsaved: bool,
    is_editing: bool,
    loaded_note: Option<String>,
}

impl DataInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            is_empty: true,
            has_new_line: false,
            is_unsaved: false,
            is_editing: false,
            loaded_note: None,
        }
    }
}

impl Default for DataInput {
    fn default() -> Self {
        Self::new()
    }
}
