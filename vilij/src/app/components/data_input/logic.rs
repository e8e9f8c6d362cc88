use tsd_parser::{DataSet, ParseError};

/// Emitted whenever the content of the text area changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChanged {
    pub is_empty: bool,
    pub has_new_line: bool,
}

impl super::DataInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    pub fn is_unsaved(&self) -> bool {
        self.is_unsaved
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn set_loaded_note(&mut self, note: Option<String>) {
        self.loaded_note = note;
    }

    /// Called after the user edited the text in place.
    pub(super) fn on_edit(&mut self) -> TextChanged {
        self.is_unsaved = true;
        self.update_signals()
    }

    /// Replaces the content, e.g. after loading a file. Returns `None` if the
    /// content did not change. The new content counts as saved.
    pub fn replace_text(&mut self, text: String) -> Option<TextChanged> {
        if text == self.text {
            return None;
        }
        self.text = text;
        self.is_unsaved = false;
        Some(self.update_signals())
    }

    pub fn clear(&mut self) -> Option<TextChanged> {
        self.loaded_note = None;
        self.is_editing = false;
        self.is_unsaved = false;
        self.replace_text(String::new())
    }

    pub fn mark_saved(&mut self) {
        self.is_unsaved = false;
    }

    pub fn start_editing(&mut self) {
        self.is_editing = true;
    }

    /// Parses the content. Edit mode is only left if the content is valid.
    pub fn finish_editing(&mut self) -> Result<DataSet, ParseError> {
        let data = self.parse()?;
        self.is_editing = false;
        Ok(data)
    }

    pub fn parse(&self) -> Result<DataSet, ParseError> {
        DataSet::parse(&self.text)
    }

    fn update_signals(&mut self) -> TextChanged {
        self.is_empty = self.text.is_empty();
        self.has_new_line = !self.is_empty && self.text.ends_with('\n');
        log::trace!(
            "text changed (empty: {}, new line: {})",
            self.is_empty,
            self.has_new_line
        );
        TextChanged {
            is_empty: self.is_empty,
            has_new_line: self.has_new_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::DataInput;
    use super::*;

    fn type_text(input: &mut DataInput, text: &str) -> TextChanged {
        input.text.push_str(text);
        input.on_edit()
    }

    #[test]
    fn test_initial_state() {
        let input = DataInput::new();
        assert!(input.is_empty());
        assert!(!input.has_new_line);
        assert!(!input.is_unsaved());
        assert!(!input.is_editing());
        assert_eq!(input.loaded_note.as_deref(), None);
    }

    #[test]
    fn test_signals_are_independent() {
        let mut input = DataInput::new();
        assert_eq!(
            type_text(&mut input, "@a\tnull\t1,2"),
            TextChanged {
                is_empty: false,
                has_new_line: false
            }
        );
        assert_eq!(
            type_text(&mut input, "\n"),
            TextChanged {
                is_empty: false,
                has_new_line: true
            }
        );
        assert!(input.is_unsaved());

        input.text.clear();
        assert_eq!(
            input.on_edit(),
            TextChanged {
                is_empty: true,
                has_new_line: false
            }
        );
    }

    #[test]
    fn test_replace_text() {
        let mut input = DataInput::new();
        type_text(&mut input, "@a\tnull\t1,2");
        let changed = input.replace_text("@b\tred\t0,0\n".into());
        assert_eq!(
            changed,
            Some(TextChanged {
                is_empty: false,
                has_new_line: true
            })
        );
        assert!(!input.is_unsaved());
        assert_eq!(input.replace_text("@b\tred\t0,0\n".into()), None);
    }

    #[test]
    fn test_clear() {
        let mut input = DataInput::new();
        input.start_editing();
        type_text(&mut input, "@a\tnull\t1,2\n");
        input.set_loaded_note(Some("loaded".into()));
        input.clear();
        assert!(input.is_empty());
        assert!(!input.is_editing());
        assert!(!input.is_unsaved());
        assert_eq!(input.loaded_note.as_deref(), None);
    }

    #[test]
    fn test_finish_editing() {
        let mut input = DataInput::new();
        input.start_editing();
        type_text(&mut input, "@a\tnull\t1,2\n@a\tnull\t3,4\n");
        assert!(matches!(
            input.finish_editing(),
            Err(ParseError::DuplicateName { line: 2, .. })
        ));
        assert!(input.is_editing());

        input.replace_text("@a\tnull\t1,2\n@b\tnull\t3,4\n".into());
        let data = input.finish_editing().unwrap();
        assert_eq!(data.len(), 2);
        assert!(!input.is_editing());
    }
}
