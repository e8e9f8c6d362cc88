mod ui;

use std::sync::mpsc::Sender;

use algo_selector::{Catalog, SelectionChanged, Selector, SelectorError, SelectorState};

/// Radio button groups for the algorithm type and the algorithm itself.
#[derive(Debug)]
pub struct AlgorithmPanel {
    selector: Selector,
}

impl AlgorithmPanel {
    pub fn new(catalog: Catalog, selection_tx: Sender<SelectionChanged>) -> Self {
        let mut selector = Selector::new(catalog);
        selector.subscribe(selection_tx);
        Self { selector }
    }

    pub fn selection(&self) -> SelectorState {
        self.selector.current_selection()
    }

    pub fn clear(&mut self) {
        self.selector.clear();
    }

    /// Checks a stored selection against the catalog.
    pub fn validate(&self, state: &SelectorState) -> Result<(), SelectorError> {
        self.selector.validate(state)
    }

    /// Re-applies a stored selection. An invalid selection is rejected and
    /// the current one is kept.
    pub fn restore(&mut self, state: &SelectorState) -> Result<(), SelectorError> {
        self.selector.validate(state)?;
        match (&state.category, &state.item) {
            (Some(category), item) => {
                self.selector.select_category(category)?;
                if let Some(item) = item {
                    self.selector.select_item(item)?;
                }
            }
            _ => self.selector.clear(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use algo_selector::Category;

    use super::*;

    fn panel() -> (AlgorithmPanel, std::sync::mpsc::Receiver<SelectionChanged>) {
        let catalog = Catalog::new(vec![
            Category::new("Classification", &["RandomClassifier"]),
            Category::new("Clustering", &["RandomClusterer", "KMeansClusterer"]),
        ])
        .unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        (AlgorithmPanel::new(catalog, tx), rx)
    }

    #[test]
    fn test_restore_valid_selection() {
        let (mut panel, rx) = panel();
        let state = SelectorState {
            category: Some("Clustering".into()),
            item: Some("KMeansClusterer".into()),
        };
        panel.restore(&state).unwrap();
        assert_eq!(panel.selection(), state);
        let last = rx.try_iter().last().unwrap();
        assert_eq!(last.item.as_deref(), Some("KMeansClusterer"));
    }

    #[test]
    fn test_restore_invalid_selection_keeps_current() {
        let (mut panel, rx) = panel();
        panel.restore(&SelectorState {
            category: Some("Classification".into()),
            item: None,
        })
        .unwrap();
        let _ = rx.try_iter().count();

        let state = SelectorState {
            category: Some("Clustering".into()),
            item: Some("RandomClassifier".into()),
        };
        assert!(matches!(
            panel.restore(&state),
            Err(SelectorError::ItemNotInCategory { .. })
        ));
        assert_eq!(panel.selection().category.as_deref(), Some("Classification"));
        assert_eq!(rx.try_iter().count(), 0);

        let orphan = SelectorState {
            category: None,
            item: Some("RandomClassifier".into()),
        };
        assert_eq!(
            panel.restore(&orphan),
            Err(SelectorError::NoCategorySelected)
        );
    }
}
