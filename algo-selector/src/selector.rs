use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::{Catalog, SelectorError};

/// The current (category, item) selection.
///
/// A selected item always belongs to the selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectorState {
    pub category: Option<String>,
    pub item: Option<String>,
}

impl SelectorState {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.item.is_none()
    }
}

/// Sent to observers after every state-changing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    pub category: Option<String>,
    pub item: Option<String>,
}

impl From<&SelectorState> for SelectionChanged {
    fn from(state: &SelectorState) -> Self {
        Self {
            category: state.category.clone(),
            item: state.item.clone(),
        }
    }
}

pub trait SelectionObserver {
    fn selection_changed(&mut self, event: &SelectionChanged);
}

impl SelectionObserver for Sender<SelectionChanged> {
    fn selection_changed(&mut self, event: &SelectionChanged) {
        if self.send(event.clone()).is_err() {
            log::warn!("Trying to send selection change on closed channel.");
        }
    }
}

struct FnObserver<F>(F);

impl<F: FnMut(&SelectionChanged)> SelectionObserver for FnObserver<F> {
    fn selection_changed(&mut self, event: &SelectionChanged) {
        (self.0)(event)
    }
}

/// A selectable control as it should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control<'a> {
    pub id: &'a str,
    pub selected: bool,
}

/// Two coupled single-choice groups: one for the category, one for the items
/// of the selected category.
pub struct Selector {
    catalog: Catalog,
    state: SelectorState,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl Selector {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: SelectorState::default(),
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl SelectionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn subscribe_fn(&mut self, callback: impl FnMut(&SelectionChanged) + 'static) {
        self.subscribe(FnObserver(callback));
    }

    /// Replaces the catalog and resets the selection. Observers are only
    /// notified if there was a selection to reset.
    pub fn load_catalog(&mut self, catalog: Catalog) {
        log::debug!(
            "loading catalog with {} categories",
            catalog.num_categories()
        );
        self.catalog = catalog;
        if !self.state.is_empty() {
            self.state = SelectorState::default();
            self.notify();
        }
    }

    pub fn select_category(&mut self, category_id: &str) -> Result<(), SelectorError> {
        let Some(category) = self.catalog.category(category_id) else {
            return Err(SelectorError::UnknownCategory(category_id.to_owned()));
        };
        log::debug!("selecting category '{}'", category.id);
        self.state = SelectorState {
            category: Some(category.id.clone()),
            item: None,
        };
        self.notify();
        Ok(())
    }

    pub fn select_item(&mut self, item_id: &str) -> Result<(), SelectorError> {
        let Some(category_id) = self.state.category.as_deref() else {
            return Err(SelectorError::NoCategorySelected);
        };
        if !self.belongs(item_id, category_id) {
            return Err(SelectorError::ItemNotInCategory {
                item: item_id.to_owned(),
                category: category_id.to_owned(),
            });
        }
        log::debug!("selecting item '{item_id}' of category '{category_id}'");
        self.state.item = Some(item_id.to_owned());
        self.notify();
        Ok(())
    }

    /// Checks that `state` is reachable by selecting its category and then
    /// its item. The current selection is not touched.
    pub fn validate(&self, state: &SelectorState) -> Result<(), SelectorError> {
        match (&state.category, &state.item) {
            (None, None) => Ok(()),
            (None, Some(_)) => Err(SelectorError::NoCategorySelected),
            (Some(category), _) if !self.catalog.contains_category(category) => {
                Err(SelectorError::UnknownCategory(category.clone()))
            }
            (Some(category), Some(item)) if !self.belongs(item, category) => {
                Err(SelectorError::ItemNotInCategory {
                    item: item.clone(),
                    category: category.clone(),
                })
            }
            (Some(_), _) => Ok(()),
        }
    }

    fn belongs(&self, item_id: &str, category_id: &str) -> bool {
        self.catalog
            .item(item_id)
            .is_some_and(|item| item.category == category_id)
    }

    pub fn current_selection(&self) -> SelectorState {
        self.state.clone()
    }

    pub fn clear(&mut self) {
        log::debug!("clearing selection");
        self.state = SelectorState::default();
        self.notify();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn category_controls(&self) -> impl Iterator<Item = Control<'_>> {
        let selected = self.state.category.as_deref();
        self.catalog.categories().map(move |category| Control {
            id: &category.id,
            selected: selected == Some(category.id.as_str()),
        })
    }

    /// Controls for the items of the selected category, empty if no category
    /// is selected.
    pub fn item_controls(&self) -> impl Iterator<Item = Control<'_>> {
        let selected = self.state.item.as_deref();
        self.state
            .category
            .as_deref()
            .and_then(|category_id| self.catalog.items(category_id))
            .unwrap_or_default()
            .iter()
            .map(move |item| Control {
                id: item,
                selected: selected == Some(item.as_str()),
            })
    }

    fn notify(&mut self) {
        let event = SelectionChanged::from(&self.state);
        for observer in self.observers.iter_mut() {
            observer.selection_changed(&event);
        }
    }
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("catalog", &self.catalog)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
