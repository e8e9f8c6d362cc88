#![warn(clippy::all, rust_2018_idioms)]

//! Exclusive, two-level selection of an algorithm: first its category
//! (e.g. classification or clustering), then the algorithm itself.
//!
//! ```
//! use algo_selector::{Catalog, Category, Selector};
//!
//! let catalog = Catalog::new(vec![
//!     Category::new("Classification", &["KNN", "Perceptron"]),
//!     Category::new("Clustering", &["KMeans"]),
//! ])
//! .unwrap();
//! let mut selector = Selector::new(catalog);
//! selector.select_category("Clustering").unwrap();
//! selector.select_item("KMeans").unwrap();
//! assert_eq!(selector.current_selection().item.as_deref(), Some("KMeans"));
//! ```

mod catalog;
mod error;
mod selector;

pub use catalog::{Catalog, Category, Item};
pub use error::{CatalogError, SelectorError};
pub use selector::{Control, SelectionChanged, SelectionObserver, Selector, SelectorState};
