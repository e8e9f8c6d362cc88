use thiserror::Error;

/// Errors raised while building a `Catalog`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no categories")]
    Empty,

    #[error("category '{0}' contains no items")]
    EmptyCategory(String),

    #[error("category '{0}' is defined more than once")]
    DuplicateCategory(String),

    #[error("item '{item}' in category '{category}' is already part of the catalog")]
    DuplicateItem { item: String, category: String },

    #[error("could not read catalog: {0}")]
    Io(String),

    #[error("could not parse catalog: {0}")]
    Parse(String),
}

/// Errors raised by selection operations. The selection is left untouched
/// whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("no category selected")]
    NoCategorySelected,

    #[error("item '{item}' does not belong to category '{category}'")]
    ItemNotInCategory { item: String, category: String },
}
