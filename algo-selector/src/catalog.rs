//! The read-only mapping of algorithm categories to the algorithms they
//! contain.

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use crate::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub id: String,
    pub items: Vec<String>,
}

impl Category {
    pub fn new(id: &str, items: &[&str]) -> Self {
        Self {
            id: id.to_owned(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// An item together with the category it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item<'a> {
    pub id: &'a str,
    pub category: &'a str,
}

/// Validated, ordered collection of categories.
///
/// A catalog is never empty, every category owns at least one item, and
/// each item belongs to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    // item id -> index into `categories`
    owners: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut owners = HashMap::new();
        for (idx, category) in categories.iter().enumerate() {
            if categories[..idx].iter().any(|c| c.id == category.id) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
            if category.items.is_empty() {
                return Err(CatalogError::EmptyCategory(category.id.clone()));
            }
            for item in category.items.iter() {
                if owners.insert(item.clone(), idx).is_some() {
                    return Err(CatalogError::DuplicateItem {
                        item: item.clone(),
                        category: category.id.clone(),
                    });
                }
            }
        }
        log::debug!(
            "built catalog with {} categories and {} items",
            categories.len(),
            owners.len()
        );
        Ok(Self { categories, owners })
    }

    /// Parses a JSON array of `{"category": ..., "items": [...]}` objects.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        Self::new(categories)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|err| CatalogError::Io(format!("{path:?}: {err}")))?;
        Self::from_json(&raw)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn contains_category(&self, category_id: &str) -> bool {
        self.category(category_id).is_some()
    }

    /// Items of a category in catalog order.
    pub fn items(&self, category_id: &str) -> Option<&[String]> {
        self.category(category_id).map(|c| c.items.as_slice())
    }

    pub fn item(&self, item_id: &str) -> Option<Item<'_>> {
        let (id, idx) = self.owners.get_key_value(item_id)?;
        Some(Item {
            id,
            category: &self.categories[*idx].id,
        })
    }

    pub fn num_categories(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_order() {
        let catalog = Catalog::from_json(
            r#"[
                {"category": "Clustering", "items": ["KMeans", "RandomClustering"]},
                {"category": "Classification", "items": ["RandomClassifier"]}
            ]"#,
        )
        .unwrap();
        let ids: Vec<_> = catalog.categories().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["Clustering", "Classification"]);
        assert_eq!(
            catalog.items("Clustering").unwrap(),
            ["KMeans", "RandomClustering"]
        );
        assert_eq!(
            catalog.item("RandomClassifier"),
            Some(Item {
                id: "RandomClassifier",
                category: "Classification"
            })
        );
        assert_eq!(catalog.item("Perceptron"), None);
    }

    #[test]
    fn test_invalid_catalogs() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
        assert_eq!(
            Catalog::new(vec![Category::new("A", &[])]),
            Err(CatalogError::EmptyCategory("A".into()))
        );
        assert_eq!(
            Catalog::new(vec![Category::new("A", &["x"]), Category::new("A", &["y"])]),
            Err(CatalogError::DuplicateCategory("A".into()))
        );
        assert_eq!(
            Catalog::new(vec![Category::new("A", &["x"]), Category::new("B", &["x"])]),
            Err(CatalogError::DuplicateItem {
                item: "x".into(),
                category: "B".into()
            })
        );
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algorithms.json");
        std::fs::write(&path, r#"[{"category": "Clustering", "items": ["KMeans"]}]"#).unwrap();
        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.num_categories(), 1);
        assert!(catalog.contains_category("Clustering"));
        assert!(matches!(
            Catalog::from_path(&dir.path().join("missing.json")),
            Err(CatalogError::Io(_))
        ));
    }
}
