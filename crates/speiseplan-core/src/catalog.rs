use std::collections::HashSet;

use crate::error::{CoreError, Result};
use crate::filter::{self, TagFilter};
use crate::item::Item;

/// Unveränderlicher Katalog aller Einträge eines Laufs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Baut den Katalog; doppelte Schlüssel sind ein Fehler.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.key.as_str()) {
                return Err(CoreError::DuplicateKey(item.key.clone()));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.key == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Alle Einträge, auf die jeder Filter passt.
    #[must_use]
    pub fn filter(&self, filters: &[TagFilter]) -> Vec<&Item> {
        filter::apply_all(&self.items, filters)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_are_rejected() {
        let err = Catalog::new(vec![
            Item::new("curry", ["entree"]),
            Item::new("curry", ["extra"]),
        ])
        .expect_err("duplicate key");
        assert!(matches!(err, CoreError::DuplicateKey(k) if k == "curry"));
    }

    #[test]
    fn lookup_and_filter() {
        let catalog = Catalog::new(vec![
            Item::new("curry", ["entree"]),
            Item::new("salad", ["extra", "plain"]),
        ])
        .expect("unique keys");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("salad").is_some());
        assert!(catalog.get("pie").is_none());
        let plain = catalog.filter(&[TagFilter::require("plain")]);
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].key, "salad");
    }
}
