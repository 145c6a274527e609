use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::Item;
use crate::week::Weekday;

/// Ein Wochenplan: pro Wochentag 1–3 Einträge (Hauptgericht, Beilage, Dessert).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    days: BTreeMap<Weekday, Vec<Item>>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: Weekday, item: Item) {
        self.days.entry(day).or_default().push(item);
    }

    #[must_use]
    pub fn items_on(&self, day: Weekday) -> &[Item] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tage mit mindestens einem Eintrag, in kanonischer Reihenfolge.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[Item])> + '_ {
        self.days
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(day, items)| (*day, items.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}
