#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Shopping list derivation and plain-text presentation of a weekly menu.
//!
//! The shopping list groups every ingredient of the chosen items and keeps
//! track of which item asked for it, so the list reads
//! `flour (for waffles and pancakes)`.

use serde::{Deserialize, Serialize};
use speiseplan_core::{Item, Menu};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Header printed above the menu
const MENU_HEADER: &str = "Menu\n----\n";
/// Header printed above the shopping list
const SHOPPING_HEADER: &str = "Shopping List\n-------------\n";
/// Separator between the items that need the same ingredient
const REASON_SEPARATOR: &str = " and ";

/// Ingredient → keys of the items that need it.
///
/// Ingredients are kept sorted; the item keys keep menu order (days in
/// canonical order, slots in entree/extra/dessert order). An item that shows
/// up twice in a menu is listed twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    entries: BTreeMap<String, Vec<String>>,
}

impl ShoppingList {
    /// Collect the ingredients of every item in `menu`.
    #[must_use]
    pub fn from_menu(menu: &Menu) -> Self {
        let mut list = Self::default();
        for (_, items) in menu.days() {
            for item in items {
                list.add_item(item);
            }
        }
        list
    }

    /// Add all ingredients of `item`; items without ingredients add nothing.
    pub fn add_item(&mut self, item: &Item) {
        for ingredient in item.ingredients() {
            self.entries
                .entry(ingredient.clone())
                .or_default()
                .push(item.key.clone());
        }
    }

    /// Items that need `ingredient`.
    #[must_use]
    pub fn reasons(&self, ingredient: &str) -> Option<&[String]> {
        self.entries.get(ingredient).map(Vec::as_slice)
    }

    /// Ingredients in sorted order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the list, one ingredient per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(SHOPPING_HEADER);
        for (ingredient, reasons) in &self.entries {
            let _ = writeln!(out, "{ingredient} (for {})", reasons.join(REASON_SEPARATOR));
        }
        out
    }
}

/// Render a menu, one line per day that has items: `sun: curry, salad, pie`.
#[must_use]
pub fn render_menu(menu: &Menu) -> String {
    let mut out = String::from(MENU_HEADER);
    for (day, items) in menu.days() {
        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        let _ = writeln!(out, "{day}: {}", keys.join(", "));
    }
    out
}
