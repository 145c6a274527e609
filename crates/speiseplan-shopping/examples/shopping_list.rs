//! Example: derive and print the shopping list for a small hand-written menu.
//!
//! Run with: cargo run -p speiseplan-shopping --example shopping_list

use speiseplan_core::{Item, Menu, Weekday};
use speiseplan_shopping::{render_menu, ShoppingList};

fn main() {
    let mut menu = Menu::new();
    menu.push(
        Weekday::Sun,
        Item::new("curry", ["entree"]).with_ingredients(["chickpeas", "coconut milk", "rice"]),
    );
    menu.push(
        Weekday::Sun,
        Item::new("green-salad", ["extra"]).with_ingredients(["lettuce", "cucumber"]),
    );
    menu.push(
        Weekday::Tue,
        Item::new("risotto", ["entree"]).with_ingredients(["rice", "parmesan", "mushrooms"]),
    );
    menu.push(
        Weekday::Fri,
        Item::new("waffles", ["entree", "plain"]).with_ingredients(["flour", "eggs", "milk"]),
    );

    println!("{}", render_menu(&menu));

    let list = ShoppingList::from_menu(&menu);
    println!("🛒 {} ingredients for the week\n", list.len());
    print!("{}", list.render());
}
