#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Kerntypen für den Speiseplan.
//!
//! Die Crate enthält nur Daten und reine Funktionen: Katalog, Tag-Filter,
//! Wochen-Historie und den fertigen [`Menu`]. Auswahl und Zufall leben in
//! `speiseplan-select`.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod history;
pub mod item;
pub mod menu;
pub mod week;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use filter::TagFilter;
pub use history::{History, WeeklyRecord};
pub use item::Item;
pub use menu::Menu;
pub use week::{Category, Weekday};
