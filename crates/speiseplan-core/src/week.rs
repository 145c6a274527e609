//! Wochentage und Menü-Kategorien.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::TagFilter;

/// Die sieben festen Wochentage, in kanonischer Reihenfolge (Sonntag zuerst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sun => "sun",
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
            Weekday::Sat => "sat",
        }
    }

    /// Tage zwischen Aufzeichnungsdatum einer Woche und diesem Tag (`sun` = 1).
    #[must_use]
    pub fn offset(self) -> i64 {
        match self {
            Weekday::Sun => 1,
            Weekday::Mon => 2,
            Weekday::Tue => 3,
            Weekday::Wed => 4,
            Weekday::Thu => 5,
            Weekday::Fri => 6,
            Weekday::Sat => 7,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot-Kategorie innerhalb eines Tages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Entree,
    Extra,
    Dessert,
}

impl Category {
    /// Slot-Reihenfolge innerhalb eines Tages.
    pub const ALL: [Category; 3] = [Category::Entree, Category::Extra, Category::Dessert];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Category::Entree => "entree",
            Category::Extra => "extra",
            Category::Dessert => "dessert",
        }
    }

    /// Der `+tag`-Filter, der Kandidaten dieser Kategorie auswählt.
    #[must_use]
    pub fn filter(self) -> TagFilter {
        TagFilter::require(self.tag())
    }

    /// Erkennt ein Tages-Token wie `+extra`, das einen Slot anfordert.
    #[must_use]
    pub fn from_marker(filter: &TagFilter) -> Option<Category> {
        if !filter.requires() {
            return None;
        }
        Category::ALL.into_iter().find(|c| c.tag() == filter.tag())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
