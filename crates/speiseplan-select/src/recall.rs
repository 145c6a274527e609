//! Rekonstruiert einen aufgezeichneten Wochenplan aus dem Katalog.

use speiseplan_core::{Catalog, Menu, Weekday, WeeklyRecord};

/// Ergebnis von [`recall`].
#[derive(Debug, Clone, Default)]
pub struct Recalled {
    pub menu: Menu,
    /// Schlüssel aus der Historie, die der Katalog nicht (mehr) kennt.
    pub unresolved: Vec<(Weekday, String)>,
}

/// Löst die Schlüssel eines Records gegen den Katalog auf.
///
/// Unbekannte Schlüssel sind kein Fehler: die Historie ist extern und darf
/// auf inzwischen gelöschte Einträge zeigen. Sie werden gewarnt und in
/// [`Recalled::unresolved`] gesammelt.
#[must_use]
pub fn recall(catalog: &Catalog, record: &WeeklyRecord) -> Recalled {
    let mut recalled = Recalled::default();
    for day in Weekday::ALL {
        for key in record.items_on(day) {
            match catalog.get(key) {
                Some(item) => recalled.menu.push(day, item.clone()),
                None => {
                    warn_unresolved(record, day, key);
                    recalled.unresolved.push((day, key.clone()));
                }
            }
        }
    }
    recalled
}

#[cfg(feature = "telemetry")]
fn warn_unresolved(record: &WeeklyRecord, day: Weekday, key: &str) {
    tracing::warn!(week = %record.key(), day = %day, key, "unrecognized item in history");
}

#[cfg(not(feature = "telemetry"))]
fn warn_unresolved(record: &WeeklyRecord, day: Weekday, key: &str) {
    eprintln!(
        "warning: unrecognized item {key:?} on {day} (week {})",
        record.key()
    );
}
