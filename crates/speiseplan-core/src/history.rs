//! Wochen-Historie: bereits aufgezeichnete Speisepläne.
//!
//! Jede [`WeeklyRecord`] trägt das Aufzeichnungsdatum der Woche und pro
//! Wochentag die Schlüssel der gewählten Einträge. Die [`History`] hält die
//! Records absteigend nach Datum sortiert, weil die Recency-Bewertung nur die
//! jüngste Verwendung eines Eintrags betrachtet.

use std::collections::BTreeMap;

use time::macros::format_description;
use time::{Date, Duration};

use crate::error::{CoreError, Result};
use crate::menu::Menu;
use crate::week::Weekday;

/// Parst das Aufzeichnungsdatum (`YYYY-MM-DD`) einer Woche.
pub fn parse_record_date(key: &str) -> Result<Date> {
    Date::parse(key.trim(), format_description!("[year]-[month]-[day]")).map_err(|source| {
        CoreError::InvalidDate {
            key: key.to_string(),
            source,
        }
    })
}

/// Formatiert ein Datum als Record-Schlüssel (`YYYY-MM-DD`).
#[must_use]
pub fn format_record_date(date: Date) -> String {
    date.to_string()
}

/// Ein aufgezeichneter Wochenplan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRecord {
    date: Date,
    days: BTreeMap<Weekday, Vec<String>>,
}

impl WeeklyRecord {
    pub fn new(date: Date, days: BTreeMap<Weekday, Vec<String>>) -> Self {
        Self { date, days }
    }

    /// Liest einen Record aus JSON (`{"sun": ["waffles"], ...}`).
    ///
    /// `key` ist der Dateiname ohne `.json` und muss ein Datum sein.
    /// Unbekannte Wochentage und ungültige Daten sind Fehler.
    pub fn from_json(key: &str, json: &str) -> Result<Self> {
        let date = parse_record_date(key)?;
        let days: BTreeMap<Weekday, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self { date, days })
    }

    /// Zusammenfassung eines Menüs; jeder Wochentag ist enthalten.
    #[must_use]
    pub fn from_menu(date: Date, menu: &Menu) -> Self {
        let days = Weekday::ALL
            .into_iter()
            .map(|day| {
                let keys = menu.items_on(day).iter().map(|i| i.key.clone()).collect();
                (day, keys)
            })
            .collect();
        Self { date, days }
    }

    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Dateiname ohne Endung.
    #[must_use]
    pub fn key(&self) -> String {
        format_record_date(self.date)
    }

    #[must_use]
    pub fn items_on(&self, day: Weekday) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Datum, an dem `key` in dieser Woche zuerst auftaucht.
    #[must_use]
    pub fn first_use(&self, key: &str) -> Option<Date> {
        Weekday::ALL
            .into_iter()
            .find(|day| self.items_on(*day).iter().any(|k| k == key))
            .map(|day| self.date.saturating_add(Duration::days(day.offset())))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.days)?)
    }
}

/// Alle bekannten Wochen, jüngste zuerst.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<WeeklyRecord>,
}

impl History {
    /// Sortiert die Records absteigend nach Datum.
    pub fn new(mut records: Vec<WeeklyRecord>) -> Self {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[WeeklyRecord] {
        &self.records
    }

    #[must_use]
    pub fn latest(&self) -> Option<&WeeklyRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Jüngste Verwendung von `key`; die Suche endet beim ersten Treffer.
    #[must_use]
    pub fn last_use(&self, key: &str) -> Option<Date> {
        self.records.iter().find_map(|r| r.first_use(key))
    }
}
