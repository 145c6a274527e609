//! Planer-Konfiguration: Tages-Filter und Tuning-Konstanten.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use speiseplan_core::{Category, TagFilter, Weekday};

use crate::error::{PlanError, Result};

/// Obergrenze für `max_relevant_age_days` (zehn Jahre); hält `M²` weit unter `u64::MAX`.
pub const MAX_RELEVANT_AGE_CEILING: i64 = 3650;

/// Einstellungen für [`MenuPlanner`](crate::MenuPlanner).
///
/// Alle Felder sind in einer Konfigurationsdatei optional; fehlende Felder
/// behalten ihren Default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Einträge, die vor höchstens so vielen Tagen verwendet wurden, bekommen Score 0.
    pub min_repeat_days: i64,
    /// Ab diesem Alter (in Tagen) steigt der Score nicht weiter.
    pub max_relevant_age_days: i64,
    /// Anteil der kumulierten Score-Masse, um den die Exponential-Ziehung streut.
    pub lambda_frac: f64,
    /// Filter-Tokens pro Wochentag; `+extra` / `+dessert` fordern zusätzliche Slots an.
    pub day_filters: BTreeMap<Weekday, Vec<TagFilter>>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let special = || {
            vec![
                TagFilter::require("dessert"),
                TagFilter::forbid("plain"),
                TagFilter::require("extra"),
                TagFilter::forbid("end-of-week"),
            ]
        };
        let mut day_filters = BTreeMap::new();
        day_filters.insert(Weekday::Sun, special());
        day_filters.insert(Weekday::Mon, vec![TagFilter::forbid("end-of-week")]);
        day_filters.insert(Weekday::Tue, vec![TagFilter::forbid("end-of-week")]);
        day_filters.insert(Weekday::Wed, special());
        day_filters.insert(Weekday::Fri, vec![TagFilter::require("plain")]);
        Self {
            min_repeat_days: 15,
            max_relevant_age_days: 49,
            lambda_frac: 0.15,
            day_filters,
        }
    }
}

impl PlannerConfig {
    #[must_use]
    pub fn filters_for(&self, day: Weekday) -> &[TagFilter] {
        self.day_filters.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ob `day` einen Slot der Kategorie bekommt. Hauptgerichte gibt es immer.
    #[must_use]
    pub fn wants(&self, day: Weekday, category: Category) -> bool {
        category == Category::Entree
            || self
                .filters_for(day)
                .iter()
                .any(|f| Category::from_marker(f) == Some(category))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.lambda_frac.is_finite() || self.lambda_frac <= 0.0 || self.lambda_frac >= 1.0 {
            return Err(PlanError::Config(format!(
                "lambda_frac must be in (0, 1), got {}",
                self.lambda_frac
            )));
        }
        if !(1..=MAX_RELEVANT_AGE_CEILING).contains(&self.max_relevant_age_days) {
            return Err(PlanError::Config(format!(
                "max_relevant_age_days must be in 1..={MAX_RELEVANT_AGE_CEILING}, got {}",
                self.max_relevant_age_days
            )));
        }
        if self.min_repeat_days < 0 {
            return Err(PlanError::Config(format!(
                "min_repeat_days must not be negative, got {}",
                self.min_repeat_days
            )));
        }
        Ok(())
    }

    /// Persistiert die Konfiguration als JSON.
    #[must_use]
    pub fn snapshot(&self) -> Value {
        json!({
            "min_repeat_days": self.min_repeat_days,
            "max_relevant_age_days": self.max_relevant_age_days,
            "lambda_frac": self.lambda_frac,
            "day_filters": self.day_filters,
        })
    }

    /// Rekonstruiert und prüft eine Konfiguration aus einem Snapshot.
    pub fn load(v: Value) -> Result<Self> {
        let config: Self = serde_json::from_value(v)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_extras_and_desserts_midweek_and_sunday() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        for day in Weekday::ALL {
            assert!(config.wants(day, Category::Entree));
        }
        assert!(config.wants(Weekday::Sun, Category::Extra));
        assert!(config.wants(Weekday::Wed, Category::Dessert));
        assert!(!config.wants(Weekday::Fri, Category::Extra));
        assert!(config.filters_for(Weekday::Thu).is_empty());
    }

    #[test]
    fn snapshot_roundtrip() {
        let config = PlannerConfig::default();
        let snap = config.snapshot();
        assert_eq!(snap["day_filters"]["fri"], json!(["+plain"]));
        let restored = PlannerConfig::load(snap).expect("valid snapshot");
        assert_eq!(restored, config);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config =
            PlannerConfig::load(json!({"min_repeat_days": 21})).expect("partial config");
        assert_eq!(config.min_repeat_days, 21);
        assert_eq!(config.max_relevant_age_days, 49);
        assert_eq!(config.day_filters, PlannerConfig::default().day_filters);
    }

    #[test]
    fn load_rejects_bad_values() {
        assert!(matches!(
            PlannerConfig::load(json!({"lambda_frac": 0.0})),
            Err(PlanError::Config(_))
        ));
        assert!(matches!(
            PlannerConfig::load(json!({"max_relevant_age_days": -3})),
            Err(PlanError::Config(_))
        ));
        assert!(matches!(
            PlannerConfig::load(json!({"max_relevant_age_days": 5_000_000_000_i64})),
            Err(PlanError::Config(_))
        ));
        assert!(
            PlannerConfig::load(json!({"max_relevant_age_days": MAX_RELEVANT_AGE_CEILING})).is_ok()
        );
        assert!(matches!(
            PlannerConfig::load(json!({"day_filters": {"fri": ["plain"]}})),
            Err(PlanError::Snapshot(_))
        ));
    }
}
