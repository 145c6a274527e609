//! Staleness-Score: wie lange liegt die letzte Verwendung zurück?

use speiseplan_core::{History, Item};
use time::Date;

use crate::config::PlannerConfig;
use crate::selector::{Scored, Weighted};

/// Bewertet Kandidaten nach ihrer jüngsten Verwendung.
///
/// * nie verwendet: `M²` (mit `M = max_relevant_age_days`)
/// * vor mehr als `min_repeat_days` Tagen: `min(Tage, M)²`
/// * sonst: `0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyScorer {
    min_repeat_days: i64,
    max_relevant_age_days: i64,
}

impl RecencyScorer {
    #[must_use]
    pub fn new(min_repeat_days: i64, max_relevant_age_days: i64) -> Self {
        Self {
            min_repeat_days,
            max_relevant_age_days,
        }
    }

    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.min_repeat_days, config.max_relevant_age_days)
    }

    #[must_use]
    pub fn max_score(&self) -> u64 {
        let m = u64::try_from(self.max_relevant_age_days).unwrap_or(0);
        m.saturating_mul(m)
    }

    #[must_use]
    pub fn score_days_ago(&self, days_ago: i64) -> u64 {
        if days_ago <= self.min_repeat_days {
            return 0;
        }
        let n = u64::try_from(days_ago.min(self.max_relevant_age_days)).unwrap_or(0);
        n.saturating_mul(n)
    }

    /// Score für `item` relativ zu `today`.
    #[must_use]
    pub fn score(&self, item: &Item, history: &History, today: Date) -> u64 {
        match history.last_use(&item.key) {
            Some(used) => self.score_days_ago((today - used).whole_days()),
            None => self.max_score(),
        }
    }

    /// Bewertet alle Kandidaten und summiert die Scores.
    #[must_use]
    pub fn weigh<'a>(&self, candidates: &[&'a Item], history: &History, today: Date) -> Weighted<'a> {
        let entries: Vec<Scored<'a>> = candidates
            .iter()
            .map(|&item| Scored {
                item,
                score: self.score(item, history, today),
            })
            .collect();
        Weighted::new(entries)
    }
}
