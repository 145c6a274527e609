//! Gewichtete Zufallsauswahl über eine bewertete Kandidatenliste.

use serde::Serialize;
use speiseplan_core::Item;

use crate::entropy::Entropy;

/// Ein Kandidat mit seinem Staleness-Score.
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub item: &'a Item,
    pub score: u64,
}

/// Bewertete Kandidaten eines Slots samt Score-Summe.
#[derive(Debug, Clone, Default)]
pub struct Weighted<'a> {
    entries: Vec<Scored<'a>>,
    cumulative: u64,
}

impl<'a> Weighted<'a> {
    pub fn new(entries: Vec<Scored<'a>>) -> Self {
        let cumulative = entries.iter().fold(0u64, |acc, s| acc.saturating_add(s.score));
        Self {
            entries,
            cumulative,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[Scored<'a>] {
        &self.entries
    }

    #[must_use]
    pub fn cumulative(&self) -> u64 {
        self.cumulative
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wie ein [`Pick`] zustande kam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickReason {
    /// Exponential-Ziehung über die Score-Masse.
    WeightedDraw,
    /// Alle Scores 0: gleichverteilte Wahl.
    ZeroScoreFallback,
    /// Ziehung lag hinter der Summe aller Scores: ältester Kandidat.
    ExhaustedFallback,
}

impl PickReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PickReason::WeightedDraw => "weighted draw",
            PickReason::ZeroScoreFallback => "uniform fallback (all recently used)",
            PickReason::ExhaustedFallback => "stalest fallback",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pick<'a> {
    pub item: &'a Item,
    pub score: u64,
    pub reason: PickReason,
}

/// Wählt genau einen Kandidaten, verzerrt zu hohen Scores hin.
///
/// 1. mischen, dann stabil absteigend nach Score sortieren (Gleichstände
///    werden so zufällig aufgelöst);
/// 2. Score-Summe 0 → erster Eintrag;
/// 3. sonst `required` aus Exp(1 / (Summe · `lambda_frac`)) ziehen, gedeckelt
///    auf `2 · Summe · lambda_frac`, und den ersten Kandidaten nehmen, bei dem
///    die laufende Summe `required` übersteigt;
/// 4. reicht die Liste nicht, den ersten (ältesten) Kandidaten.
///
/// Gibt `None` nur für eine leere Liste zurück.
pub fn pick<'a, E: Entropy>(weighted: Weighted<'a>, lambda_frac: f64, rng: &mut E) -> Option<Pick<'a>> {
    let Weighted {
        mut entries,
        cumulative,
    } = weighted;

    rng.shuffle(&mut entries);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    let first = *entries.first()?;

    if cumulative == 0 {
        return Some(Pick {
            item: first.item,
            score: first.score,
            reason: PickReason::ZeroScoreFallback,
        });
    }

    #[allow(clippy::cast_precision_loss)]
    let lambda = cumulative as f64 * lambda_frac;
    let required = rng.exponential(1.0 / lambda).min(lambda * 2.0);

    let mut consumed: u64 = 0;
    for entry in &entries {
        let next = consumed.saturating_add(entry.score);
        #[allow(clippy::cast_precision_loss)]
        let reached = next as f64 > required;
        if reached {
            return Some(Pick {
                item: entry.item,
                score: entry.score,
                reason: PickReason::WeightedDraw,
            });
        }
        consumed = next;
    }

    Some(Pick {
        item: first.item,
        score: first.score,
        reason: PickReason::ExhaustedFallback,
    })
}
