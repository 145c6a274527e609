//! Tages-Slots und Wochenplan.

use std::collections::BTreeMap;

use speiseplan_core::{Catalog, Category, History, Item, Menu, TagFilter, Weekday};
use time::Date;

use crate::config::PlannerConfig;
use crate::entropy::Entropy;
use crate::error::{PlanError, Result};
use crate::recency::RecencyScorer;
use crate::selector::{pick, Pick};

/// In dieser Woche bereits gewählte Einträge einer Kategorie.
#[derive(Debug, Clone, Default)]
pub struct UsedSet<'a> {
    items: Vec<&'a Item>,
}

impl<'a> UsedSet<'a> {
    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.items.iter().any(|used| used.key == item.key)
    }

    pub fn push(&mut self, item: &'a Item) {
        self.items.push(item);
    }

    #[must_use]
    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Schlägt Wochenpläne vor. Hält keinen Zustand zwischen zwei Vorschlägen.
#[derive(Debug, Clone)]
pub struct MenuPlanner {
    config: PlannerConfig,
    scorer: RecencyScorer,
}

impl Default for MenuPlanner {
    fn default() -> Self {
        let config = PlannerConfig::default();
        let scorer = RecencyScorer::from_config(&config);
        Self { config, scorer }
    }
}

impl MenuPlanner {
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        let scorer = RecencyScorer::from_config(&config);
        Ok(Self { config, scorer })
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    #[must_use]
    pub fn scorer(&self) -> &RecencyScorer {
        &self.scorer
    }

    /// Kandidaten für einen Slot.
    ///
    /// Kategorie-Tag plus alle Tages-Filter außer den Slot-Markern anderer
    /// Kategorien (`+extra` filtert keine Hauptgerichte). Bereits in `used`
    /// enthaltene Einträge fallen heraus.
    #[must_use]
    pub fn candidates<'a>(
        &self,
        catalog: &'a Catalog,
        day: Weekday,
        category: Category,
        used: &UsedSet<'_>,
    ) -> Vec<&'a Item> {
        let mut filters: Vec<TagFilter> = vec![category.filter()];
        filters.extend(
            self.config
                .filters_for(day)
                .iter()
                .filter(|f| Category::from_marker(f).map_or(true, |c| c == category))
                .cloned(),
        );
        catalog
            .filter(&filters)
            .into_iter()
            .filter(|item| !used.contains(item))
            .collect()
    }

    /// Füllt einen Slot und trägt die Wahl in `used` ein.
    #[allow(clippy::too_many_arguments)]
    pub fn plan_slot<'a, E: Entropy>(
        &self,
        catalog: &'a Catalog,
        history: &History,
        today: Date,
        day: Weekday,
        category: Category,
        used: &mut UsedSet<'a>,
        rng: &mut E,
    ) -> Result<Pick<'a>> {
        let candidates = self.candidates(catalog, day, category, used);
        let weighted = self.scorer.weigh(&candidates, history, today);
        let chosen = pick(weighted, self.config.lambda_frac, rng)
            .ok_or(PlanError::NoCandidates { category, day })?;

        #[cfg(feature = "telemetry")]
        tracing::debug!(
            day = %day,
            category = %category,
            item = %chosen.item.key,
            score = chosen.score,
            candidates = candidates.len(),
            why = chosen.reason.as_str(),
            "slot filled"
        );

        used.push(chosen.item);
        Ok(chosen)
    }

    /// Baut einen vollständigen Wochenplan, Sonntag bis Samstag.
    ///
    /// Jeder Tag bekommt ein Hauptgericht, Beilage und Dessert nur bei
    /// `+extra` / `+dessert` in den Tages-Filtern. Innerhalb einer Kategorie
    /// wiederholt sich kein Eintrag. Ein leerer Slot bricht den Vorschlag mit
    /// [`PlanError::NoCandidates`] ab.
    pub fn propose<E: Entropy>(
        &self,
        catalog: &Catalog,
        history: &History,
        today: Date,
        rng: &mut E,
    ) -> Result<Menu> {
        let mut used: BTreeMap<Category, UsedSet<'_>> = BTreeMap::new();
        let mut menu = Menu::new();

        for day in Weekday::ALL {
            for category in Category::ALL {
                if !self.config.wants(day, category) {
                    continue;
                }
                let set = used.entry(category).or_default();
                let chosen = self.plan_slot(catalog, history, today, day, category, set, rng)?;
                menu.push(day, chosen.item.clone());
            }
        }

        Ok(menu)
    }
}
