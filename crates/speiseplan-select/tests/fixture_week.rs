//! Wochenplanung gegen die gemeinsamen Fixtures unter `tests/fixtures/data`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use speiseplan_core::{Catalog, History, Item, Weekday, WeeklyRecord};
use speiseplan_select::{recall, MenuPlanner, RecencyScorer};
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::date;

fn fixture_dir(sub: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures/data")
        .join(sub)
}

fn load<T>(sub: &str, parse: impl Fn(&str, &str) -> T) -> Vec<T> {
    let dir = fixture_dir(sub);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("{dir:?}: {e}"))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let stem = p.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let body = fs::read_to_string(p).unwrap_or_else(|e| panic!("{p:?}: {e}"));
            parse(stem, &body)
        })
        .collect()
}

fn catalog() -> Catalog {
    let items = load("options", |key, body| {
        Item::from_json(key, body).expect("valid item fixture")
    });
    Catalog::new(items).expect("unique fixture keys")
}

fn history() -> History {
    History::new(load("history", |key, body| {
        WeeklyRecord::from_json(key, body).expect("valid history fixture")
    }))
}

#[test]
fn sunday_entree_prefers_dishes_outside_the_repeat_window() {
    let catalog = catalog();
    let history = history();
    let planner = MenuPlanner::default();
    // 2024-03-12: Woche vom 2024-02-18 liegt 16–22 Tage zurück, die vom
    // 2024-02-25 nur 9–15 Tage. Von den Sonntags-Kandidaten (nicht plain,
    // nicht end-of-week) sind nur tacos und risotto nicht gesperrt.
    let today = date!(2024 - 03 - 12);
    let scorer = RecencyScorer::from_config(planner.config());
    let tacos = catalog.get("tacos").expect("fixture item");
    let curry = catalog.get("curry").expect("fixture item");
    assert!(scorer.score(tacos, &history, today) > 0);
    assert_eq!(scorer.score(curry, &history, today), 0);

    for seed in 0..40 {
        let menu = planner
            .propose(&catalog, &history, today, &mut StdRng::seed_from_u64(seed))
            .expect("fixture catalog covers every slot");
        let sunday = &menu.items_on(Weekday::Sun)[0].key;
        assert!(
            sunday == "tacos" || sunday == "risotto",
            "seed {seed}: unexpected sunday entree {sunday}"
        );
        assert_eq!(menu.items_on(Weekday::Wed).len(), 3);
        assert!(menu.items_on(Weekday::Fri)[0].has_tag("plain"));
    }
}

#[test]
fn same_seed_gives_same_menu() {
    let catalog = catalog();
    let history = history();
    let planner = MenuPlanner::default();
    let today = date!(2024 - 03 - 12);
    let a = planner
        .propose(&catalog, &history, today, &mut StdRng::seed_from_u64(77))
        .expect("valid");
    let b = planner
        .propose(&catalog, &history, today, &mut StdRng::seed_from_u64(77))
        .expect("valid");
    assert_eq!(a, b);
}

#[test]
fn latest_fixture_week_recalls_with_one_unknown_item() {
    let catalog = catalog();
    let history = history();
    let latest = history.latest().expect("fixtures contain records");
    let recalled = recall(&catalog, latest);
    assert_eq!(
        recalled.unresolved,
        vec![(Weekday::Sat, "meatloaf".to_string())]
    );
    assert_eq!(recalled.menu.items_on(Weekday::Sun).len(), 3);
}
