//! Liest einen Katalog (JSON-Array von Items) von stdin und gibt einen
//! Wochenvorschlag als JSON aus.
//!
//! Run with: cargo run -p speiseplan-select --example propose -- [seed] < items.json

use std::io::{self, Read};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use speiseplan_core::{Catalog, History, Item, Menu};
use speiseplan_select::MenuPlanner;
use time::OffsetDateTime;

#[derive(Serialize)]
struct ProposalRecord {
    today: String,
    seed: u64,
    menu: Menu,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(0);

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let items: Vec<Item> = serde_json::from_str(&input)?;
    let catalog = Catalog::new(items)?;

    let today = OffsetDateTime::now_utc().date();
    let planner = MenuPlanner::default();
    let menu = planner.propose(
        &catalog,
        &History::default(),
        today,
        &mut StdRng::seed_from_u64(seed),
    )?;

    let record = ProposalRecord {
        today: today.to_string(),
        seed,
        menu,
    };
    serde_json::to_writer_pretty(io::stdout(), &record)?;
    println!();

    Ok(())
}
