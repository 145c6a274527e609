#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Recency-gewichtete Auswahl für den Wochen-Speiseplan.
//!
//! Ablauf pro Slot: Katalog nach Kategorie und Tages-Filtern einschränken,
//! in dieser Woche bereits gewählte Einträge ausschließen, jeden Kandidaten
//! nach seiner letzten Verwendung bewerten ([`RecencyScorer`]) und dann
//! zufällig, aber zu den "ältesten" Einträgen hin verzerrt, auswählen
//! ([`pick`]). Der [`MenuPlanner`] wiederholt das für alle sieben Tage.
//!
//! Zufall kommt ausschließlich über [`Entropy`] herein, damit Läufe mit
//! einem festen Seed reproduzierbar sind.

pub mod config;
pub mod entropy;
pub mod error;
pub mod planner;
pub mod recall;
pub mod recency;
pub mod selector;

pub use config::PlannerConfig;
pub use entropy::Entropy;
pub use error::{PlanError, Result};
pub use planner::{MenuPlanner, UsedSet};
pub use recall::{recall, Recalled};
pub use recency::RecencyScorer;
pub use selector::{pick, Pick, PickReason, Scored, Weighted};
