//! File-backed catalog and history.
//!
//! Layout under the data directory:
//! - `options/<key>.json`: one catalog item per file
//! - `history/<YYYY-MM-DD>.json`: one recorded week per file

use anyhow::{Context, Result};
use speiseplan_core::{Catalog, History, Item, WeeklyRecord};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const OPTIONS_DIR: &str = "options";
pub const HISTORY_DIR: &str = "history";

/// `(file stem, path)` of every `*.json` file in `dir`, sorted by stem.
fn json_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read directory {dir:?}"))? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("File name is not valid UTF-8: {path:?}"))?
            .to_string();
        files.push((stem, path));
    }
    files.sort();
    Ok(files)
}

pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let mut items = Vec::new();
    for (key, path) in json_files(dir)? {
        let body = fs::read_to_string(&path).with_context(|| format!("Failed to read {path:?}"))?;
        let item = Item::from_json(&key, &body).with_context(|| format!("Invalid item file {path:?}"))?;
        items.push(item);
    }
    tracing::debug!(count = items.len(), dir = ?dir, "catalog loaded");
    Ok(Catalog::new(items)?)
}

/// A missing history directory means nothing has been recorded yet.
pub fn load_history(dir: &Path) -> Result<History> {
    if !dir.exists() {
        tracing::info!(dir = ?dir, "no history directory, starting without history");
        return Ok(History::default());
    }
    let mut records = Vec::new();
    for (key, path) in json_files(dir)? {
        let body = fs::read_to_string(&path).with_context(|| format!("Failed to read {path:?}"))?;
        let record = WeeklyRecord::from_json(&key, &body)
            .with_context(|| format!("Invalid history file {path:?}"))?;
        records.push(record);
    }
    tracing::debug!(count = records.len(), dir = ?dir, "history loaded");
    Ok(History::new(records))
}

/// Write `record` to `<dir>/<date>.json` and return the path.
pub fn record(dir: &Path, record: &WeeklyRecord) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {dir:?}"))?;
    let path = dir.join(format!("{}.json", record.key()));
    if path.exists() {
        tracing::warn!(path = ?path, "overwriting existing record");
    }
    let mut body = record.to_json_pretty()?;
    body.push('\n');
    fs::write(&path, body).with_context(|| format!("Failed to write {path:?}"))?;
    tracing::info!(path = ?path, "menu recorded");
    Ok(path)
}

/// `git add`, `git commit` and `git push` the recorded file inside `dir`.
pub fn commit(dir: &Path, path: &Path, week: &str) -> Result<()> {
    let file = path
        .file_name()
        .and_then(|f| f.to_str())
        .with_context(|| format!("Record path has no file name: {path:?}"))?;
    let message = format!("add weekly menu for {week}");
    let steps: [&[&str]; 3] = [&["add", file], &["commit", "-m", message.as_str()], &["push"]];

    for args in steps {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .with_context(|| format!("Failed to run git {}", args.join(" ")))?;
        if !status.success() {
            anyhow::bail!("git {} failed with {}", args.join(" "), status);
        }
    }
    Ok(())
}
