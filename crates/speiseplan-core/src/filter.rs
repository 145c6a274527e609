//! Tag-Filter der Form `+tag` (Tag muss vorhanden sein) bzw. `-tag`
//! (Tag darf nicht vorhanden sein).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::item::Item;

/// Ein einzelnes Filter-Token, serialisiert als `"+plain"` / `"-plain"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagFilter {
    tag: String,
    keep: bool,
}

impl TagFilter {
    /// `+tag`
    pub fn require(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            keep: true,
        }
    }

    /// `-tag`
    pub fn forbid(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            keep: false,
        }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// `true` für `+tag`.
    #[must_use]
    pub fn requires(&self) -> bool {
        self.keep
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        item.has_tag(&self.tag) == self.keep
    }

    /// Behält die Einträge, auf die der Filter passt. Reihenfolge bleibt erhalten.
    #[must_use]
    pub fn apply<'a>(&self, items: &[&'a Item]) -> Vec<&'a Item> {
        items.iter().copied().filter(|i| self.matches(i)).collect()
    }
}

/// Wendet alle Filter als Konjunktion an.
pub fn apply_all<'a, I>(items: I, filters: &[TagFilter]) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| filters.iter().all(|f| f.matches(item)))
        .collect()
}

impl FromStr for TagFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keep = match s.chars().next() {
            Some('+') => true,
            Some('-') => false,
            _ => return Err(CoreError::InvalidFilter(s.to_string())),
        };
        let tag = &s[1..];
        if tag.trim().is_empty() {
            return Err(CoreError::InvalidFilter(s.to_string()));
        }
        Ok(Self {
            tag: tag.to_string(),
            keep,
        })
    }
}

impl TryFrom<String> for TagFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TagFilter> for String {
    fn from(filter: TagFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.keep { '+' } else { '-' };
        write!(f, "{sign}{}", self.tag)
    }
}
