//! Katalogeinträge (Gerichte, Beilagen, Desserts).
//!
//! Ein [`Item`] wird einmal pro Lauf geladen und danach nur noch gelesen.
//! Der Schlüssel stammt aus dem Dateinamen, nicht aus dem JSON-Körper.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Ein auswählbarer Eintrag des Katalogs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Eindeutiger Schlüssel, z. B. `"waffles"`.
    pub key: String,
    /// Tags wie `"entree"`, `"plain"` oder `"end-of-week"`.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Zutaten für die Einkaufsliste, in Dateireihenfolge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

/// Dateiinhalt ohne Schlüssel.
#[derive(Deserialize)]
struct ItemBody {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
}

impl Item {
    pub fn new<K, I, T>(key: K, tags: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            key: key.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            ingredients: None,
        }
    }

    #[must_use]
    pub fn with_ingredients<I, T>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.ingredients = Some(ingredients.into_iter().map(Into::into).collect());
        self
    }

    /// Liest einen Eintrag aus dem JSON-Körper einer Katalogdatei.
    ///
    /// `key` ist der Dateiname ohne `.json`.
    pub fn from_json(key: &str, json: &str) -> Result<Self> {
        let body: ItemBody = serde_json::from_str(json)?;
        Ok(Self {
            key: key.to_string(),
            tags: body.tags,
            ingredients: body.ingredients,
        })
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Zutaten, leer falls keine angegeben sind.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or(&[])
    }
}
