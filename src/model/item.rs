use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ModelError;

/// Identifier of an [`Item`], unique within the store that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(value: u64) -> Self {
        ItemId(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId(value)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ItemId)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Item is one entry of a task list.
impl Item {
    pub fn new(id: ItemId, text: &str) -> Result<Item, ModelError> {
        Ok(Self {
            id,
            text: normalize_text(text)?,
            completed: false,
            created_at: Utc::now(),
        })
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ModelError> {
        self.text = normalize_text(text)?;
        Ok(())
    }
}

/// Trims the user supplied text, rejecting it when nothing is left.
pub fn normalize_text(text: &str) -> Result<String, ModelError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyText);
    }
    Ok(trimmed.to_string())
}
