use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

use super::{error::ModelError, Item};

/// Named predicate selecting which items a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    All,
    Completed,
    Incomplete,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl Filter {
    pub const VARIANTS: [Filter; 3] = [Filter::All, Filter::Incomplete, Filter::Completed];

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => item.completed,
            Filter::Incomplete => !item.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Incomplete => "incomplete",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "incomplete" | "pending" => Ok(Filter::Incomplete),
            _ => Err(ModelError::UnknownFilter(s.to_string())),
        }
    }
}

/// Number of items each filter selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts {
    pub all: usize,
    pub completed: usize,
    pub incomplete: usize,
}

impl FilterCounts {
    pub fn get(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Completed => self.completed,
            Filter::Incomplete => self.incomplete,
        }
    }
}

impl<'a> FromIterator<&'a Item> for FilterCounts {
    fn from_iter<I: IntoIterator<Item = &'a Item>>(iter: I) -> Self {
        iter.into_iter().fold(FilterCounts::default(), |mut acc, item| {
            acc.all += 1;
            if item.completed {
                acc.completed += 1;
            } else {
                acc.incomplete += 1;
            }
            acc
        })
    }
}
