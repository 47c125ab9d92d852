use crate::error::LibrisError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    // Older data files stored the localized labels.
    #[default]
    #[serde(alias = "в наличии")]
    Available,
    #[serde(alias = "выдана")]
    CheckedOut,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = LibrisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" | "в наличии" => Ok(BookStatus::Available),
            "checked_out" | "checked-out" | "checked out" | "выдана" => {
                Ok(BookStatus::CheckedOut)
            }
            _ => Err(LibrisError::InvalidStatus(s.to_string())),
        }
    }
}

/// One catalog entry. Field order here is the key order in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(deserialize_with = "positive_id")]
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: String,
    pub status: BookStatus,
}

fn positive_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let id = u64::deserialize(deserializer)?;
    if id == 0 {
        return Err(serde::de::Error::custom("book id must be positive"));
    }
    Ok(id)
}

impl Book {
    pub fn new(id: u64, title: String, author: String, year: String) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: BookStatus::default(),
        }
    }

    /// Case-insensitive substring match on title or author, exact match on year.
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword_lower = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword_lower)
            || self.author.to_lowercase().contains(&keyword_lower)
            || self.year == keyword
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - {} ({}) [{}]",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}
