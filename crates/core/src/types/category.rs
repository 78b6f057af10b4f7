//! Product category.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0}")]
pub struct CategoryError(pub String);

/// Top-level catalog department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Men,
    Women,
    Kids,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 3] = [Self::Women, Self::Men, Self::Kids];

    /// Wire name (`"men"`, `"women"`, `"kids"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Kids => "kids",
        }
    }

    /// Capitalized name for headings (`"Women"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Kids => "Kids",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "men" => Ok(Self::Men),
            "women" => Ok(Self::Women),
            "kids" => Ok(Self::Kids),
            _ => Err(CategoryError(s.to_owned())),
        }
    }
}
