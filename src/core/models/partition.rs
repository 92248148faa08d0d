//! Item partitions
//!
//! A list's items split into two independently ordered runs: everything not
//! yet bought, then everything bought.

use serde::{Deserialize, Serialize};

/// Which half of a list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Still to buy (always first)
    #[default]
    Unbought,
    /// Already bought (always last)
    Bought,
}

impl Partition {
    /// The partition an item with this flag belongs to
    #[must_use]
    pub const fn of(bought: bool) -> Self {
        if bought { Self::Bought } else { Self::Unbought }
    }

    /// Whether an item with this flag belongs here
    #[must_use]
    pub const fn contains(self, bought: bool) -> bool {
        matches!((self, bought), (Self::Bought, true) | (Self::Unbought, false))
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unbought => write!(f, "unbought"),
            Self::Bought => write!(f, "bought"),
        }
    }
}

impl std::str::FromStr for Partition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "unbought" | "not_bought" | "todo" => Ok(Self::Unbought),
            "bought" | "done" => Ok(Self::Bought),
            _ => Err(format!("Invalid partition: {s}. Use: unbought, bought")),
        }
    }
}
