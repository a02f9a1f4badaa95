use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub flag: String,
}

impl Country {
    pub fn new(code: &str, name: &str, flag: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            flag: flag.to_string(),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag, self.name)
    }
}

/// Which slot a selection writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Origin,
    Destination,
}

impl Role {
    pub fn other(self) -> Self {
        match self {
            Role::Origin => Role::Destination,
            Role::Destination => Role::Origin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Origin => f.write_str("origin"),
            Role::Destination => f.write_str("destination"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "origin" | "o" => Ok(Role::Origin),
            "destination" | "dest" | "d" => Ok(Role::Destination),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

/// Travel intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SearchType {
    #[default]
    Tourist,
    Resident,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Tourist => f.write_str("TOURIST"),
            SearchType::Resident => f.write_str("RESIDENT"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulationQuery {
    pub origin: String,
    pub destination: String,
    pub category: SearchType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulationReport {
    pub origin: String,
    pub destination: String,
    pub category: SearchType,
    pub markdown: String,
    pub sources: Vec<GroundingSource>,
    pub fetched_at: DateTime<Utc>,
}
