use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// One evaluated expression/result pair. Immutable except for the starred
/// flag; the result string is fixed at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: Uuid,
    pub expression: String,
    pub result: String,
    pub starred: bool,
    pub created_at: DateTime<Utc>,
}

impl Calculation {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            expression: expression.into(),
            result: result.into(),
            starred: false,
            created_at: Utc::now(),
        }
    }
}

/// A named, independently-evaluated sequence of calculations. Entry order
/// is meaningful and survives persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: Uuid,
    pub name: String,
    pub calculations: Vec<Calculation>,
}

impl Tab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calculations: Vec::new(),
        }
    }
}

/// A grouping bucket for starred entries. Membership is a list of entry ids
/// resolved against the owning tabs, so an entry can only ever live in one
/// place while still appearing in a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRow {
    pub id: Uuid,
    pub name: String,
    pub entries: Vec<Uuid>,
}

impl StarRow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            entries: Vec::new(),
        }
    }
}

/// A reusable expression fragment. Frozen fragments can be dropped onto an
/// entry to derive a new calculation from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: Uuid,
    pub value: String,
    pub frozen: bool,
}

impl Fragment {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
            frozen: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {} (expected light or dark)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_calculation_is_unstarred() {
        let calc = Calculation::new("2+2", "4");
        assert_eq!(calc.expression, "2+2");
        assert_eq!(calc.result, "4");
        assert!(!calc.starred);
    }

    #[test]
    fn theme_round_trips_through_serde() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Theme::Dark);
    }

    #[test]
    fn theme_parses_from_str() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());
    }
}
