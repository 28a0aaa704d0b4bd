use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::record::{non_blank, MovieRecord};

pub const NOT_AVAILABLE: &str = "N/A";

/// Which pointer interaction opens a marker's popup.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupTrigger {
    /// Clicking a marker opens its popup and closes the previous one.
    #[default]
    Click,
    /// Hovering opens the popup; leaving the marker closes it.
    Hover,
}

impl PopupTrigger {
    pub fn to_str<'a>(&self) -> &'a str {
        match self {
            PopupTrigger::Click => "click",
            PopupTrigger::Hover => "hover",
        }
    }
}

impl fmt::Display for PopupTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for PopupTrigger {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "click" => Ok(PopupTrigger::Click),
            "hover" => Ok(PopupTrigger::Hover),
            other => anyhow::bail!("Unknown popup trigger `{other}`, expected `click` or `hover`"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupRow {
    pub label: &'static str,
    pub value: String,
}

/// Human readable details shown when a marker is activated.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub rows: Vec<PopupRow>,
}

impl PopupContent {
    pub fn from_record(record: &MovieRecord) -> Self {
        let field = |value: &Option<String>| {
            non_blank(value.as_deref())
                .unwrap_or(NOT_AVAILABLE)
                .to_string()
        };

        let cast = record.cast();
        let cast = if cast.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            cast.join(", ")
        };

        let rows = vec![
            ("Year", field(&record.release_year)),
            ("Director", field(&record.director)),
            ("Writer", field(&record.writer)),
            ("Location", field(&record.location)),
            ("Production", field(&record.production_company)),
            ("Distributor", field(&record.distribution)),
            ("Cast", cast),
        ]
        .into_iter()
        .map(|(label, value)| PopupRow { label, value })
        .collect();

        Self {
            title: record.title.clone(),
            rows,
        }
    }

    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}
