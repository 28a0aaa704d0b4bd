use macros::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::LoadError;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new<T: Into<f64>>(lat: T, lng: T) -> Self {
        Self {
            lat: lat.into(),
            lng: lng.into(),
        }
    }
}

/// One filming location entry from the dataset.
///
/// Text fields are kept exactly as supplied (numbers and booleans are converted to
/// text); blank values are only treated as missing when the record is displayed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub lat: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub lng: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub release_year: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub writer: Option<String>,
    #[serde(default, alias = "locations", deserialize_with = "optional_text")]
    pub location: Option<String>,
    #[serde(default, alias = "distributor", deserialize_with = "optional_text")]
    pub distribution: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub production_company: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub actor_1: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub actor_2: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub actor_3: Option<String>,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lat: Some(lat.into()),
            lng: Some(lng.into()),
            ..Default::default()
        }
    }

    /// Map position of the record, `None` when either coordinate is missing or not a
    /// finite number.
    pub fn position(&self) -> Option<Position> {
        let lat = parse_coordinate(self.lat.as_deref()?)?;
        let lng = parse_coordinate(self.lng.as_deref()?)?;
        Some(Position { lat, lng })
    }

    pub fn is_renderable(&self) -> bool {
        self.position().is_some()
    }

    /// Non-blank actor names in billing order.
    pub fn cast(&self) -> Vec<&str> {
        [&self.actor_1, &self.actor_2, &self.actor_3]
            .into_iter()
            .filter_map(|actor| non_blank(actor.as_deref()))
            .collect()
    }
}

/// The whole dataset as served, a JSON array of records.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, Json)]
#[serde(transparent)]
pub struct Dataset(pub Vec<MovieRecord>);

impl Dataset {
    /// Parses the body of the dataset resource.
    pub fn parse(body: &str) -> Result<Self, LoadError> {
        Self::from_json_str(body).map_err(|e| LoadError::Parse(format!("{e:#}")))
    }

    pub fn into_records(self) -> Vec<MovieRecord> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}
