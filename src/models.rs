use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Team,
    Nation,
    Position,
}

impl Dimension {
    pub fn get_all() -> Vec<Dimension> {
        vec![Dimension::Team, Dimension::Nation, Dimension::Position]
    }

    /// Name of the single query parameter the proxy expects for this dimension.
    pub fn query_param(&self) -> &'static str {
        match self {
            Dimension::Team => "team",
            Dimension::Nation => "nation",
            Dimension::Position => "position",
        }
    }
}

impl FromStr for Dimension {
    type Err = ParseStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "team" => Ok(Dimension::Team),
            "teams" => Ok(Dimension::Team),
            "nation" => Ok(Dimension::Nation),
            "nations" => Ok(Dimension::Nation),
            "position" => Ok(Dimension::Position),
            "positions" => Ok(Dimension::Position),
            _ => Err(ParseStringError)
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query_param())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseStringError;

/// A stat cell as the backend sends it. Numbers usually arrive as numbers,
/// but numeric strings and junk values show up as well.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    String(String),
    Other(serde_json::Value),
}

impl StatValue {
    pub fn to_float(&self) -> Option<f64> {
        let value = match self {
            StatValue::Number(n) => Some(*n),
            StatValue::String(str) => str.trim().replace(',', "").parse::<f64>().ok(),
            StatValue::Other(_) => None,
        };
        value.filter(|e| e.is_finite())
    }

    pub fn to_count(&self) -> Option<i32> {
        self.to_float().map(|e| e as i32)
    }
}

impl From<i32> for StatValue {
    fn from(value: i32) -> Self {
        StatValue::Number(value as f64)
    }
}

impl From<f64> for StatValue {
    fn from(value: f64) -> Self {
        StatValue::Number(value)
    }
}
