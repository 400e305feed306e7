use serde::{Serialize, Deserialize};

use crate::{models::StatValue, models_external::player::RawPlayerRow};

/// A normalized player row. `ga` is derived and never sent to the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub name: String,
    pub team: Option<String>,
    pub nation: Option<String>,
    pub pos: Option<String>,
    pub age: Option<i32>,
    pub mp: i32,
    pub starts: i32,
    pub min: i32,
    pub gls: i32,
    pub ast: i32,
    pub pk: i32,
    pub crdy: i32,
    pub crdr: i32,
    pub xg: Option<f64>,
    pub xag: Option<f64>,
    pub ga: i32,
}

const PLACEHOLDER: &str = "-";

impl PlayerStat {
    /// The same player can have one row per club in a season, so the name alone is not a key.
    pub fn row_key(&self, ordinal: usize) -> String {
        format!("{}-{}-{ordinal}", self.name, self.team.as_deref().unwrap_or_default())
    }

    /// "eng ENG" -> "ENG", the raw value when the last token is empty.
    pub fn nation_display(&self) -> String {
        self.nation.as_deref()
            .filter(|e| !e.is_empty())
            .map(|e| e.split(' ').last().filter(|code| !code.is_empty()).unwrap_or(e))
            .unwrap_or(PLACEHOLDER)
            .to_string()
    }

    pub fn pos_display(&self) -> String {
        self.pos.as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(PLACEHOLDER)
            .to_string()
    }

    pub fn age_display(&self) -> String {
        self.age.map(|e| e.to_string()).unwrap_or_else(|| PLACEHOLDER.to_string())
    }

    pub fn min_display(&self) -> String {
        group_thousands(self.min)
    }

    pub fn xg_display(&self) -> String {
        one_decimal(self.xg)
    }

    pub fn xag_display(&self) -> String {
        one_decimal(self.xag)
    }
}

fn one_decimal(value: Option<f64>) -> String {
    value.map(|e| format!("{e:.1}")).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn group_thousands(value: i32) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

impl From<&PlayerStat> for RawPlayerRow {
    fn from(e: &PlayerStat) -> Self {
        RawPlayerRow {
            name: Some(e.name.clone()),
            team: e.team.clone(),
            nation: e.nation.clone(),
            pos: e.pos.clone(),
            age: e.age.map(StatValue::from),
            mp: Some(e.mp.into()),
            starts: Some(e.starts.into()),
            min: Some(e.min.into()),
            gls: Some(e.gls.into()),
            ast: Some(e.ast.into()),
            pk: Some(e.pk.into()),
            crdy: Some(e.crdy.into()),
            crdr: Some(e.crdr.into()),
            xg: e.xg.map(StatValue::from),
            xag: e.xag.map(StatValue::from),
        }
    }
}
