/*
type Player = {
    name: string,
    nation: string,   // "eng ENG"
    pos: string,      // "MF" or "DF,MF"
    age: number,
    mp: number,
    starts: number,
    min: number,
    gls: number,
    ast: number,
    pk: number,
    crdy: number,
    crdr: number,
    xg: number,
    xag: number,
    team: string,
}
 */

use serde::{Serialize, Deserialize};

use crate::models::StatValue;

/// One row from `/player`, as loose as the backend sends it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RawPlayerRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub pos: Option<String>,

    #[serde(default)]
    pub age: Option<StatValue>,
    #[serde(default)]
    pub mp: Option<StatValue>,
    #[serde(default)]
    pub starts: Option<StatValue>,
    #[serde(default)]
    pub min: Option<StatValue>,
    #[serde(default)]
    pub gls: Option<StatValue>,
    #[serde(default)]
    pub ast: Option<StatValue>,
    #[serde(default)]
    pub pk: Option<StatValue>,
    #[serde(default)]
    pub crdy: Option<StatValue>,
    #[serde(default)]
    pub crdr: Option<StatValue>,
    #[serde(default)]
    pub xg: Option<StatValue>,
    #[serde(default)]
    pub xag: Option<StatValue>,
}

#[cfg(test)]
impl RawPlayerRow {
    pub fn named(name: &str) -> RawPlayerRow {
        RawPlayerRow { name: Some(name.to_string()), ..Default::default() }
    }
}
