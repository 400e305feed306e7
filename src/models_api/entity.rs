use serde::{Serialize, Deserialize};

use crate::models::Dimension;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EntityDescriptor {
    pub dimension: Dimension,
    pub slug: String,
    pub name: String,
    pub image: String,
    /// The exact string the backend filters on, e.g. "Manchester Utd" or "FRA".
    pub query_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

