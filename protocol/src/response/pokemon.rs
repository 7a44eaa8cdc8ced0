//! `GET /pokemon/{name}` response model
//!
//! Only the fields the battle helper reads are modelled; serde skips the rest.

use serde::{Deserialize, Serialize};

use super::NamedResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl PokemonResponse {
    /// Type names in slot order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.r#type.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub r#type: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
}
