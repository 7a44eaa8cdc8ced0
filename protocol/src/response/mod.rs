mod pokemon;
mod type_data;

use crate::ParseError;

pub use pokemon::{PokemonResponse, PokemonStat, PokemonTypeSlot, Sprites};
pub use type_data::{DamageRelations, TypePokemon, TypeResponse};

use serde::{Deserialize, Serialize};

/// `{ name, url }` reference used throughout PokeAPI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// Parse the body of `GET /pokemon/{name}`
pub fn parse_pokemon(body: &str) -> Result<PokemonResponse, ParseError> {
    Ok(serde_json::from_str(body)?)
}

/// Parse the body of `GET /type/{name}`
pub fn parse_type(body: &str) -> Result<TypeResponse, ParseError> {
    Ok(serde_json::from_str(body)?)
}
