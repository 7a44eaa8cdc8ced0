use thiserror::Error;

pub mod request;
pub mod response;

pub use request::Endpoint;
pub use response::{
    DamageRelations, NamedResource, PokemonResponse, PokemonStat, PokemonTypeSlot, Sprites,
    TypePokemon, TypeResponse, parse_pokemon, parse_type,
};

/// Public PokeAPI v2 root
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid resource name: {0:?}")]
    InvalidName(String),
}
