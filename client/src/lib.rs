//! PokeAPI-backed battle helper.
//!
//! [`PokeApiClient`] implements [`PokemonDataSource`] over HTTP; the
//! [`present`] module renders the resulting [`BattleReport`] for a terminal.

mod api;
mod config;
mod error;
pub mod input;
pub mod present;

pub use api::PokeApiClient;
pub use config::ClientConfig;
pub use error::ClientError;

pub use counterdex_battle::{
    BattleReport, DEFAULT_SPECIES_LIMIT, HelperError, PokemonDataSource, SpeciesInfo, Type,
    battle_helper,
};
pub use counterdex_protocol::POKEAPI_URL;
