//! Matchup queries over a [`PokemonDataSource`](crate::PokemonDataSource)
//!
//! Resolution of counter types, move and species recommendations, and the
//! combined battle helper flow.

mod helper;
mod matchup;
#[cfg(test)]
mod mock;
mod recommend;

pub use helper::{HelperError, battle_helper};
pub use matchup::{EffectiveTypes, resolve_effective_types};
pub use recommend::{DEFAULT_SPECIES_LIMIT, recommend_moves, recommend_species};
