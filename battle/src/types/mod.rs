//! Domain types for matchup queries

mod pokemon_type;
mod species;
mod stats;

pub use pokemon_type::{Type, capitalize, parse_types};
pub use species::SpeciesInfo;
pub use stats::{BaseStats, StatName};
