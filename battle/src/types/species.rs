//! Species snapshots

use counterdex_protocol::PokemonResponse;

use super::pokemon_type::{Type, capitalize, parse_types};
use super::stats::BaseStats;

/// A species as fetched for one query
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesInfo {
    /// Lower-cased name used for the lookup
    pub name: String,

    /// Types in slot order
    pub types: Vec<Type>,

    pub stats: BaseStats,

    /// Front sprite URI, absent for some forms
    pub sprite_url: Option<String>,
}

impl SpeciesInfo {
    /// Create a species with no types, stats or sprite
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
            stats: BaseStats::new(),
            sprite_url: None,
        }
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = Type>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_sprite(mut self, url: impl Into<String>) -> Self {
        self.sprite_url = Some(url.into());
        self
    }

    /// Create from a `/pokemon/{name}` response, keeping `name` as the
    /// identity rather than upstream's canonical name
    pub fn from_protocol(name: &str, response: &PokemonResponse) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            types: parse_types(response.type_names()),
            stats: BaseStats::from_protocol(&response.stats),
            sprite_url: response.sprites.front_default.clone(),
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}
