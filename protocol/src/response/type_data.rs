//! `GET /type/{name}` response model

use serde::{Deserialize, Serialize};

use super::NamedResource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeResponse {
    pub name: String,
    pub damage_relations: DamageRelations,
    #[serde(default)]
    pub moves: Vec<NamedResource>,
    #[serde(default)]
    pub pokemon: Vec<TypePokemon>,
}

impl TypeResponse {
    /// Names of the types this type takes double damage from
    pub fn weaknesses(&self) -> impl Iterator<Item = &str> {
        self.damage_relations
            .double_damage_from
            .iter()
            .map(|r| r.name.as_str())
    }

    /// Move names in upstream order
    pub fn move_names(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(|m| m.name.as_str())
    }

    /// Species names in upstream order
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon.iter().map(|p| p.pokemon.name.as_str())
    }
}

/// Damage relations for a type. Upstream always sends all six lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePokemon {
    #[serde(default)]
    pub slot: u8,
    pub pokemon: NamedResource,
}
