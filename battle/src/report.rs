//! Result payload handed to presenters

use crate::types::{SpeciesInfo, Type};

/// Everything a presenter needs to show one battle-helper result.
///
/// With the `serde` feature this serializes to
/// `{ enemy_types, effective_types, recommended_moves, recommended_pokemon, enemy_sprite }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    /// Opponent name as entered, lower-cased
    #[cfg_attr(feature = "serde", serde(skip))]
    pub enemy_name: String,

    pub enemy_types: Vec<Type>,

    pub effective_types: Vec<Type>,

    /// Not deduplicated
    pub recommended_moves: Vec<String>,

    #[cfg_attr(feature = "serde", serde(rename = "recommended_pokemon"))]
    pub recommended_species: Vec<SpeciesInfo>,

    pub enemy_sprite: Option<String>,
}

impl BattleReport {
    /// The first `n` recommended moves
    pub fn top_moves(&self, n: usize) -> &[String] {
        &self.recommended_moves[..n.min(self.recommended_moves.len())]
    }
}
