//! Move and species recommendations for a set of counter types

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::matchup::EffectiveTypes;
use crate::source::PokemonDataSource;
use crate::types::SpeciesInfo;

/// How many species are recommended when no limit is configured
pub const DEFAULT_SPECIES_LIMIT: usize = 4;

/// Moves of every effective type, concatenated in set order.
///
/// Not deduplicated: a move tagged with two effective types appears twice.
pub async fn recommend_moves<S: PokemonDataSource>(
    source: &S,
    effective: &EffectiveTypes,
) -> Vec<String> {
    let mut moves = Vec::new();

    for t in effective.iter() {
        match source.lookup_moves_of_type(t).await {
            Ok(names) => moves.extend(names),
            Err(e) => {
                tracing::warn!(pokemon_type = %t, error = %e, "Move lookup failed, skipping");
            }
        }
    }

    moves
}

/// A random sample of at most `limit` species carrying any effective type,
/// each enriched with its own species data.
///
/// Candidates are deduplicated, shuffled with `rng` and truncated before the
/// per-species lookups; a candidate whose lookup fails is dropped, so fewer
/// than `limit` entries may come back.
pub async fn recommend_species<S, R>(
    source: &S,
    effective: &EffectiveTypes,
    limit: usize,
    rng: &mut R,
) -> Vec<SpeciesInfo>
where
    S: PokemonDataSource,
    R: Rng + ?Sized,
{
    let mut pool = BTreeSet::new();

    for t in effective.iter() {
        match source.lookup_species_of_type(t).await {
            Ok(names) => pool.extend(names),
            Err(e) => {
                tracing::warn!(pokemon_type = %t, error = %e, "Species lookup failed, skipping");
            }
        }
    }

    // Sorted before shuffling so a seeded rng fully determines the sample
    let mut candidates: Vec<String> = pool.into_iter().collect();
    candidates.shuffle(rng);
    candidates.truncate(limit);

    let mut recommended = Vec::with_capacity(candidates.len());
    for name in candidates {
        match source.lookup_species(&name).await {
            Ok(info) => recommended.push(info),
            Err(e) => {
                tracing::warn!(species = %name, error = %e, "Candidate lookup failed, dropping");
            }
        }
    }

    recommended
}
