//! Counter-type resolution

use std::collections::BTreeSet;

use crate::source::PokemonDataSource;
use crate::types::Type;

/// Types super effective against at least one of an opponent's types.
///
/// Iterates in type id order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct EffectiveTypes(BTreeSet<Type>);

impl EffectiveTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Type> {
        self.iter().collect()
    }
}

impl FromIterator<Type> for EffectiveTypes {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Type> for EffectiveTypes {
    fn extend<I: IntoIterator<Item = Type>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

/// Union of the weaknesses of every opponent type.
///
/// A failed lookup contributes nothing; the remaining types still count.
pub async fn resolve_effective_types<S: PokemonDataSource>(
    source: &S,
    opponent_types: &[Type],
) -> EffectiveTypes {
    let mut effective = EffectiveTypes::new();

    for &defender in opponent_types {
        match source.lookup_type_effectiveness(defender).await {
            Ok(attackers) => effective.extend(attackers),
            Err(e) => {
                tracing::warn!(
                    pokemon_type = %defender,
                    error = %e,
                    "Type effectiveness lookup failed, skipping"
                );
            }
        }
    }

    tracing::debug!(opponent = ?opponent_types, effective = ?effective, "Resolved counter types");
    effective
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::mock::MockSource;

    fn source() -> MockSource {
        MockSource::new()
            .weak_to(Type::Fire, &[Type::Ground, Type::Rock, Type::Water])
            .weak_to(Type::Flying, &[Type::Electric, Type::Ice, Type::Rock])
            .weak_to(Type::Ghost, &[Type::Ghost, Type::Dark])
    }

    #[tokio::test]
    async fn test_single_type() {
        let effective = resolve_effective_types(&source(), &[Type::Fire]).await;

        assert_eq!(effective.to_vec(), vec![Type::Ground, Type::Rock, Type::Water]);
    }

    #[tokio::test]
    async fn test_dual_type_union_is_deduplicated() {
        // Charizard: rock is a weakness of both fire and flying
        let source = source();
        let effective = resolve_effective_types(&source, &[Type::Fire, Type::Flying]).await;

        assert_eq!(effective.len(), 5);
        assert_eq!(
            effective.to_vec(),
            vec![Type::Ground, Type::Rock, Type::Water, Type::Electric, Type::Ice]
        );
        assert_eq!(
            source.calls(),
            vec!["effectiveness:fire", "effectiveness:flying"]
        );
    }

    #[tokio::test]
    async fn test_every_entry_is_a_weakness_of_some_opponent_type() {
        let source = source();
        let opponent = [Type::Flying, Type::Ghost];
        let effective = resolve_effective_types(&source, &opponent).await;

        for t in effective.iter() {
            let mut found = false;
            for &defender in &opponent {
                let weak = source.lookup_type_effectiveness(defender).await.unwrap();
                found |= weak.contains(&t);
            }
            assert!(found, "{} is not a weakness of {:?}", t, opponent);
        }
    }

    #[tokio::test]
    async fn test_order_independent() {
        let source = source();
        let forward = resolve_effective_types(&source, &[Type::Fire, Type::Flying]).await;
        let backward = resolve_effective_types(&source, &[Type::Flying, Type::Fire]).await;

        assert_eq!(forward, backward);
    }

    #[tokio::test]
    async fn test_idempotent() {
        let source = source();
        let first = resolve_effective_types(&source, &[Type::Ghost]).await;
        let second = resolve_effective_types(&source, &[Type::Ghost]).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_partial_failure_is_skipped() {
        let source = source().failing(Type::Flying);
        let effective = resolve_effective_types(&source, &[Type::Fire, Type::Flying]).await;

        assert_eq!(effective.to_vec(), vec![Type::Ground, Type::Rock, Type::Water]);
    }

    #[tokio::test]
    async fn test_no_opponent_types() {
        let source = source();
        let effective = resolve_effective_types(&source, &[]).await;

        assert!(effective.is_empty());
        assert!(source.calls().is_empty());
    }
}
