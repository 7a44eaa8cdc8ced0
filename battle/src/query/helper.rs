//! End-to-end battle helper query

use rand::Rng;
use thiserror::Error;

use super::matchup::resolve_effective_types;
use super::recommend::{recommend_moves, recommend_species};
use crate::report::BattleReport;
use crate::source::PokemonDataSource;

/// Failures the user gets to see. Every other upstream failure is absorbed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    #[error("please enter a Pokémon name")]
    EmptyName,

    #[error("could not find the Pokémon '{name}'")]
    SpeciesNotFound { name: String },
}

/// Look up the opponent and build counter recommendations against it.
///
/// Runs every lookup sequentially. Aborts with [`HelperError::SpeciesNotFound`]
/// before any type lookup if the opponent does not resolve.
pub async fn battle_helper<S, R>(
    source: &S,
    name: &str,
    limit: usize,
    rng: &mut R,
) -> Result<BattleReport, HelperError>
where
    S: PokemonDataSource,
    R: Rng + ?Sized,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(HelperError::EmptyName);
    }

    let enemy = match source.lookup_species(name).await {
        Ok(info) => info,
        Err(e) => {
            tracing::info!(species = %name, error = %e, "Opponent lookup failed");
            return Err(HelperError::SpeciesNotFound {
                name: name.to_string(),
            });
        }
    };

    let effective = resolve_effective_types(source, &enemy.types).await;
    let recommended_moves = recommend_moves(source, &effective).await;
    let recommended_species = recommend_species(source, &effective, limit, rng).await;

    tracing::debug!(
        species = %enemy.name,
        counters = effective.len(),
        moves = recommended_moves.len(),
        recommended = recommended_species.len(),
        "Built battle report"
    );

    Ok(BattleReport {
        enemy_name: enemy.name,
        enemy_types: enemy.types,
        effective_types: effective.to_vec(),
        recommended_moves,
        recommended_species,
        enemy_sprite: enemy.sprite_url,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::query::mock::MockSource;
    use crate::types::Type;

    fn source() -> MockSource {
        MockSource::new()
            .species("charmander", &[Type::Fire])
            .species("squirtle", &[Type::Water])
            .species("totodile", &[Type::Water])
            .species("mudkip", &[Type::Water])
            .species("geodude", &[Type::Rock, Type::Ground])
            .weak_to(Type::Fire, &[Type::Water, Type::Ground, Type::Rock])
            .moves(Type::Water, &["surf"])
            .moves(Type::Rock, &["rock-slide"])
            .members(Type::Water, &["squirtle", "totodile", "mudkip"])
            .members(Type::Rock, &["geodude"])
    }

    #[tokio::test]
    async fn test_charmander() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(11);
        let report = battle_helper(&source, "Charmander", 4, &mut rng)
            .await
            .unwrap();

        assert_eq!(report.enemy_name, "charmander");
        assert_eq!(report.enemy_types, vec![Type::Fire]);
        assert_eq!(
            report.effective_types,
            vec![Type::Ground, Type::Rock, Type::Water]
        );
        assert_eq!(report.recommended_moves, vec!["rock-slide", "surf"]);
        assert_eq!(report.recommended_species.len(), 4);
        assert_eq!(
            report.enemy_sprite.as_deref(),
            Some("https://img.example/charmander.png")
        );
    }

    #[tokio::test]
    async fn test_not_found_stops_all_lookups() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(0);
        let result = battle_helper(&source, "missingno", 4, &mut rng).await;

        assert_eq!(
            result,
            Err(HelperError::SpeciesNotFound {
                name: "missingno".into()
            })
        );
        assert_eq!(source.calls(), vec!["species:missingno"]);
    }

    #[tokio::test]
    async fn test_empty_name_makes_no_lookups() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            battle_helper(&source, "   ", 4, &mut rng).await,
            Err(HelperError::EmptyName)
        );
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_order() {
        let source = source();
        let mut rng = StdRng::seed_from_u64(5);
        battle_helper(&source, "charmander", 0, &mut rng)
            .await
            .unwrap();

        assert_eq!(
            source.calls(),
            vec![
                "species:charmander",
                "effectiveness:fire",
                "moves:ground",
                "moves:rock",
                "moves:water",
                "members:ground",
                "members:rock",
                "members:water",
            ]
        );
    }

    #[tokio::test]
    async fn test_partial_failures_still_produce_report() {
        let source = source().failing(Type::Water);
        let mut rng = StdRng::seed_from_u64(2);
        let report = battle_helper(&source, "charmander", 4, &mut rng)
            .await
            .unwrap();

        assert_eq!(report.recommended_moves, vec!["rock-slide"]);
        assert_eq!(report.recommended_species.len(), 1);
        assert_eq!(report.recommended_species[0].name, "geodude");
    }

    #[test]
    fn test_error_messages() {
        let err = HelperError::SpeciesNotFound {
            name: "missingno".into(),
        };
        assert_eq!(err.to_string(), "could not find the Pokémon 'missingno'");
    }
}
