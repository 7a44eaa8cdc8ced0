//! The read-only lookups the matchup queries are built on

use crate::types::{SpeciesInfo, Type};

/// Read-only lookups against a Pokemon information service.
///
/// Implementations report failures through [`Self::Error`] and leave the
/// policy to the caller: the initial species lookup treats any error as
/// "not found", every other lookup treats it as an empty result.
///
/// # Example
///
/// ```ignore
/// struct Fixed;
///
/// impl PokemonDataSource for Fixed {
///     type Error = String;
///
///     async fn lookup_species(&self, name: &str) -> Result<SpeciesInfo, String> {
///         Ok(SpeciesInfo::new(name).with_types([Type::Fire]))
///     }
///     // ...
/// }
/// ```
#[allow(async_fn_in_trait)]
pub trait PokemonDataSource {
    type Error: std::fmt::Display;

    /// Resolve a species name (case-insensitive) to its types, stats and sprite.
    async fn lookup_species(&self, name: &str) -> Result<SpeciesInfo, Self::Error>;

    /// Types that deal double damage to `defender`.
    async fn lookup_type_effectiveness(&self, defender: Type) -> Result<Vec<Type>, Self::Error>;

    /// Move names tagged with `r#type`, in upstream order.
    async fn lookup_moves_of_type(&self, r#type: Type) -> Result<Vec<String>, Self::Error>;

    /// Species names tagged with `r#type`, in upstream order.
    async fn lookup_species_of_type(&self, r#type: Type) -> Result<Vec<String>, Self::Error>;
}
