//! Type matchup resolution and counter recommendations.
//!
//! # Overview
//!
//! `counterdex-battle` sits between `counterdex-protocol` (PokeAPI wire format)
//! and the HTTP client / presenters:
//!
//! ```text
//! counterdex-protocol (wire format)
//!        │
//!        ▼
//! counterdex-battle (domain types + matchup queries) ← THIS CRATE
//!        │
//!        └─> counterdex-client (HTTP data source, presenter, binary)
//! ```
//!
//! The queries never talk to the network themselves. They run against any
//! [`PokemonDataSource`], so the flow can be driven by the PokeAPI client or
//! by an in-memory source in tests.
//!
//! # Main Types
//!
//! - [`Type`] - the 18 elemental types
//! - [`SpeciesInfo`], [`BaseStats`] - species snapshot for one query
//! - [`EffectiveTypes`] - counter types against an opponent
//! - [`BattleReport`] - payload handed to presenters
//!
//! # Example Usage
//!
//! ```ignore
//! use counterdex_battle::{battle_helper, DEFAULT_SPECIES_LIMIT};
//!
//! let mut rng = rand::thread_rng();
//! match battle_helper(&source, "charmander", DEFAULT_SPECIES_LIMIT, &mut rng).await {
//!     Ok(report) => println!("Counter with: {:?}", report.effective_types),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod query;
pub mod report;
pub mod source;
pub mod types;

// Re-export main types at crate root for convenience
pub use query::{
    DEFAULT_SPECIES_LIMIT, EffectiveTypes, HelperError, battle_helper, recommend_moves,
    recommend_species, resolve_effective_types,
};
pub use report::BattleReport;
pub use source::PokemonDataSource;
pub use types::{BaseStats, SpeciesInfo, StatName, Type, capitalize, parse_types};
