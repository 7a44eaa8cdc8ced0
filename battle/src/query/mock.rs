//! In-memory data source for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::source::PokemonDataSource;
use crate::types::{SpeciesInfo, Type};

/// Canned answers plus a log of every lookup made.
///
/// Species that were never added fail to resolve. Type lookups for types
/// in `failing` return an error; other unknown types answer empty.
#[derive(Default)]
pub(crate) struct MockSource {
    species: HashMap<String, SpeciesInfo>,
    weaknesses: HashMap<Type, Vec<Type>>,
    moves: HashMap<Type, Vec<String>>,
    members: HashMap<Type, Vec<String>>,
    failing: HashSet<Type>,
    calls: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, name: &str, types: &[Type]) -> Self {
        let info = SpeciesInfo::new(name)
            .with_types(types.iter().copied())
            .with_sprite(format!("https://img.example/{}.png", name));
        self.species.insert(name.to_string(), info);
        self
    }

    pub fn weak_to(mut self, defender: Type, attackers: &[Type]) -> Self {
        self.weaknesses.insert(defender, attackers.to_vec());
        self
    }

    pub fn moves(mut self, r#type: Type, names: &[&str]) -> Self {
        self.moves
            .insert(r#type, names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn members(mut self, r#type: Type, names: &[&str]) -> Self {
        self.members
            .insert(r#type, names.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn failing(mut self, r#type: Type) -> Self {
        self.failing.insert(r#type);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, r#type: Type) -> Result<(), String> {
        if self.failing.contains(&r#type) {
            Err(format!("status 500 for {}", r#type))
        } else {
            Ok(())
        }
    }
}

impl PokemonDataSource for MockSource {
    type Error = String;

    async fn lookup_species(&self, name: &str) -> Result<SpeciesInfo, String> {
        let name = name.to_lowercase();
        self.record(format!("species:{}", name));
        self.species
            .get(&name)
            .cloned()
            .ok_or_else(|| format!("status 404 for {}", name))
    }

    async fn lookup_type_effectiveness(&self, defender: Type) -> Result<Vec<Type>, String> {
        self.record(format!("effectiveness:{}", defender));
        self.check(defender)?;
        Ok(self.weaknesses.get(&defender).cloned().unwrap_or_default())
    }

    async fn lookup_moves_of_type(&self, r#type: Type) -> Result<Vec<String>, String> {
        self.record(format!("moves:{}", r#type));
        self.check(r#type)?;
        Ok(self.moves.get(&r#type).cloned().unwrap_or_default())
    }

    async fn lookup_species_of_type(&self, r#type: Type) -> Result<Vec<String>, String> {
        self.record(format!("members:{}", r#type));
        self.check(r#type)?;
        Ok(self.members.get(&r#type).cloned().unwrap_or_default())
    }
}
