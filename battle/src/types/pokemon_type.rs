//! The 18 elemental types and their PokeAPI names

/// Pokemon types (18 types as of Gen 6+)
///
/// Ordering follows PokeAPI's type ids, which is also the iteration order of
/// an [`EffectiveTypes`](crate::EffectiveTypes) set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fighting = 1,
    Flying = 2,
    Poison = 3,
    Ground = 4,
    Rock = 5,
    Bug = 6,
    Ghost = 7,
    Steel = 8,
    Fire = 9,
    Water = 10,
    Grass = 11,
    Electric = 12,
    Psychic = 13,
    Ice = 14,
    Dragon = 15,
    Dark = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse from an API name (case-insensitive)
    ///
    /// Returns `None` for PokeAPI's non-battle types (`unknown`, `shadow`, `stellar`).
    pub fn from_api(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Lower-case API name, as used in `/type/{name}`
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fighting => "fighting",
            Type::Flying => "flying",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Rock => "rock",
            Type::Bug => "bug",
            Type::Ghost => "ghost",
            Type::Steel => "steel",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Grass => "grass",
            Type::Electric => "electric",
            Type::Psychic => "psychic",
            Type::Ice => "ice",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Fairy => "fairy",
        }
    }

    /// Capitalized label for display ("Fire")
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parse API type names, dropping names outside the 18 battle types
pub fn parse_types<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Type> {
    names
        .into_iter()
        .filter_map(|name| {
            let parsed = Type::from_api(name);
            if parsed.is_none() {
                tracing::debug!(name, "Skipping non-battle type");
            }
            parsed
        })
        .collect()
}
