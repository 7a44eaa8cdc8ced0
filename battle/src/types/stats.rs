//! Base stats as reported by `/pokemon/{name}`

use std::collections::BTreeMap;

use counterdex_protocol::PokemonStat;

/// Stat identifiers, in PokeAPI's canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum StatName {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl StatName {
    /// Parse from an API name ("special-attack")
    pub fn from_api(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hp" => Some(StatName::Hp),
            "attack" => Some(StatName::Attack),
            "defense" => Some(StatName::Defense),
            "special-attack" => Some(StatName::SpecialAttack),
            "special-defense" => Some(StatName::SpecialDefense),
            "speed" => Some(StatName::Speed),
            "accuracy" => Some(StatName::Accuracy),
            "evasion" => Some(StatName::Evasion),
            _ => None,
        }
    }

    /// API name
    pub fn as_str(&self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "special-attack",
            StatName::SpecialDefense => "special-defense",
            StatName::Speed => "speed",
            StatName::Accuracy => "accuracy",
            StatName::Evasion => "evasion",
        }
    }
}

impl std::fmt::Display for StatName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base stat values keyed by stat, one value per stat
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct BaseStats(BTreeMap<StatName, u32>);

impl BaseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the upstream stat list. The first entry for a stat wins;
    /// unrecognised stat names are skipped.
    pub fn from_protocol(stats: &[PokemonStat]) -> Self {
        let mut base = Self::new();
        for entry in stats {
            match StatName::from_api(&entry.stat.name) {
                Some(stat) => {
                    base.0.entry(stat).or_insert(entry.base_stat);
                }
                None => tracing::debug!(stat = %entry.stat.name, "Skipping unknown stat"),
            }
        }
        base
    }

    pub fn get(&self, stat: StatName) -> Option<u32> {
        self.0.get(&stat).copied()
    }

    /// Stats in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (StatName, u32)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Sum of all present stats
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StatName, u32)> for BaseStats {
    fn from_iter<I: IntoIterator<Item = (StatName, u32)>>(iter: I) -> Self {
        let mut base = Self::new();
        for (stat, value) in iter {
            base.0.entry(stat).or_insert(value);
        }
        base
    }
}

/// `hp: 39, attack: 52, ...`
impl std::fmt::Display for BaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (stat, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", stat, value)?;
        }
        Ok(())
    }
}
