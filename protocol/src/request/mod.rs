use crate::ParseError;

/// Read-only PokeAPI endpoints used by the battle helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// /pokemon/NAME
    Pokemon(String),

    /// /type/NAME
    Type(String),
}

impl Endpoint {
    /// Build a pokemon endpoint. The name is trimmed and lower-cased.
    pub fn pokemon(name: &str) -> Result<Self, ParseError> {
        normalize_name(name).map(Self::Pokemon)
    }

    /// Build a type endpoint. The name is trimmed and lower-cased.
    pub fn r#type(name: &str) -> Result<Self, ParseError> {
        normalize_name(name).map(Self::Type)
    }

    /// Path relative to the API root
    pub fn to_path(&self) -> String {
        match self {
            Self::Pokemon(name) => format!("/pokemon/{}", name),
            Self::Type(name) => format!("/type/{}", name),
        }
    }

    /// Full URL under `base`, tolerating a trailing slash on the base
    pub fn to_url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.to_path())
    }
}

/// Lower-case a resource name and reject anything that would escape the path segment
fn normalize_name(name: &str) -> Result<String, ParseError> {
    let name = name.trim().to_lowercase();

    if name.is_empty() || name.contains(['/', '?', '#']) || name.chars().any(char::is_whitespace)
    {
        return Err(ParseError::InvalidName(name));
    }

    Ok(name)
}
