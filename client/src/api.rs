use counterdex_battle::{PokemonDataSource, SpeciesInfo, Type, parse_types};
use counterdex_protocol::{Endpoint, PokemonResponse, TypeResponse, parse_pokemon, parse_type};
use reqwest::StatusCode;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// PokeAPI client backing the battle helper queries.
///
/// Every lookup is a fresh GET; nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /pokemon/{name}`
    pub async fn pokemon(&self, name: &str) -> Result<PokemonResponse, ClientError> {
        let body = self.get(&Endpoint::pokemon(name)?).await?;
        Ok(parse_pokemon(&body)?)
    }

    /// `GET /type/{name}`
    pub async fn type_data(&self, r#type: Type) -> Result<TypeResponse, ClientError> {
        let body = self.get(&Endpoint::r#type(r#type.as_str())?).await?;
        Ok(parse_type(&body)?)
    }

    /// Fetch an endpoint body; anything but 200 is an error
    async fn get(&self, endpoint: &Endpoint) -> Result<String, ClientError> {
        let url = endpoint.to_url(&self.base_url);
        tracing::debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}

impl PokemonDataSource for PokeApiClient {
    type Error = ClientError;

    async fn lookup_species(&self, name: &str) -> Result<SpeciesInfo, ClientError> {
        let response = self.pokemon(name).await?;
        Ok(SpeciesInfo::from_protocol(name, &response))
    }

    async fn lookup_type_effectiveness(&self, defender: Type) -> Result<Vec<Type>, ClientError> {
        let data = self.type_data(defender).await?;
        Ok(parse_types(data.weaknesses()))
    }

    async fn lookup_moves_of_type(&self, r#type: Type) -> Result<Vec<String>, ClientError> {
        let data = self.type_data(r#type).await?;
        Ok(data.move_names().map(str::to_string).collect())
    }

    async fn lookup_species_of_type(&self, r#type: Type) -> Result<Vec<String>, ClientError> {
        let data = self.type_data(r#type).await?;
        Ok(data.pokemon_names().map(str::to_string).collect())
    }
}
