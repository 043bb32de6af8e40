pub mod error;
pub mod models;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

pub use error::ApiError;
use models::{
    Distributions, EncounterRequest, Generation, Locations, NameRequest, Pokemons,
};

/// Thin wrapper around one `reqwest::Client` pointed at the encounter service.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn pokemons(&self) -> Result<Pokemons, ApiError> {
        let endpoint = self.endpoint("pokemons");
        debug!("GET {endpoint}");

        let res = self.http.get(&endpoint).send().await?;
        let status = res.status();
        let body = res.text().await?;

        read_body(&endpoint, status, &body)
    }

    /// The created entry is not read back; callers re-fetch the list.
    pub async fn add_pokemon(&self, name: &str) -> Result<(), ApiError> {
        let endpoint = self.endpoint("pokemons");
        debug!("POST {endpoint} name={name:?}");

        let res = self
            .http
            .post(&endpoint)
            .json(&NameRequest { name })
            .send()
            .await?;

        check_status(&endpoint, res.status())
    }

    pub async fn locate(&self, name: &str) -> Result<Locations, ApiError> {
        self.post_json("locate", &NameRequest { name }).await
    }

    pub async fn generate(&self, request: &EncounterRequest) -> Result<Generation, ApiError> {
        self.post_json("generate", request).await
    }

    pub async fn distribution(
        &self,
        request: &EncounterRequest,
    ) -> Result<Distributions, ApiError> {
        self.post_json("distribution", request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = self.endpoint(path);
        debug!("POST {endpoint}");

        let res = self.http.post(&endpoint).json(body).send().await?;
        let status = res.status();
        let body = res.text().await?;

        read_body(&endpoint, status, &body)
    }
}

fn check_status(endpoint: &str, status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        })
    }
}

fn read_body<T: DeserializeOwned>(
    endpoint: &str,
    status: StatusCode,
    body: &str,
) -> Result<T, ApiError> {
    check_status(endpoint, status)?;

    serde_json::from_str(body).map_err(|source| ApiError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
