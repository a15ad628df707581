use async_trait::async_trait;
use bank::{DeletedFood, Food, Message, NewFood};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The recipe endpoints as the client sees them.
#[async_trait]
pub trait FoodsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Food>, ClientError>;

    async fn get(&self, id: &str) -> Result<Food, ClientError>;

    /// Zero matches is an empty list here, even though the server answers 404.
    async fn search(&self, name: &str) -> Result<Vec<Food>, ClientError>;

    async fn create(&self, food: &NewFood) -> Result<Food, ClientError>;

    async fn update(&self, id: &str, food: &NewFood) -> Result<Food, ClientError>;

    async fn delete(&self, id: &str) -> Result<DeletedFood, ClientError>;
}

pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// `/api/foods` followed by `segments`, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["api", "foods"]).extend(segments);
        }

        url
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<Message>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };

    Err(ClientError::Status { status, message })
}

#[async_trait]
impl FoodsApi for HttpApi {
    async fn list(&self) -> Result<Vec<Food>, ClientError> {
        let response = self.client.get(self.endpoint(&[])).send().await?;

        decode(response).await
    }

    async fn get(&self, id: &str) -> Result<Food, ClientError> {
        let response = self.client.get(self.endpoint(&[id])).send().await?;

        decode(response).await
    }

    async fn search(&self, name: &str) -> Result<Vec<Food>, ClientError> {
        let response = self
            .client
            .get(self.endpoint(&["search"]))
            .query(&[("name", name)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        decode(response).await
    }

    async fn create(&self, food: &NewFood) -> Result<Food, ClientError> {
        let response = self
            .client
            .post(self.endpoint(&[]))
            .json(food)
            .send()
            .await?;

        decode(response).await
    }

    async fn update(&self, id: &str, food: &NewFood) -> Result<Food, ClientError> {
        let response = self
            .client
            .put(self.endpoint(&[id]))
            .json(food)
            .send()
            .await?;

        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<DeletedFood, ClientError> {
        let response = self.client.delete(self.endpoint(&[id])).send().await?;

        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let api = HttpApi::new("http://localhost:3001").unwrap();

        assert_eq!(
            api.endpoint(&[]).as_str(),
            "http://localhost:3001/api/foods"
        );
        assert_eq!(
            api.endpoint(&["search"]).as_str(),
            "http://localhost:3001/api/foods/search"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_encodes_ids() {
        let api = HttpApi::new("http://example.com/recipes/").unwrap();

        assert_eq!(
            api.endpoint(&["a/b c"]).as_str(),
            "http://example.com/recipes/api/foods/a%2Fb%20c"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpApi::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpApi::new("mailto:cook@example.com"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
