pub mod model;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::info;

use crate::config::ApiSettings;
use model::{SearchResponse, Song};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search endpoint reported failure")]
    Unsuccessful,
}

pub struct ApiService {
    client: Client,
    settings: ApiSettings,
}

impl ApiService {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("saavn-tui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, settings })
    }

    pub fn search_url(&self) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.settings.base_url)
            .and_then(|base| base.join("api/search/songs"))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("query", &self.settings.query)
            .append_pair("limit", &self.settings.limit.to_string());
        Ok(url)
    }

    /// Runs the configured search and returns the result list.
    pub async fn fetch_songs(&self) -> Result<Vec<Song>, ApiError> {
        let url = self.search_url()?;
        info!(url = url.as_str(), "api_search_request");

        let response: SearchResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.success {
            return Err(ApiError::Unsuccessful);
        }

        info!(
            total = response.data.total,
            returned = response.data.results.len(),
            "api_search_response"
        );
        Ok(response.data.results)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
