//! YouTube Data API v3 client implementation.
//!
//! Handles authentication and the three read-only lookups the report needs:
//! video search, video-to-channel resolution, and channel details.

use crate::config::Config;
use crate::report::VideoApi;
use crate::youtube::error::ApiError;
use crate::youtube::models::{
    ApiChannelItem, ApiResponse, ApiSearchItem, ApiVideoItem, ChannelDetails, VideoSummary,
};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// YouTube Data API v3 client.
///
/// One reusable HTTP client handle shared across all API calls.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Base URL for YouTube Data API
    base_url: String,
}

impl YouTubeClient {
    /// Create a new YouTube client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<YouTubeClient, ApiError>` - New client or error
    ///
    /// # Details
    /// Requires an API key; an empty key is rejected up front rather than
    /// letting the first request fail with a less useful message.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        if config.api_key.is_empty() {
            return Err(ApiError::Auth(
                "YouTube API key is required. Please set it in config.jsonc".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
        })
    }

    /// Perform a GET against a Data API endpoint and return the item list.
    ///
    /// # Arguments
    /// * `endpoint` - Endpoint name relative to the base URL (e.g. "search")
    /// * `params` - Query parameters, excluding the key
    ///
    /// # Details
    /// Non-success responses are classified through the API error envelope;
    /// success responses are parsed as an `ApiResponse<T>` item list. The
    /// developer key is appended here so callers never handle it.
    async fn get_items<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &error_text));
        }

        let api_response: ApiResponse<T> = response.json().await?;
        Ok(api_response.items)
    }
}

#[async_trait]
impl VideoApi for YouTubeClient {
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoSummary>, ApiError> {
        let max_results = max_results.to_string();
        let params = [
            ("part", "id,snippet"),
            ("type", "video"),
            ("q", query),
            ("maxResults", &max_results),
        ];

        let items: Vec<ApiSearchItem> = self.get_items("search", &params).await?;
        debug!("search.list returned {} item(s) for {:?}", items.len(), query);

        items.into_iter().map(VideoSummary::try_from).collect()
    }

    async fn resolve_channel_id(&self, video_id: &str) -> Result<String, ApiError> {
        let params = [("part", "snippet"), ("id", video_id)];

        let items: Vec<ApiVideoItem> = self.get_items("videos", &params).await?;
        let item = items.into_iter().next().ok_or_else(|| ApiError::NotFound {
            kind: "video",
            id: video_id.to_string(),
        })?;

        debug!(
            "video {} belongs to channel {}",
            video_id, item.snippet.channel_id
        );
        Ok(item.snippet.channel_id)
    }

    async fn fetch_channel(&self, channel_id: &str) -> Result<ChannelDetails, ApiError> {
        let params = [("part", "snippet"), ("id", channel_id)];

        let items: Vec<ApiChannelItem> = self.get_items("channels", &params).await?;
        let item = items.into_iter().next().ok_or_else(|| ApiError::NotFound {
            kind: "channel",
            id: channel_id.to_string(),
        })?;

        Ok(ChannelDetails::from(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_client_new_requires_api_key() {
        let config = Config::default();
        let err = YouTubeClient::new(&config).unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn test_client_new_with_api_key() {
        let config = Config {
            api_key: "test_key".to_string(),
            ..Config::default()
        };
        assert!(YouTubeClient::new(&config).is_ok());
    }
}
