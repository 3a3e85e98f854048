//! YouTube Data API v3 models and data structures.
//!
//! Wire structures for the search, video, and channel endpoints, and the
//! domain types the rest of the application works with.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::youtube::error::ApiError;

/// A video as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSummary {
    /// YouTube video ID
    pub id: String,
    /// Video title
    pub title: String,
    /// Upload timestamp from the search snippet
    pub published_at: DateTime<Utc>,
}

impl VideoSummary {
    /// Canonical watch URL derived from the video ID.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// Metadata of the channel that uploaded a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDetails {
    /// Channel display name
    pub title: String,
    /// Channel description, empty when the channel has none
    pub description: String,
}

/// YouTube API list response wrapper.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Response items; the API omits the field entirely on some empty results
    #[serde(default)]
    pub items: Vec<T>,
}

/// Search result item from search.list.
#[derive(Debug, Deserialize)]
pub struct ApiSearchItem {
    /// Compound ID object (search results wrap the video ID)
    pub id: ApiSearchId,
    /// Snippet containing title and upload date
    pub snippet: ApiSearchSnippet,
}

/// Compound ID of a search result.
#[derive(Debug, Deserialize)]
pub struct ApiSearchId {
    /// Video ID
    #[serde(rename = "videoId")]
    pub video_id: String,
}

/// Search result snippet.
#[derive(Debug, Deserialize)]
pub struct ApiSearchSnippet {
    /// Video title
    pub title: String,
    /// Published date (RFC 3339)
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

/// Video item from videos.list; only the owning channel is read.
#[derive(Debug, Deserialize)]
pub struct ApiVideoItem {
    /// Snippet containing the channel reference
    pub snippet: ApiVideoSnippet,
}

/// Video snippet.
#[derive(Debug, Deserialize)]
pub struct ApiVideoSnippet {
    /// ID of the channel that uploaded the video
    #[serde(rename = "channelId")]
    pub channel_id: String,
}

/// Channel item from channels.list.
#[derive(Debug, Deserialize)]
pub struct ApiChannelItem {
    /// Snippet containing the display metadata
    pub snippet: ApiChannelSnippet,
}

/// Channel snippet.
#[derive(Debug, Deserialize)]
pub struct ApiChannelSnippet {
    /// Channel display name
    pub title: String,
    /// Channel description
    #[serde(default)]
    pub description: String,
}

/// Error body the Data API returns on failed calls.
#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    /// Error details
    pub error: ApiErrorBody,
}

/// Inner error object.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub message: String,
    /// Individual error entries carrying the machine-readable reason
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

/// Single entry of the error list.
#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable reason, e.g. "quotaExceeded" or "keyInvalid"
    pub reason: Option<String>,
}

impl TryFrom<ApiSearchItem> for VideoSummary {
    type Error = ApiError;

    /// Convert a search result item into a video summary.
    ///
    /// # Details
    /// Parses the published date from RFC 3339. A snippet with an
    /// unparsable date is treated as a malformed response.
    fn try_from(item: ApiSearchItem) -> Result<Self, Self::Error> {
        let published_at = DateTime::parse_from_rfc3339(&item.snippet.published_at)
            .map_err(|e| {
                ApiError::Malformed(format!(
                    "bad publishedAt for video {}: {}",
                    item.id.video_id, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(VideoSummary {
            id: item.id.video_id,
            title: item.snippet.title,
            published_at,
        })
    }
}

impl From<ApiChannelItem> for ChannelDetails {
    fn from(item: ApiChannelItem) -> Self {
        ChannelDetails {
            title: item.snippet.title,
            description: item.snippet.description,
        }
    }
}
