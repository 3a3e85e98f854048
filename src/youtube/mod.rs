//! YouTube Data API v3 integration module.
//!
//! Provides the API client, the error taxonomy, and the wire models for the
//! search and metadata lookups.

pub mod client;
pub mod error;
pub mod models;

pub use client::YouTubeClient;
pub use error::ApiError;
pub use models::{ChannelDetails, VideoSummary};
