//! Query runner: drives the search and channel lookups and renders the
//! per-video report.
//!
//! The runner talks to the platform through the [`VideoApi`] port so the
//! pipeline can be exercised against an in-memory implementation.

use crate::youtube::{ApiError, ChannelDetails, VideoSummary};
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::io::Write;

/// Width of the separator line printed after each report block.
const SEPARATOR_WIDTH: usize = 30;

/// Read-only video platform operations the report needs.
#[async_trait]
pub trait VideoApi {
    /// Search for videos matching a phrase.
    ///
    /// # Arguments
    /// * `query` - Free-text search phrase
    /// * `max_results` - Maximum number of results to return
    ///
    /// # Returns
    /// * Up to `max_results` video summaries in platform ranking order
    async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoSummary>, ApiError>;

    /// Resolve the ID of the channel that uploaded a video.
    ///
    /// # Details
    /// Fails with [`ApiError::NotFound`] when the platform no longer knows
    /// the video ID.
    async fn resolve_channel_id(&self, video_id: &str) -> Result<String, ApiError>;

    /// Fetch display metadata for a channel.
    ///
    /// # Details
    /// Fails with [`ApiError::NotFound`] when the platform no longer knows
    /// the channel ID.
    async fn fetch_channel(&self, channel_id: &str) -> Result<ChannelDetails, ApiError>;
}

/// Run the search and print one report block per result.
///
/// # Arguments
/// * `api` - Platform API implementation
/// * `query` - Search phrase
/// * `limit` - Maximum number of videos to report on
/// * `out` - Sink the report is written to
///
/// # Returns
/// * `Result<()>` - Success or the first failed lookup
///
/// # Details
/// Each video is processed fully before the next one starts: resolve the
/// uploading channel from the video ID, fetch the channel details, write the
/// block. Results are reported in search order. A search with no results
/// writes nothing and succeeds.
pub async fn run_report<A, W>(api: &A, query: &str, limit: u32, out: &mut W) -> Result<()>
where
    A: VideoApi,
    W: Write,
{
    let videos = api.search_videos(query, limit).await?;
    info!("search for {:?} returned {} video(s)", query, videos.len());

    for video in &videos {
        let channel_id = api.resolve_channel_id(&video.id).await?;
        let channel = api.fetch_channel(&channel_id).await?;

        debug!(
            "video {} published {} by channel {} ({})",
            video.id,
            video.published_at.format("%Y-%m-%d"),
            channel_id,
            channel.title
        );
        if !channel.description.is_empty() {
            debug!("channel {} description: {}", channel_id, channel.description);
        }

        write_block(out, video, &channel)?;
    }

    Ok(())
}

/// Write one report block for a video and its resolved channel.
fn write_block<W: Write>(
    out: &mut W,
    video: &VideoSummary,
    channel: &ChannelDetails,
) -> std::io::Result<()> {
    writeln!(out, "Video Title: {}", video.title)?;
    writeln!(out, "Channel: {}", channel.title)?;
    writeln!(out, "Video URL: {}", video.watch_url())?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}
