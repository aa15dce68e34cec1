use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod youtube;

use crate::Result;

/// One timed unit of subtitle text as returned by the transcript source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Display text of the fragment
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

/// Trait for fetching an ordered caption sequence for a video
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the caption fragments for `video_id`, preferring caption
    /// tracks in the order given by `languages`.
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<CaptionFragment>>;
}

/// Join fragment texts in sequence order with single-space separators.
///
/// Zero fragments yields the empty string.
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetch and join in one shot. Single attempt, no retries.
pub async fn fetch_joined(
    fetcher: &dyn TranscriptFetcher,
    video_id: &str,
    languages: &[String],
) -> Result<String> {
    tracing::info!("Fetching transcript for video: {}", video_id);

    let fragments = fetcher.fetch(video_id, languages).await?;

    tracing::debug!("Fetched {} caption fragments", fragments.len());

    Ok(join_fragments(&fragments))
}
