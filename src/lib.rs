//! Transcript Fetcher - A Rust CLI tool for fetching YouTube video transcripts
//!
//! This library retrieves the caption track for a video in a preferred language
//! order, joins the caption fragments into a single transcript string, and
//! reports the outcome as a JSON object on standard output.

pub mod cli;
pub mod config;
pub mod output;
pub mod transcript;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use output::FetchReport;
pub use transcript::{CaptionFragment, TranscriptFetcher};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to transcript retrieval
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("Video is unavailable: {0}")]
    VideoUnavailable(String),

    #[error("Subtitles are disabled for this video")]
    CaptionsDisabled,

    #[error("No transcript found for languages {requested:?} (available: {available:?})")]
    LanguageUnavailable {
        requested: Vec<String>,
        available: Vec<String>,
    },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response from YouTube: {0}")]
    MalformedResponse(String),
}
