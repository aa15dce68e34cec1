use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

use super::{CaptionFragment, TranscriptFetcher};
use crate::config::HttpConfig;
use crate::{Result, TranscriptError};

const PLAYER_ENDPOINT: &str = "https://www.youtube.com/youtubei/v1/player";

// The Android client returns caption track URLs that work without cookies.
const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";

const DEFAULT_USER_AGENT: &str =
    "com.google.android.youtube/20.10.38 (Linux; U; Android 11) gzip";

/// YouTube caption fetcher using the InnerTube player API
pub struct YoutubeTranscriptClient {
    client: Client,
}

/// One caption track entry from the player response
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    pub base_url: String,

    #[serde(rename = "languageCode")]
    pub language_code: String,

    /// "asr" marks auto-generated tracks; absent for manually created ones
    #[serde(default)]
    pub kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    fn matches_language(&self, lang: &str) -> bool {
        self.language_code == lang
            || self
                .language_code
                .split('-')
                .next()
                .is_some_and(|primary| primary == lang)
    }
}

/// Caption payload in YouTube's json3 format
#[derive(Debug, Deserialize)]
struct Json3Transcript {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,

    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,

    #[serde(default)]
    segs: Vec<Json3Segment>,
}

#[derive(Debug, Deserialize)]
struct Json3Segment {
    #[serde(default)]
    utf8: String,
}

impl YoutubeTranscriptClient {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let user_agent = http
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Get the player response for a video via the InnerTube API
    async fn get_player_response(&self, video_id: &str) -> Result<Value> {
        tracing::debug!("Requesting player response for video: {}", video_id);

        let body = json!({
            "context": {
                "client": {
                    "clientName": INNERTUBE_CLIENT_NAME,
                    "clientVersion": INNERTUBE_CLIENT_VERSION,
                    "androidSdkVersion": 30,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .client
            .post(PLAYER_ENDPOINT)
            .query(&[("prettyPrint", "false")])
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TranscriptError::VideoUnavailable(format!(
                "player request returned HTTP {}",
                response.status()
            ))
            .into());
        }

        Ok(response.json().await?)
    }

    /// Extract the caption track list from a player response
    fn caption_tracks(player_response: &Value) -> Result<Vec<CaptionTrack>> {
        let status = player_response["playabilityStatus"]["status"]
            .as_str()
            .unwrap_or("ERROR");

        if status != "OK" {
            let reason = player_response["playabilityStatus"]["reason"]
                .as_str()
                .unwrap_or("video not found")
                .to_string();
            return Err(TranscriptError::VideoUnavailable(reason).into());
        }

        let tracks = &player_response["captions"]["playerCaptionsTracklistRenderer"]
            ["captionTracks"];

        if tracks.is_null() {
            return Err(TranscriptError::CaptionsDisabled.into());
        }

        serde_json::from_value(tracks.clone()).map_err(|e| {
            TranscriptError::MalformedResponse(format!("caption track list: {}", e)).into()
        })
    }

    /// Download a caption track and parse it into fragments
    async fn download_track(&self, track: &CaptionTrack) -> Result<Vec<CaptionFragment>> {
        let mut track_url = Url::parse(&track.base_url)
            .map_err(|_| TranscriptError::MalformedResponse("invalid caption track URL".into()))?;
        track_url.query_pairs_mut().append_pair("fmt", "json3");

        tracing::debug!(
            "Downloading caption track ({}{})",
            track.language_code,
            if track.is_generated() { ", auto-generated" } else { "" }
        );

        let response = self.client.get(track_url).send().await?;

        if !response.status().is_success() {
            return Err(TranscriptError::MalformedResponse(format!(
                "caption track returned HTTP {}",
                response.status()
            ))
            .into());
        }

        let payload: Json3Transcript = response.json().await.map_err(|e| {
            TranscriptError::MalformedResponse(format!("caption payload: {}", e))
        })?;

        Ok(parse_json3(payload))
    }
}

/// Select a caption track by preferred language order.
///
/// All preferred languages are tried against manually created tracks
/// first, then against auto-generated ones.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    languages: &[String],
) -> Option<&'a CaptionTrack> {
    for generated in [false, true] {
        for lang in languages {
            if let Some(track) = tracks
                .iter()
                .find(|t| t.is_generated() == generated && t.matches_language(lang))
            {
                return Some(track);
            }
        }
    }
    None
}

/// Convert a json3 event stream into caption fragments.
///
/// Events with no text segments (styling/window events) and newline
/// placeholders are dropped.
fn parse_json3(payload: Json3Transcript) -> Vec<CaptionFragment> {
    payload
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs
                .iter()
                .map(|seg| seg.utf8.as_str())
                .collect::<String>();
            let text = text.replace('\n', " ").trim().to_string();

            if text.is_empty() {
                return None;
            }

            Some(CaptionFragment {
                text,
                start: event.start_ms as f64 / 1000.0,
                duration: event.duration_ms as f64 / 1000.0,
            })
        })
        .collect()
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptClient {
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Vec<CaptionFragment>> {
        let player_response = self.get_player_response(video_id).await?;
        let tracks = Self::caption_tracks(&player_response)?;

        let track = select_track(&tracks, languages).ok_or_else(|| {
            TranscriptError::LanguageUnavailable {
                requested: languages.to_vec(),
                available: tracks.iter().map(|t| t.language_code.clone()).collect(),
            }
        })?;

        self.download_track(track).await
    }
}
