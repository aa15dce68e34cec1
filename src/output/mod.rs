use anyhow::Result;
use serde::Serialize;

/// Message emitted when the video ID argument is missing
pub const MISSING_VIDEO_ID: &str = "No video ID provided";

/// Outcome of one fetch, in the exact wire shape printed to stdout.
///
/// Exactly one of `transcript` / `error` is present, keyed by `success`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FetchReport {
    Success { success: bool, transcript: String },
    Failure { success: bool, error: String },
}

impl FetchReport {
    pub fn success(transcript: impl Into<String>) -> Self {
        Self::Success {
            success: true,
            transcript: transcript.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            error: error.into(),
        }
    }

    /// Serialize to the single JSON line this tool prints
    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Print the report to stdout as one line of JSON
pub fn print_report(report: &FetchReport) -> Result<()> {
    println!("{}", report.to_json_line()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let report = FetchReport::success("hello world");
        assert_eq!(
            report.to_json_line().unwrap(),
            r#"{"success":true,"transcript":"hello world"}"#
        );
    }

    #[test]
    fn test_failure_shape() {
        let report = FetchReport::failure(MISSING_VIDEO_ID);
        assert_eq!(
            report.to_json_line().unwrap(),
            r#"{"success":false,"error":"No video ID provided"}"#
        );
    }

    #[test]
    fn test_empty_transcript_is_success() {
        let report = FetchReport::success("");
        assert_eq!(
            report.to_json_line().unwrap(),
            r#"{"success":true,"transcript":""}"#
        );
    }

    #[test]
    fn test_transcript_with_quotes_stays_valid_json() {
        let report = FetchReport::success(r#"she said "hi" and left"#);
        let line = report.to_json_line().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["transcript"], r#"she said "hi" and left"#);
    }

    #[test]
    fn test_unicode_transcript_stays_valid_json() {
        let report = FetchReport::success("안녕하세요 \u{1F600}\nnew line");
        let line = report.to_json_line().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["transcript"], "안녕하세요 \u{1F600}\nnew line");
    }
}
