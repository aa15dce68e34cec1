use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_fetcher::transcript::youtube::YoutubeTranscriptClient;
use transcript_fetcher::{output, transcript, utils, Cli, Config, FetchReport};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Stdout carries exactly one JSON line; all diagnostics go to stderr.
    let default_filter = if cli.verbose {
        "transcript_fetcher=debug"
    } else {
        "transcript_fetcher=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(video) = cli.video else {
        output::print_report(&FetchReport::failure(output::MISSING_VIDEO_ID))?;
        std::process::exit(1);
    };

    let config = Config::load().await?;
    let video_id = utils::extract_video_id(&video);

    let report = match fetch_transcript(&config, &video_id).await {
        Ok(transcript) => FetchReport::success(transcript),
        // All fetch failures collapse to one string; the exit status
        // stays 0 and only the JSON payload reports the failure.
        Err(e) => FetchReport::failure(e.to_string()),
    };

    output::print_report(&report)?;

    Ok(())
}

async fn fetch_transcript(config: &Config, video_id: &str) -> Result<String> {
    let fetcher = YoutubeTranscriptClient::new(&config.http)?;
    transcript::fetch_joined(&fetcher, video_id, &config.languages).await
}
