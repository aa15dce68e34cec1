use clap::Parser;

#[derive(Parser)]
#[command(
    name = "get-transcript",
    about = "Fetch a YouTube video transcript and print it as JSON",
    version,
    long_about = "Fetches the caption track for a YouTube video in a fixed preferred \
language order, joins the caption fragments into one transcript string, and prints a \
single JSON object to stdout: {\"success\": true, \"transcript\": ...} on success or \
{\"success\": false, \"error\": ...} on failure."
)]
pub struct Cli {
    /// Video ID (or YouTube URL) to fetch the transcript for
    // Optional here: a missing argument must produce the JSON failure
    // payload, not a clap usage error.
    #[arg(value_name = "VIDEO_ID")]
    pub video: Option<String>,

    /// Enable verbose logging (to stderr; stdout stays JSON-only)
    #[arg(short, long)]
    pub verbose: bool,
}
