use url::Url;

const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
];

/// Extract a video ID from a bare identifier or a YouTube URL.
///
/// Bare identifiers are passed through verbatim as opaque strings.
/// Recognized URL shapes: `watch?v=`, `youtu.be/<id>`, and the
/// `embed/`, `shorts/`, `live/`, `v/` path forms.
pub fn extract_video_id(input: &str) -> String {
    let Ok(parsed) = Url::parse(input) else {
        return input.to_string();
    };

    let Some(host) = parsed.host_str() else {
        return input.to_string();
    };

    if !YOUTUBE_HOSTS.contains(&host) {
        return input.to_string();
    }

    if host == "youtu.be" {
        if let Some(id) = first_path_segment(&parsed) {
            return id;
        }
        return input.to_string();
    }

    // watch?v=<id>
    for (key, value) in parsed.query_pairs() {
        if key == "v" && !value.is_empty() {
            return value.into_owned();
        }
    }

    // embed/<id>, shorts/<id>, live/<id>, v/<id>
    if let Some(mut segments) = parsed.path_segments() {
        if let Some(prefix) = segments.next() {
            if matches!(prefix, "embed" | "shorts" | "live" | "v") {
                if let Some(id) = segments.next().filter(|id| !id.is_empty()) {
                    return id.to_string();
                }
            }
        }
    }

    input.to_string()
}

fn first_path_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .next()
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_passes_through() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_opaque_id_is_not_validated() {
        assert_eq!(extract_video_id("not-an-id!!"), "not-an-id!!");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=PL1"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=10"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_shorts_url() {
        assert_eq!(
            extract_video_id("https://m.youtube.com/shorts/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_non_youtube_url_passes_through() {
        assert_eq!(
            extract_video_id("https://example.com/watch?v=abc"),
            "https://example.com/watch?v=abc"
        );
    }
}
