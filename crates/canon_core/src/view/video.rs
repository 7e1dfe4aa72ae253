//! Video identifier extraction.

use url::Url;

/// Extracts the embeddable video identifier from a share URL.
///
/// A non-empty `v` query parameter wins; otherwise the last `/`-delimited
/// path segment is used. Returns `None` for URLs that fail to parse or
/// yield no non-empty candidate; callers omit the video block in that case.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;

    for (key, value) in parsed.query_pairs() {
        if key == "v" {
            if !value.is_empty() {
                return Some(value.into_owned());
            }
            break;
        }
    }

    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::extract_video_id;

    #[test]
    fn query_parameter_wins() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn short_link_uses_last_path_segment() {
        assert_eq!(
            extract_video_id("https://youtu.be/abc123").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn empty_query_parameter_falls_back_to_the_path() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=").as_deref(),
            Some("watch")
        );
    }

    #[test]
    fn bare_host_and_trailing_slash_are_unparsable() {
        assert_eq!(extract_video_id("https://example.com/"), None);
        assert_eq!(extract_video_id("https://youtu.be/abc/"), None);
    }

    #[test]
    fn malformed_input_is_unparsable() {
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id(""), None);
    }
}
