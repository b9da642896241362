use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static VIDEO_ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("video id regex should compile")
});
static EMBED_PATH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/embed/([a-zA-Z0-9_-]{11})").expect("embed path regex should compile")
});

pub fn is_video_id(candidate: &str) -> bool {
    VIDEO_ID_PATTERN.is_match(candidate)
}

/// Video id from a bare id, a `youtu.be/<id>` short link, a `?v=<id>`
/// watch URL or an `/embed/<id>` URL.
pub fn extract_video_id(url_or_id: &str) -> Option<String> {
    let candidate = url_or_id.trim();
    if candidate.is_empty() {
        return None;
    }
    if is_video_id(candidate) {
        return Some(candidate.to_string());
    }

    let url = Url::parse(candidate).ok()?;
    if url.host_str().is_some_and(|host| host.contains("youtu.be")) {
        let id = url.path().trim_start_matches('/');
        return (!id.is_empty()).then(|| id.to_string());
    }
    if let Some((_, id)) = url.query_pairs().find(|(key, _)| key == "v")
        && !id.is_empty()
    {
        return Some(id.into_owned());
    }

    EMBED_PATH_PATTERN
        .captures(url.path())
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_url_shapes() {
        let id = "dQw4w9WgXcQ";
        assert_eq!(extract_video_id(id).as_deref(), Some(id));
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some(id)
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=4")
                .as_deref(),
            Some(id)
        );
        assert_eq!(
            extract_video_id("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ")
                .as_deref(),
            Some(id)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("not a url"), None);
        assert_eq!(extract_video_id("https://example.com/video"), None);
    }
}
