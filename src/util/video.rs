use thiserror::Error;
use url::Url;

/// Host serving embedded playback.
const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Maximum accepted length of a video reference.
const MAX_VIDEO_REF_LEN: usize = 64;

/// Errors from turning a title's video reference into a playable URL.
#[derive(Error, Debug)]
pub enum VideoRefError {
    #[error("Title has no video")]
    Empty,

    /// Reference contains characters outside `[A-Za-z0-9_-]`.
    #[error("Invalid video reference: {0}")]
    InvalidChars(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Build the embed URL for a video reference.
///
/// Playback parameters mirror what the catalog page requests: autoplay,
/// sound on, player controls, 1080p preferred.
///
/// ```
/// use marquee::util::embed_url;
///
/// let url = embed_url("dQw4w9WgXcQ").unwrap();
/// assert_eq!(url.path(), "/embed/dQw4w9WgXcQ");
/// assert!(embed_url("../etc").is_err());
/// ```
pub fn embed_url(video_ref: &str) -> Result<Url, VideoRefError> {
    let video_ref = video_ref.trim();
    if video_ref.is_empty() {
        return Err(VideoRefError::Empty);
    }
    if video_ref.len() > MAX_VIDEO_REF_LEN
        || !video_ref
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(VideoRefError::InvalidChars(video_ref.to_string()));
    }

    let mut url = Url::parse(EMBED_BASE)?.join(video_ref)?;
    url.query_pairs_mut()
        .append_pair("autoplay", "1")
        .append_pair("mute", "0")
        .append_pair("controls", "1")
        .append_pair("vq", "hd1080");
    Ok(url)
}

/// Check a URL before handing it to the system opener.
///
/// Only `http`/`https` URLs are passed to `open::that`, which would otherwise
/// happily launch local files or custom scheme handlers.
pub fn validate_url_for_open(url: &Url) -> Result<(), String> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("Refusing to open {} URL", scheme)),
    }
}
