//! Advisory shape check for the URL input box.

/// Hint attached to the input when the text does not look like a watch URL.
pub const INVALID_URL_HINT: &str = "Please enter a valid YouTube video URL";

const VIDEO_ID_LEN: usize = 11;

/// Validity flag carried by the URL input. Purely advisory: an `Invalid` input
/// can still be submitted and the backend decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputValidity {
    #[default]
    Valid,
    Invalid,
}

impl InputValidity {
    pub fn hint(self) -> Option<&'static str> {
        match self {
            InputValidity::Valid => None,
            InputValidity::Invalid => Some(INVALID_URL_HINT),
        }
    }
}

/// Classifies the raw field value. Empty input is never flagged.
pub fn validate_input(raw: &str) -> InputValidity {
    let url = raw.trim();
    if url.is_empty() || is_recognized_video_url(url) {
        InputValidity::Valid
    } else {
        InputValidity::Invalid
    }
}

/// Accepts `[http[s]://][www.]youtube.com/watch?v=<id>` where `<id>` is exactly
/// eleven characters from `[A-Za-z0-9_-]`, optionally followed by further
/// query parameters or a fragment.
pub fn is_recognized_video_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let Some(id_and_tail) = rest.strip_prefix("youtube.com/watch?v=") else {
        return false;
    };

    let bytes = id_and_tail.as_bytes();
    let id_len = bytes
        .iter()
        .take(VIDEO_ID_LEN + 1)
        .take_while(|b| is_video_id_byte(**b))
        .count();
    id_len == VIDEO_ID_LEN && matches!(bytes.get(VIDEO_ID_LEN), None | Some(b'&') | Some(b'#'))
}

fn is_video_id_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

