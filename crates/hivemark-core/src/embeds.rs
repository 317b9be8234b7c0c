//! Media embed extraction from content blobs.
//!
//! Finds audio/video/object/embed/iframe markup in a post body so themes
//! can pull the first embed out of a media-format post. One compiled
//! pattern per media type (the combined original pattern needed a
//! backreference the `regex` crate doesn't have); matches are merged by
//! byte offset so output order equals document order.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A media type whose embed markup can be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MediaType {
    /// `<audio>` embeds.
    Audio,
    /// `<video>` embeds.
    Video,
    /// `<object>` embeds.
    Object,
    /// `<embed>` embeds.
    Embed,
    /// `<iframe>` embeds.
    Iframe,
}

impl MediaType {
    /// All extractable media types.
    pub const ALL: [Self; 5] = [
        Self::Audio,
        Self::Video,
        Self::Object,
        Self::Embed,
        Self::Iframe,
    ];

    /// The tag name this media type matches.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Object => "object",
            Self::Embed => "embed",
            Self::Iframe => "iframe",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compiled matcher per media type: a full `<tag ...>...</tag>` block
/// or a self-closing `<tag ... />`.
static MEDIA_PATTERNS: LazyLock<Vec<(MediaType, Regex)>> = LazyLock::new(|| {
    MediaType::ALL
        .iter()
        .map(|media| {
            let tag = media.as_str();
            let pattern = format!(r"(?s)<{tag}[^<]*?(?:>.*?</{tag}>|\s*/>)");
            (*media, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
});

/// Extract media embeds from a content blob, in document order.
///
/// `types` narrows the search; `None` matches every media type. A match
/// nested inside an earlier one is dropped, so Flash-style
/// `<object><embed /></object>` markup counts as a single embed (the
/// outer block), as a single left-to-right scan would find it.
#[tracing::instrument(skip_all, fields(content_len = content.len()))]
pub fn media_embedded_in_content(content: &str, types: Option<&[MediaType]>) -> Vec<String> {
    let mut found: Vec<(usize, &str)> = Vec::new();

    for (media, pattern) in MEDIA_PATTERNS.iter() {
        if let Some(filter) = types
            && !filter.contains(media)
        {
            continue;
        }
        for matched in pattern.find_iter(content) {
            found.push((matched.start(), matched.as_str()));
        }
    }

    found.sort_by_key(|(start, _)| *start);

    let mut results = Vec::new();
    let mut scan_end = 0;
    for (start, text) in found {
        if start < scan_end {
            continue;
        }
        scan_end = start + text.len();
        results.push(text.to_string());
    }
    results
}
