//! Allow-list HTML sanitization for title output.
//!
//! The final gate on every styled (or unstyled) title: only `<strong>`,
//! `<em>`, `<b>`, and `<i>` survive, with no attributes. Any other tag is
//! stripped while its text content is kept. This step runs unconditionally,
//! whether or not the styling rules did.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::Builder;

/// Tags a sanitized title may contain.
pub const ALLOWED_TAGS: &[&str] = &["strong", "em", "b", "i"];

static TITLE_CLEANER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(HashSet::from_iter(ALLOWED_TAGS.iter().copied()))
        .tag_attributes(HashMap::new())
        .generic_attributes(HashSet::new())
        // keep the text of stripped tags, including script/style
        .clean_content_tags(HashSet::new())
        .link_rel(None)
        .strip_comments(true);
    builder
});

/// Sanitize a title against the allow-list.
///
/// Idempotent: cleaning already-clean output returns it unchanged.
#[tracing::instrument(skip_all, fields(input_len = html.len()))]
pub fn clean(html: &str) -> String {
    TITLE_CLEANER.clean(html).to_string()
}
