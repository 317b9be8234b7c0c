//! The automatic title styling pipeline.
//!
//! Based on a set of rules we try to introduce bold and italic sections in
//! a title: the fragment is parsed into a tree, every text node is rewritten
//! through the ordered rule table, the tree is reserialized with the
//! inserted tags made literal, and the result is sanitized against the
//! allow-list. Styling only happens for genuine content-loop titles; the
//! caller states that with the `in_the_loop` flag. Sanitization always runs.

use crate::{dom, rules, sanitize};

/// Style a title.
///
/// Pure and total: never fails, never panics, always returns a sanitized
/// string. With `in_the_loop` false the rule phase is skipped and the input
/// is only sanitized.
#[tracing::instrument(skip_all, fields(title_len = title.len(), in_the_loop))]
pub fn style_title(title: &str, in_the_loop: bool) -> String {
    if !in_the_loop {
        return sanitize::clean(title);
    }

    let mut fragment = dom::Fragment::parse(title);
    fragment.rewrite_text(rules::apply_sequence);
    let markup = dom::decode_entities(&fragment.to_html());
    sanitize::clean(&markup)
}

/// Outcome of styling one title, for JSON report output.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
pub struct StyleReport {
    /// The title as supplied.
    pub input: String,
    /// The sanitized, possibly styled title.
    pub output: String,
    /// Whether styling or sanitization changed the text.
    pub changed: bool,
}

impl StyleReport {
    /// Style a title and record the outcome.
    pub fn generate(title: &str, in_the_loop: bool) -> Self {
        let output = style_title(title, in_the_loop);
        Self {
            changed: output != title,
            input: title.to_string(),
            output,
        }
    }
}
