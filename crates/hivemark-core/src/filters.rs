//! Small output filters: excerpt length, link wrappers, page-menu defaults.

use serde_json::{Map, Value};

/// Default excerpt length, in words.
pub const DEFAULT_EXCERPT_WORDS: usize = 18;

/// Resolve the excerpt length: a configured override, or the theme default.
pub const fn excerpt_length(configured: Option<usize>) -> usize {
    match configured {
        Some(words) => words,
        None => DEFAULT_EXCERPT_WORDS,
    }
}

/// Wrap the current page number of a paginated post in a marker span.
///
/// Linked page numbers arrive as anchor markup and pass through; the
/// current page arrives as a bare number.
pub fn wrap_page_number_link(link: &str) -> String {
    if link.trim().parse::<u64>().is_ok() {
        format!("<span class=\"current\">{link}</span>")
    } else {
        link.to_string()
    }
}

/// Wrap a read-more link so the theme can position it.
pub fn wrap_read_more_link(link: &str) -> String {
    format!("<div class=\"more-link-wrapper\">{link}</div>")
}

/// Default the page-menu fallback to showing a home link.
pub fn page_menu_args(mut args: Map<String, Value>) -> Map<String, Value> {
    args.insert("show_home".to_string(), Value::Bool(true));
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_length_defaults_to_eighteen() {
        assert_eq!(excerpt_length(None), 18);
        assert_eq!(excerpt_length(Some(40)), 40);
    }

    #[test]
    fn current_page_number_is_wrapped() {
        assert_eq!(
            wrap_page_number_link("3"),
            "<span class=\"current\">3</span>"
        );
    }

    #[test]
    fn linked_page_markup_passes_through() {
        let link = "<a href=\"/post/2\">2</a>";
        assert_eq!(wrap_page_number_link(link), link);
    }

    #[test]
    fn read_more_link_is_wrapped() {
        assert_eq!(
            wrap_read_more_link("<a href=\"/post\">more</a>"),
            "<div class=\"more-link-wrapper\"><a href=\"/post\">more</a></div>"
        );
    }

    #[test]
    fn page_menu_gets_home_link() {
        let args = page_menu_args(Map::new());
        assert_eq!(args.get("show_home"), Some(&Value::Bool(true)));
    }

    #[test]
    fn page_menu_overrides_existing_setting() {
        let mut args = Map::new();
        args.insert("show_home".to_string(), Value::Bool(false));
        let args = page_menu_args(args);
        assert_eq!(args.get("show_home"), Some(&Value::Bool(true)));
    }
}
