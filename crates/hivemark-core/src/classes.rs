//! Body and post CSS class computation.
//!
//! Host template state (what view is rendering, which widgets a sidebar
//! holds) arrives as an explicit [`PageContext`] instead of ambient
//! globals; every function is a pure list transform.

/// The rendering context a class filter needs to know about.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    /// A single post is being rendered.
    pub is_single: bool,
    /// A static page is being rendered.
    pub is_page: bool,
    /// An archive view is being rendered.
    pub is_archive: bool,
    /// The blog index is being rendered.
    pub is_home: bool,
    /// A search result view is being rendered.
    pub is_search: bool,
    /// The site has more than one published author.
    pub is_multi_author: bool,
    /// Widget ids active in the primary sidebar, in order.
    pub sidebar_widgets: Vec<String>,
}

/// Widget id marker for the EU cookie-law banner widget.
const EU_COOKIE_LAW_WIDGET: &str = "eu_cookie_law";

/// Post-format classes removed by [`strip_post_format_classes`].
const POST_FORMAT_CLASSES: &[&str] = &[
    "format-quote",
    "format-image",
    "format-aside",
    "format-gallery",
    "format-audio",
    "format-video",
    "format-link",
    "format-status",
    "format-chat",
];

/// Extend the body class list for the current view.
///
/// Adds `group-blog` on multi-author sites, and `has_sidebar` on single
/// post/page views with an active sidebar. A sidebar holding only the EU
/// cookie-law widget renders no markup, so it must not claim the
/// `has_sidebar` layout.
pub fn body_classes(ctx: &PageContext, mut classes: Vec<String>) -> Vec<String> {
    if ctx.is_multi_author {
        classes.push("group-blog".to_string());
    }

    if (ctx.is_single || ctx.is_page) && !ctx.sidebar_widgets.is_empty() {
        let lone_cookie_banner = ctx.sidebar_widgets.len() == 1
            && ctx.sidebar_widgets[0].contains(EU_COOKIE_LAW_WIDGET);
        if !lone_cookie_banner {
            classes.push("has_sidebar".to_string());
        }
    }

    classes
}

/// Extend the post class list: index-like views lay posts out on a grid.
pub fn post_classes(ctx: &PageContext, mut classes: Vec<String>) -> Vec<String> {
    if ctx.is_archive || ctx.is_home || ctx.is_search {
        classes.push("grid__item".to_string());
    }
    classes
}

/// Remove the post-format classes from a post class list.
pub fn strip_post_format_classes(classes: Vec<String>) -> Vec<String> {
    classes
        .into_iter()
        .filter(|class| !POST_FORMAT_CLASSES.contains(&class.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn multi_author_adds_group_blog() {
        let ctx = PageContext {
            is_multi_author: true,
            ..Default::default()
        };
        assert_eq!(body_classes(&ctx, vec![]), strings(&["group-blog"]));
    }

    #[test]
    fn single_with_sidebar_adds_has_sidebar() {
        let ctx = PageContext {
            is_single: true,
            sidebar_widgets: strings(&["search-2", "recent-posts-1"]),
            ..Default::default()
        };
        assert_eq!(body_classes(&ctx, vec![]), strings(&["has_sidebar"]));
    }

    #[test]
    fn lone_cookie_law_widget_does_not_count_as_sidebar() {
        let ctx = PageContext {
            is_page: true,
            sidebar_widgets: strings(&["eu_cookie_law-3"]),
            ..Default::default()
        };
        assert!(body_classes(&ctx, vec![]).is_empty());
    }

    #[test]
    fn cookie_law_widget_alongside_others_still_counts() {
        let ctx = PageContext {
            is_page: true,
            sidebar_widgets: strings(&["eu_cookie_law-3", "search-2"]),
            ..Default::default()
        };
        assert_eq!(body_classes(&ctx, vec![]), strings(&["has_sidebar"]));
    }

    #[test]
    fn archive_views_without_sidebar_get_no_sidebar_class() {
        let ctx = PageContext {
            is_archive: true,
            sidebar_widgets: strings(&["search-2"]),
            ..Default::default()
        };
        assert!(body_classes(&ctx, vec![]).is_empty());
    }

    #[test]
    fn existing_classes_are_preserved() {
        let ctx = PageContext {
            is_multi_author: true,
            ..Default::default()
        };
        assert_eq!(
            body_classes(&ctx, strings(&["custom"])),
            strings(&["custom", "group-blog"])
        );
    }

    #[test]
    fn index_views_add_grid_item() {
        for ctx in [
            PageContext {
                is_archive: true,
                ..Default::default()
            },
            PageContext {
                is_home: true,
                ..Default::default()
            },
            PageContext {
                is_search: true,
                ..Default::default()
            },
        ] {
            assert_eq!(post_classes(&ctx, vec![]), strings(&["grid__item"]));
        }
    }

    #[test]
    fn single_view_gets_no_grid_item() {
        let ctx = PageContext {
            is_single: true,
            ..Default::default()
        };
        assert!(post_classes(&ctx, vec![]).is_empty());
    }

    #[test]
    fn post_format_classes_are_removed() {
        let classes = strings(&["post-42", "format-quote", "format-video", "sticky"]);
        assert_eq!(
            strip_post_format_classes(classes),
            strings(&["post-42", "sticky"])
        );
    }
}
