//! Document title assembly.
//!
//! Builds the `<title>` text for the current view: site name, the site
//! description on the front page, and a page-number suffix on paged views.
//! Feeds pass through untouched.

/// Site-level state the title builder needs.
#[derive(Debug, Clone, Default)]
pub struct SiteInfo {
    /// The site name.
    pub name: String,
    /// The site description, if one is set.
    pub description: Option<String>,
    /// The blog index is being rendered.
    pub is_home: bool,
    /// The configured front page is being rendered.
    pub is_front_page: bool,
    /// A syndication feed is being rendered.
    pub is_feed: bool,
    /// The not-found view is being rendered.
    pub is_404: bool,
    /// Current page number of a paged view (1 when unpaged).
    pub page: usize,
}

/// Build the document title from the view's base title.
///
/// `current` is the view-specific prefix the host already produced (usually
/// ending in a separator); `sep` joins the appended segments.
#[tracing::instrument(skip_all, fields(page = site.page))]
pub fn document_title(current: &str, sep: &str, site: &SiteInfo) -> String {
    if site.is_feed {
        return current.to_string();
    }

    let mut title = format!("{current}{}", site.name);

    if let Some(ref description) = site.description
        && !description.is_empty()
        && (site.is_home || site.is_front_page)
    {
        title.push_str(&format!(" {sep} {description}"));
    }

    if site.page >= 2 && !site.is_404 {
        title.push_str(&format!(" {sep} Page {}", site.page));
    }

    title
}
