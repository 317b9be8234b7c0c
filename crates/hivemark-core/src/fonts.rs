//! Web font stylesheet URL construction.
//!
//! Builds the Google Fonts request for the theme's two families. Either
//! family can be switched off (a translation may not cover its glyphs);
//! with both off there is no stylesheet to load.

use url::Url;

/// Base endpoint for the fonts stylesheet.
const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css";

/// Character subsets requested alongside the families.
const FONT_SUBSETS: &str = "latin,latin-ext";

/// Which of the theme's font families to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontToggles {
    /// Load Droid Serif (body text).
    pub droid_serif: bool,
    /// Load Playfair Display (headings).
    pub playfair_display: bool,
}

impl Default for FontToggles {
    fn default() -> Self {
        Self {
            droid_serif: true,
            playfair_display: true,
        }
    }
}

/// Build the fonts stylesheet URL, or `None` when every family is off.
#[tracing::instrument(fields(droid_serif = toggles.droid_serif, playfair_display = toggles.playfair_display))]
pub fn fonts_url(toggles: FontToggles) -> Option<Url> {
    let mut families = Vec::new();

    if toggles.droid_serif {
        families.push("Droid Serif:400,700,400italic");
    }
    if toggles.playfair_display {
        families.push("Playfair Display:400,700,900,400italic,700italic,900italic");
    }

    if families.is_empty() {
        return None;
    }

    let mut url = Url::parse(GOOGLE_FONTS_CSS).expect("valid base URL");
    url.query_pairs_mut()
        .append_pair("family", &families.join("|"))
        .append_pair("subset", FONT_SUBSETS);
    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_families_by_default() {
        let url = fonts_url(FontToggles::default()).unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("Droid+Serif"));
        assert!(query.contains("Playfair+Display"));
        assert!(query.contains("subset=latin"));
    }

    #[test]
    fn families_are_pipe_joined() {
        let url = fonts_url(FontToggles::default()).unwrap();
        let (_, family) = url.query_pairs().find(|(k, _)| k == "family").unwrap();
        assert_eq!(
            family,
            "Droid Serif:400,700,400italic|Playfair Display:400,700,900,400italic,700italic,900italic"
        );
    }

    #[test]
    fn single_family_when_one_is_off() {
        let url = fonts_url(FontToggles {
            droid_serif: false,
            playfair_display: true,
        })
        .unwrap();
        let (_, family) = url.query_pairs().find(|(k, _)| k == "family").unwrap();
        assert!(family.starts_with("Playfair Display"));
        assert!(!family.contains('|'));
    }

    #[test]
    fn no_url_when_all_families_off() {
        assert!(fonts_url(FontToggles {
            droid_serif: false,
            playfair_display: false,
        })
        .is_none());
    }

    #[test]
    fn url_points_at_the_fonts_endpoint() {
        let url = fonts_url(FontToggles::default()).unwrap();
        assert_eq!(url.host_str(), Some("fonts.googleapis.com"));
        assert_eq!(url.path(), "/css");
    }
}
