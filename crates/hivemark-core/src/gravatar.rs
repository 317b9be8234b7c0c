//! Gravatar probe URL construction.
//!
//! Builds the avatar URL with `d=404`, so a request for it answers 404
//! exactly when the email has no Gravatar. The HTTP probe itself is host
//! I/O and stays outside this library.

use url::Url;

/// Build the probe URL for an email address.
///
/// Returns `None` for an empty (or whitespace-only) email. Over plain HTTP
/// the request is spread across the numbered Gravatar subdomains, keyed by
/// the first hash digit as the upstream service expects.
#[tracing::instrument(skip_all, fields(use_ssl))]
pub fn probe_url(email: &str, use_ssl: bool) -> Option<Url> {
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    let hash = format!("{:x}", md5::compute(normalized.as_bytes()));
    let host = if use_ssl {
        "https://secure.gravatar.com".to_string()
    } else {
        let first_digit = u32::from_str_radix(&hash[0..1], 16).unwrap_or(0);
        format!("http://{}.gravatar.com", first_digit % 2)
    };

    let mut url = Url::parse(&format!("{host}/avatar/{hash}")).ok()?;
    url.query_pairs_mut().append_pair("d", "404");
    Some(url)
}
