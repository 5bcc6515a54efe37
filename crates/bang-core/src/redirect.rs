//! Router links and search page location helpers
//!
//! The router is the deployed search page that runs the [`SearchHandler`]
//! on its `q` parameter. Engine pages are redirected to it, and the page
//! itself keeps `q` in its own location in sync with the search box.
//!
//! [`SearchHandler`]: crate::handler::SearchHandler

use url::Url;

use crate::provider::set_query_param;

/// Where intercepted searches are sent unless configured otherwise.
pub const DEFAULT_ROUTER_URL: &str = "https://search.tschall.dev/";

/// Query parameter carrying the raw query on the router page.
pub const QUERY_PARAM: &str = "q";

/// Error type for router configuration and page URLs.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

fn parse_url(url: &str) -> Result<Url, RedirectError> {
    Url::parse(url).map_err(|source| RedirectError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

// =============================================================================
// Router Configuration
// =============================================================================

#[derive(Debug, Clone)]
pub struct RouterConfig {
    base: Url,
}

impl RouterConfig {
    pub fn new(url: &str) -> Result<Self, RedirectError> {
        Ok(Self { base: parse_url(url)? })
    }

    /// Router at [`DEFAULT_ROUTER_URL`].
    pub fn default_router() -> Result<Self, RedirectError> {
        Self::new(DEFAULT_ROUTER_URL)
    }

    pub fn url(&self) -> &str {
        self.base.as_str()
    }

    /// Link that hands `query` to the router, or `None` for a blank query.
    pub fn link(&self, query: &str) -> Option<String> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(format!("{}?{}={}", self.base, QUERY_PARAM, urlencoding::encode(trimmed)))
    }
}

// =============================================================================
// Page Location
// =============================================================================

/// The non-empty `q` parameter of a router page location.
pub fn query_from_location(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Origin and path of `href` with `q` set to `query`, or dropped when the
/// query is empty. Any other parameters and the fragment are discarded.
pub fn location_with_query(href: &str, query: &str) -> Result<String, RedirectError> {
    let mut url = parse_url(href)?;
    url.set_query(None);
    url.set_fragment(None);
    if !query.is_empty() {
        set_query_param(&mut url, QUERY_PARAM, query);
    }
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_link() {
        let router = RouterConfig::default_router().unwrap();
        assert_eq!(
            router.link("  !g rust traits "),
            Some("https://search.tschall.dev/?q=%21g%20rust%20traits".to_string())
        );
    }

    #[test]
    fn test_router_link_blank_query() {
        let router = RouterConfig::default_router().unwrap();
        assert_eq!(router.link(""), None);
        assert_eq!(router.link("   "), None);
    }

    #[test]
    fn test_router_url_normalized() {
        let router = RouterConfig::new("http://localhost:5173").unwrap();
        assert_eq!(router.url(), "http://localhost:5173/");
        assert_eq!(router.link("a"), Some("http://localhost:5173/?q=a".to_string()));
    }

    #[test]
    fn test_invalid_router_url() {
        assert!(matches!(RouterConfig::new("search page"), Err(RedirectError::InvalidUrl { .. })));
    }

    #[test]
    fn test_query_from_location() {
        assert_eq!(
            query_from_location("https://search.tschall.dev/?q=%21g+cats"),
            Some("!g cats".to_string())
        );
        assert_eq!(query_from_location("https://search.tschall.dev/?q="), None);
        assert_eq!(query_from_location("https://search.tschall.dev/"), None);
        assert_eq!(query_from_location("not a url"), None);
    }

    #[test]
    fn test_location_with_query() {
        assert_eq!(
            location_with_query("https://search.tschall.dev/?q=old&x=1#top", "#mw bones").unwrap(),
            "https://search.tschall.dev/?q=%23mw+bones"
        );
        assert_eq!(
            location_with_query("https://search.tschall.dev/?q=old", "").unwrap(),
            "https://search.tschall.dev/"
        );
    }
}
