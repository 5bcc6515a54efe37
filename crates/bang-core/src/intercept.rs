//! Search engine interception
//!
//! Recognises result pages of engines whose searches get redirected to the
//! router, and pulls the submitted query out of their URL.

use url::Url;

use crate::redirect::RouterConfig;

/// A search engine whose submissions are redirected to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterceptSite {
    pub name: &'static str,
    /// Page URL patterns; `*` matches any run of characters.
    pub match_patterns: &'static [&'static str],
    /// Parameter holding the submitted query
    pub query_param: &'static str,
}

pub const GOOGLE: InterceptSite = InterceptSite {
    name: "Google",
    match_patterns: &["https://www.google.com/*", "https://google.com/*"],
    query_param: "q",
};

pub const DUCKDUCKGO: InterceptSite = InterceptSite {
    name: "DuckDuckGo",
    match_patterns: &["https://duckduckgo.com/*", "https://www.duckduckgo.com/*"],
    query_param: "q",
};

pub const SITES: &[InterceptSite] = &[GOOGLE, DUCKDUCKGO];

impl InterceptSite {
    pub fn matches(&self, page_url: &str) -> bool {
        self.match_patterns
            .iter()
            .any(|pattern| wildcard_match(pattern, page_url))
    }

    /// The submitted query, trimmed. `None` if absent or blank.
    pub fn search_query(&self, page_url: &str) -> Option<String> {
        let url = Url::parse(page_url).ok()?;
        let value = url
            .query_pairs()
            .find(|(key, _)| key == self.query_param)
            .map(|(_, value)| value.trim().to_string())?;
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// Unanchored wildcard match: each literal segment between `*`s must occur
/// in order somewhere in `text`.
pub fn wildcard_match(pattern: &str, text: &str) -> bool {
    let mut rest = text;
    for segment in pattern.split('*') {
        if segment.is_empty() {
            continue;
        }
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }
    true
}

/// First known site whose patterns match `page_url`.
pub fn detect_site(page_url: &str) -> Option<&'static InterceptSite> {
    SITES.iter().find(|site| site.matches(page_url))
}

/// Router link for a search made on a known engine page.
pub fn intercept(page_url: &str, router: &RouterConfig) -> Option<String> {
    let site = detect_site(page_url)?;
    let query = site.search_query(page_url)?;
    log::debug!("intercepted {} search {:?}", site.name, query);
    router.link(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_match() {
        assert!(wildcard_match("https://www.google.com/*", "https://www.google.com/search?q=x"));
        assert!(wildcard_match("https://www.google.com/*", "https://www.google.com/"));
        assert!(wildcard_match("a*c*e", "xxabcdexx"));
        assert!(!wildcard_match("a*c*e", "ecba"));
        assert!(!wildcard_match("https://google.com/*", "https://www.google.com/search"));
    }

    #[test]
    fn test_detect_site() {
        assert_eq!(detect_site("https://www.google.com/search?q=cats").map(|s| s.name), Some("Google"));
        assert_eq!(detect_site("https://google.com/search?q=cats").map(|s| s.name), Some("Google"));
        assert_eq!(detect_site("https://duckduckgo.com/?q=cats").map(|s| s.name), Some("DuckDuckGo"));
        assert_eq!(detect_site("https://www.bing.com/search?q=cats"), None);
    }

    #[test]
    fn test_search_query() {
        assert_eq!(
            GOOGLE.search_query("https://www.google.com/search?q=+%21mw+bones+&hl=en"),
            Some("!mw bones".to_string())
        );
        assert_eq!(GOOGLE.search_query("https://www.google.com/search?q=++"), None);
        assert_eq!(GOOGLE.search_query("https://www.google.com/"), None);
    }

    #[test]
    fn test_intercept() {
        let router = RouterConfig::default_router().unwrap();
        assert_eq!(
            intercept("https://duckduckgo.com/?q=%23tw+labs&ia=web", &router),
            Some("https://search.tschall.dev/?q=%23tw%20labs".to_string())
        );
        assert_eq!(intercept("https://example.com/?q=cats", &router), None);
        assert_eq!(intercept("https://www.google.com/imghp", &router), None);
    }
}
