//! Search Handler
//!
//! Resolves a raw query to a destination:
//!
//! 1. First chain provider matching the query.
//! 2. Otherwise, if the query contains `#`, the first `#` is rewritten to `!`
//!    and the chain is scanned again (`#g` behaves as `!g`).
//! 3. Otherwise the default provider, given the rewritten query if a rewrite
//!    happened.
//!
//! Every input resolves, including the empty string.

use crate::chain::{ChainError, ProviderChain};
use crate::types::{MatchedSearch, ProviderHelp};

pub struct SearchHandler {
    chain: ProviderChain,
}

impl SearchHandler {
    pub fn new(chain: ProviderChain) -> Self {
        Self { chain }
    }

    /// Handler over the built-in provider chain.
    pub fn builtin() -> Result<Self, ChainError> {
        Ok(Self::new(ProviderChain::builtin()?))
    }

    pub fn chain(&self) -> &ProviderChain {
        &self.chain
    }

    /// Route `query` to a destination URL.
    pub fn search(&self, query: &str) -> MatchedSearch {
        if let Some(provider) = self.chain.find(query) {
            log::debug!("query {:?} matched {}", query, provider.name());
            return MatchedSearch::from_provider(provider, query);
        }

        let alternate = hash_alias(query);
        if let Some(alternate) = alternate.as_deref() {
            if let Some(provider) = self.chain.find(alternate) {
                log::debug!("query {:?} matched {} via hash alias", query, provider.name());
                return MatchedSearch::from_provider(provider, alternate);
            }
        }

        let default = self.chain.default_provider();
        log::debug!("query {:?} fell back to {}", query, default.name());
        MatchedSearch::from_provider(default, alternate.as_deref().unwrap_or(query))
    }

    /// Help listing in chain order. The default provider is not included.
    pub fn providers_help(&self) -> Vec<ProviderHelp> {
        self.chain.providers().map(ProviderHelp::from_provider).collect()
    }
}

/// Replace the first `#` with `!`, if there is one.
fn hash_alias(query: &str) -> Option<String> {
    if query.contains('#') {
        Some(query.replacen('#', "!", 1))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{QueryParamProvider, SearchProvider, TemplateProvider};

    fn handler() -> SearchHandler {
        SearchHandler::builtin().unwrap()
    }

    #[test]
    fn test_google_bang() {
        let result = handler().search("!g cats");
        assert_eq!(result.provider_name, "Google");
        assert_eq!(result.provider_description, "Searches Google for the given query");
        assert_eq!(result.url, "https://www.google.com/search?udm=14&q=cats");
    }

    #[test]
    fn test_bang_anywhere_in_query() {
        let result = handler().search("hello !g whats up");
        assert_eq!(result.provider_name, "Google");
        assert_eq!(result.url, "https://www.google.com/search?udm=14&q=hello+whats+up");
    }

    #[test]
    fn test_hash_alias_resolves_like_bang() {
        let h = handler();
        assert_eq!(h.search("#g cats"), h.search("!g cats"));
    }

    #[test]
    fn test_hash_alias_only_first_hash() {
        let result = handler().search("#mw #tw");
        assert_eq!(result.provider_name, "Melvor Idle Wiki");
        assert_eq!(result.url, "https://wiki.melvoridle.com/index.php?search=%23tw");
    }

    #[test]
    fn test_hash_alias_reaches_default() {
        let result = handler().search("#d rust");
        assert_eq!(result.provider_name, "DuckDuckGo");
        assert_eq!(result.url, "https://www.duckduckgo.com/?q=rust");
    }

    #[test]
    fn test_hash_rewrite_forwarded_to_default() {
        let result = handler().search("C# tips");
        assert_eq!(result.provider_name, "DuckDuckGo");
        assert_eq!(result.url, "https://www.duckduckgo.com/?q=C%21%20tips");
    }

    #[test]
    fn test_plain_text_uses_default() {
        let result = handler().search("just text");
        assert_eq!(result.provider_name, "DuckDuckGo");
        assert_eq!(result.url, "https://www.duckduckgo.com/?q=just%20text");
    }

    #[test]
    fn test_empty_and_whitespace_queries_resolve() {
        let h = handler();
        assert_eq!(h.search("").url, "https://www.duckduckgo.com/?q=");
        assert_eq!(h.search("   ").url, "https://www.duckduckgo.com/?q=%20%20%20");
    }

    #[test]
    fn test_earlier_provider_wins() {
        let result = handler().search("!gi !g cats");
        assert_eq!(result.provider_name, "Google");
        assert_eq!(result.url, "https://www.google.com/search?udm=14&q=%21gi+cats");
    }

    #[test]
    fn test_no_prefix_match() {
        let result = handler().search("!gix cats");
        assert_eq!(result.provider_name, "DuckDuckGo");
    }

    #[test]
    fn test_matched_bang_never_forwarded() {
        let h = handler();
        let queries = ["!g a", "a !GR b", "!gi", "x y !gg", "!mw a b", "!tw", "!dhl 123", "q !mc", "!arc z"];
        for query in queries {
            let provider = h.chain().find(query).unwrap();
            let remainder = crate::bang::remove_bang(query, provider.bang());
            assert!(!crate::bang::has_bang(&remainder, provider.bang()), "{query}");
        }
    }

    #[test]
    fn test_search_is_idempotent() {
        let h = handler();
        assert_eq!(h.search("#gg party parrot"), h.search("#gg party parrot"));
    }

    #[test]
    fn test_providers_help_in_chain_order() {
        let help = handler().providers_help();
        let keys: Vec<&str> = help.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["!g", "!gr", "!gi", "!gg", "!mw", "!tw", "!dhl", "!mc", "!arc"]);
        assert!(help.iter().all(|h| !h.key.contains("<default>")));
        assert_eq!(help[6].description, "Track DHL packages");
    }

    #[test]
    fn test_injected_chain() {
        let providers: Vec<Box<dyn SearchProvider>> = vec![Box::new(
            QueryParamProvider::new("Docs", "!docs", "https://docs.example/search", "q").unwrap(),
        )];
        let default = Box::new(TemplateProvider::new("Web", "!w", "https://web.example/?q=%s").unwrap());
        let handler = SearchHandler::new(ProviderChain::new(providers, default).unwrap());

        assert_eq!(handler.search("#docs trait objects").url, "https://docs.example/search?q=trait+objects");
        assert_eq!(handler.search("trait objects").provider_name, "Web");
        assert_eq!(handler.providers_help().len(), 1);
    }
}
