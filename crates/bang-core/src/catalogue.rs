//! Built-in provider table
//!
//! Chain order is priority order. Bang tokens are unique across the chain
//! and the default provider.

use crate::provider::{ProviderError, QueryParamProvider, SearchProvider, TemplateProvider};

const GOOGLE_SEARCH: &str = "https://www.google.com/search?udm=14"; // udm=14: no AI results
const MELVOR_WIKI: &str = "https://wiki.melvoridle.com/index.php";
const TARKOV_WIKI: &str = "https://wiki.tarkov.dev/index.php";
const DHL_TRACKING: &str = "https://www.dhl.de/de/privatkunden/pakete-empfangen/verfolgen.html";
const MINECRAFT_WIKI: &str = "https://minecraft.wiki/w/Special:Search";
const ARC_RAIDERS_WIKI: &str = "https://arcraiders.wiki/w/index.php";
const DUCKDUCKGO: &str = "https://www.duckduckgo.com/?q=%s";

pub fn google() -> Result<QueryParamProvider, ProviderError> {
    QueryParamProvider::new("Google", "!g", GOOGLE_SEARCH, "q")
}

pub fn google_reddit() -> Result<QueryParamProvider, ProviderError> {
    Ok(QueryParamProvider::new("Google Reddit", "!gr", GOOGLE_SEARCH, "q")?.with_prefix("site:reddit.com "))
}

pub fn google_images() -> Result<QueryParamProvider, ProviderError> {
    Ok(QueryParamProvider::new("Google Images", "!gi", GOOGLE_SEARCH, "q")?
        .with_fixed_param("tbs", "imgo:1")
        .with_fixed_param("udm", "2"))
}

pub fn google_gifs() -> Result<QueryParamProvider, ProviderError> {
    Ok(QueryParamProvider::new("Google GIFs", "!gg", GOOGLE_SEARCH, "q")?
        .with_fixed_param("tbs", "itp:animated")
        .with_fixed_param("udm", "2"))
}

pub fn melvor_wiki() -> Result<QueryParamProvider, ProviderError> {
    QueryParamProvider::new("Melvor Idle Wiki", "!mw", MELVOR_WIKI, "search")
}

pub fn tarkov_wiki() -> Result<QueryParamProvider, ProviderError> {
    QueryParamProvider::new("Tarkov Wiki", "!tw", TARKOV_WIKI, "query")
}

/// The remaining text is a tracking number, not free text.
pub fn dhl() -> Result<QueryParamProvider, ProviderError> {
    Ok(QueryParamProvider::new("DHL Tracking", "!dhl", DHL_TRACKING, "piececode")?
        .with_description("Track DHL packages"))
}

pub fn minecraft_wiki() -> Result<QueryParamProvider, ProviderError> {
    QueryParamProvider::new("Minecraft Wiki", "!mc", MINECRAFT_WIKI, "search")
}

pub fn arc_raiders_wiki() -> Result<QueryParamProvider, ProviderError> {
    QueryParamProvider::new("Arc Raiders Wiki", "!arc", ARC_RAIDERS_WIKI, "search")
}

/// General web search used when nothing in the chain matches.
pub fn duckduckgo() -> Result<TemplateProvider, ProviderError> {
    Ok(TemplateProvider::new("DuckDuckGo", "!d", DUCKDUCKGO)?.with_key("!d, <default>"))
}

/// The built-in chain, in priority order.
pub fn builtin_providers() -> Result<Vec<Box<dyn SearchProvider>>, ProviderError> {
    let providers: Vec<Box<dyn SearchProvider>> = vec![
        Box::new(google()?),
        Box::new(google_reddit()?),
        Box::new(google_images()?),
        Box::new(google_gifs()?),
        Box::new(melvor_wiki()?),
        Box::new(tarkov_wiki()?),
        Box::new(dhl()?),
        Box::new(minecraft_wiki()?),
        Box::new(arc_raiders_wiki()?),
    ];
    Ok(providers)
}

pub fn builtin_default() -> Result<Box<dyn SearchProvider>, ProviderError> {
    Ok(Box::new(duckduckgo()?))
}
