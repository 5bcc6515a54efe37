//! Output types shared with the browser glue
//!
//! Field names serialize in camelCase (`providerName`, ...) to match what the
//! search page and userscripts read. TypeScript declarations are generated
//! with `ts-rs`.

use serde::Serialize;
use ts_rs::TS;

use crate::provider::SearchProvider;

// =============================================================================
// Matched Search
// =============================================================================

/// Result of routing one query: where to go and who handled it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MatchedSearch {
    /// Absolute destination URL
    pub url: String,
    /// Display name of the provider that built the URL
    pub provider_name: String,
    /// Human-readable provider description
    pub provider_description: String,
}

impl MatchedSearch {
    /// Build the result for `provider` applied to `query`.
    pub fn from_provider(provider: &dyn SearchProvider, query: &str) -> Self {
        Self {
            url: provider.target(query).trim().to_string(),
            provider_name: provider.name().to_string(),
            provider_description: provider.description().to_string(),
        }
    }
}

// =============================================================================
// Help Listing
// =============================================================================

/// One line of the provider help listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProviderHelp {
    /// Bang token(s) shown to the user
    pub key: String,
    pub description: String,
}

impl ProviderHelp {
    pub fn from_provider(provider: &dyn SearchProvider) -> Self {
        Self {
            key: provider.key().to_string(),
            description: provider.description().to_string(),
        }
    }
}
