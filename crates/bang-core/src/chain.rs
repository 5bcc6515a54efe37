//! Provider Chain
//!
//! Ordered, read-only provider list plus one default provider. The first
//! provider whose `matches` accepts a query wins, regardless of later ones.

use std::collections::HashSet;

use crate::catalogue::{builtin_default, builtin_providers};
use crate::provider::{ProviderError, SearchProvider};

/// Error type for chain construction.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Bang '{bang}' is claimed by more than one provider ('{first}' and '{second}')")]
    DuplicateBang {
        bang: String,
        first: String,
        second: String,
    },
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub struct ProviderChain {
    providers: Vec<Box<dyn SearchProvider>>,
    default: Box<dyn SearchProvider>,
}

impl ProviderChain {
    /// Create a chain, rejecting bang tokens claimed twice (case-insensitive).
    pub fn new(
        providers: Vec<Box<dyn SearchProvider>>,
        default: Box<dyn SearchProvider>,
    ) -> Result<Self, ChainError> {
        let mut seen: HashSet<String> = HashSet::new();
        let all = providers.iter().chain(std::iter::once(&default));
        for provider in all {
            let bang = provider.bang().to_lowercase();
            if !seen.insert(bang.clone()) {
                let first = providers
                    .iter()
                    .find(|p| p.bang().to_lowercase() == bang)
                    .map(|p| p.name().to_string())
                    .unwrap_or_default();
                return Err(ChainError::DuplicateBang {
                    bang: provider.bang().to_string(),
                    first,
                    second: provider.name().to_string(),
                });
            }
        }

        Ok(Self { providers, default })
    }

    /// The built-in chain with DuckDuckGo as default.
    pub fn builtin() -> Result<Self, ChainError> {
        Self::new(builtin_providers()?, builtin_default()?)
    }

    /// First provider matching `query`, in chain order.
    pub fn find(&self, query: &str) -> Option<&dyn SearchProvider> {
        for provider in &self.providers {
            if provider.matches(query) {
                return Some(provider.as_ref());
            }
            log::trace!("provider {} did not match", provider.name());
        }
        None
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn SearchProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn default_provider(&self) -> &dyn SearchProvider {
        self.default.as_ref()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
