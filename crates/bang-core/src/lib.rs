//! Bangroute Core Library
//!
//! This crate routes a free-text search query to one of several external
//! search services based on a "bang" token (`!g`, `!mw`, ...) found anywhere
//! in the query. It only builds destination URLs; it never performs I/O.
//!
//! # Architecture
//!
//! Providers are fixed at build time and assembled once into an ordered
//! [`ProviderChain`]. The [`SearchHandler`] scans the chain first-match-wins,
//! retries with a hashtag alias (`#g` behaves as `!g`), and falls back to the
//! chain's default provider, so every query resolves to a destination.
//!
//! # Modules
//!
//! - `bang`: whitespace tokenizer and bang token matching/removal
//! - `provider`: the provider contract and the concrete provider kinds
//! - `catalogue`: the built-in provider table
//! - `chain`: ordered provider chain with a default provider
//! - `handler`: dispatcher producing a [`MatchedSearch`]
//! - `redirect`: router links and search page location helpers
//! - `intercept`: recognising search engine result pages to redirect from
//! - `types`: shared output types

pub mod bang;
pub mod catalogue;
pub mod chain;
pub mod handler;
pub mod intercept;
pub mod provider;
pub mod redirect;
pub mod types;

// Re-export commonly used types
pub use bang::{has_bang, remove_bang};
pub use chain::{ChainError, ProviderChain};
pub use handler::SearchHandler;
pub use provider::{ProviderError, QueryParamProvider, SearchProvider, TemplateProvider};
pub use redirect::{RedirectError, RouterConfig};
pub use types::{MatchedSearch, ProviderHelp};
