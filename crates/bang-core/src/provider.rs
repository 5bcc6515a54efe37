//! Search providers
//!
//! A provider pairs a bang token with a rule for building the destination
//! URL. Both `matches` and `target` key off the same [`SearchProvider::bang`]
//! so the token a provider recognises is always the token it strips before
//! forwarding the rest of the query.

use url::Url;

use crate::bang::{has_bang, remove_bang};

/// Error type for provider construction.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Provider '{0}' has an empty bang token")]
    EmptyBang(String),
    #[error("URL template for provider '{0}' has no %s placeholder")]
    MissingPlaceholder(String),
}

// =============================================================================
// Provider Contract
// =============================================================================

/// A destination service selected by a bang token.
pub trait SearchProvider: Send + Sync {
    /// Display name.
    fn name(&self) -> &str;

    /// Bang token(s) shown in help listings. Not used for matching.
    fn key(&self) -> &str;

    fn description(&self) -> &str;

    /// The token this provider recognises and strips.
    fn bang(&self) -> &str;

    /// Does the query carry this provider's bang?
    fn matches(&self, query: &str) -> bool {
        has_bang(query, self.bang())
    }

    /// Build the destination URL for `query`, with the bang removed.
    fn target(&self, query: &str) -> String;
}

fn default_description(name: &str) -> String {
    format!("Searches {} for the given query", name)
}

fn parse_base(url: &str) -> Result<Url, ProviderError> {
    Url::parse(url).map_err(|source| ProviderError::InvalidBaseUrl {
        url: url.to_string(),
        source,
    })
}

// =============================================================================
// Query Parameter Handling
// =============================================================================

/// Set `key` to `value` in the URL query.
///
/// The first existing pair is updated in place and later duplicates are
/// dropped; otherwise the pair is appended. Values are form-urlencoded.
pub fn set_query_param(url: &mut Url, key: &str, value: &str) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    let mut replaced = false;
    pairs.retain_mut(|(k, v)| {
        if k.as_str() != key {
            return true;
        }
        if replaced {
            return false;
        }
        *v = value.to_string();
        replaced = true;
        true
    });
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(&pairs);
}

// =============================================================================
// Query Parameter Provider
// =============================================================================

/// Provider that places the query text into a named query parameter of a
/// base URL, optionally behind a fixed prefix and followed by fixed extra
/// parameters.
#[derive(Debug, Clone)]
pub struct QueryParamProvider {
    name: String,
    key: String,
    description: String,
    bang: String,
    base: Url,
    param: String,
    prefix: String,
    fixed_params: Vec<(String, String)>,
}

impl QueryParamProvider {
    /// Create a provider searching `base_url` through `param`.
    pub fn new(name: &str, bang: &str, base_url: &str, param: &str) -> Result<Self, ProviderError> {
        if bang.is_empty() {
            return Err(ProviderError::EmptyBang(name.to_string()));
        }
        let base = parse_base(base_url)?;

        Ok(Self {
            name: name.to_string(),
            key: bang.to_string(),
            description: default_description(name),
            bang: bang.to_string(),
            base,
            param: param.to_string(),
            prefix: String::new(),
            fixed_params: Vec::new(),
        })
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Literal text placed in front of the query, e.g. a `site:` filter.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Extra parameter set on every build, after the query parameter.
    pub fn with_fixed_param(mut self, key: &str, value: &str) -> Self {
        self.fixed_params.push((key.to_string(), value.to_string()));
        self
    }
}

impl SearchProvider for QueryParamProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn bang(&self) -> &str {
        &self.bang
    }

    fn target(&self, query: &str) -> String {
        let text = remove_bang(query, &self.bang);
        let value = if self.prefix.is_empty() {
            text
        } else {
            format!("{}{}", self.prefix, text)
        };

        let mut url = self.base.clone();
        set_query_param(&mut url, &self.param, &value);
        for (key, fixed) in &self.fixed_params {
            set_query_param(&mut url, key, fixed);
        }
        url.into()
    }
}

// =============================================================================
// Template Provider
// =============================================================================

/// Provider that substitutes the component-encoded query for the first `%s`
/// of a URL template.
#[derive(Debug, Clone)]
pub struct TemplateProvider {
    name: String,
    key: String,
    description: String,
    bang: String,
    template: String,
}

impl TemplateProvider {
    pub fn new(name: &str, bang: &str, template: &str) -> Result<Self, ProviderError> {
        if bang.is_empty() {
            return Err(ProviderError::EmptyBang(name.to_string()));
        }
        if !template.contains("%s") {
            return Err(ProviderError::MissingPlaceholder(name.to_string()));
        }
        parse_base(&template.replacen("%s", "", 1))?;

        Ok(Self {
            name: name.to_string(),
            key: bang.to_string(),
            description: default_description(name),
            bang: bang.to_string(),
            template: template.to_string(),
        })
    }

    /// Override the help key, e.g. to mark a default provider.
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }
}

impl SearchProvider for TemplateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn bang(&self) -> &str {
        &self.bang
    }

    fn target(&self, query: &str) -> String {
        let text = remove_bang(query, &self.bang);
        self.template.replacen("%s", &urlencoding::encode(&text), 1)
    }
}
