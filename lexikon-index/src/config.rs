//! Rebuild configuration

use serde::{Deserialize, Serialize};

/// Configuration for one index rebuild
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildConfig {
    /// Language codes to build dedicated analysis routing for.
    ///
    /// Empty means every supported language. Codes without dedicated
    /// analysis support are ignored; annotations in such languages still
    /// land in the index under the generic default strategy.
    /// Default: empty (all supported)
    pub languages: Vec<String>,

    /// Whether to materialize transitive collection membership.
    ///
    /// When enabled, each record carries one transitive-membership value per
    /// collection reachable through nested collection links, alongside the
    /// direct-membership values. Default: true
    pub transitive_collections: bool,

    /// Whether to emit progress logging during the rebuild.
    ///
    /// Controls progress reporting only; the built index is identical either
    /// way. Default: true
    pub verbose: bool,
}

impl Default for RebuildConfig {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            transitive_collections: true,
            verbose: true,
        }
    }
}

impl RebuildConfig {
    /// Builder method to set the requested languages
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to toggle transitive collection indexing
    pub fn with_transitive_collections(mut self, enabled: bool) -> Self {
        self.transitive_collections = enabled;
        self
    }

    /// Builder method to toggle progress logging
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
