//! Configuration for the in-memory article store.

use conduit_shared::Profile;

use crate::models;

/// Prefix of synthesized slugs: `mock-article-1`, `mock-article-2`, ...
pub const DEFAULT_SLUG_PREFIX: &str = "mock-article-";

/// Knobs for [`crate::api::ArticleStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Insert the fixed seed article at construction.
    pub seed: bool,
    /// Prefix for slugs synthesized by `create`.
    pub slug_prefix: String,
    /// Author stamped onto every created article.
    pub placeholder_author: Profile,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            slug_prefix: DEFAULT_SLUG_PREFIX.to_string(),
            placeholder_author: models::placeholder_author(),
        }
    }
}

impl StoreConfig {
    /// Start with an empty store.
    pub fn without_seed(mut self) -> Self {
        self.seed = false;
        self
    }

    /// Use `prefix` for synthesized slugs.
    pub fn with_slug_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slug_prefix = prefix.into();
        self
    }

    /// Stamp `author` onto created articles.
    pub fn with_placeholder_author(mut self, author: Profile) -> Self {
        self.placeholder_author = author;
        self
    }

    /// Slug for the `n`-th article (1-based).
    pub(crate) fn slug_for(&self, n: u64) -> String {
        format!("{}{}", self.slug_prefix, n)
    }
}
