use thiserror::Error;

/// Failure returned by article operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    /// No article carries the requested slug.
    #[error("Article with slug \"{slug}\" not found")]
    NotFound {
        /// The slug that was looked up.
        slug: String,
    },
}

impl ArticleError {
    /// Build a [`ArticleError::NotFound`] for `slug`.
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound {
            slug: slug.into(),
        }
    }
}
