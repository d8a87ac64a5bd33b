//! Data model shared between the Conduit client and any future backend.
//!
//! Every type serializes with the camelCase JSON shape of the RealWorld
//! article API, so the mock store and a real HTTP client can exchange the same
//! values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod error;
mod list_config;

pub use error::ArticleError;
pub use list_config::{ArticleFilters, ArticleListConfig, ListType};

// 完整文章数据模型
/// A single article as returned by every article endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique lookup key, stable once assigned.
    pub slug: String,
    /// Headline.
    pub title: String,
    /// Short teaser shown in article lists.
    pub description: String,
    /// Markdown body.
    pub body: String,
    /// Tags in author order; duplicates are not rejected.
    pub tag_list: Vec<String>,
    /// Creation time, fixed once the article exists.
    pub created_at: DateTime<Utc>,
    /// Time of the last content change.
    pub updated_at: DateTime<Utc>,
    /// Whether the (single, implicit) viewer favorited this article.
    pub favorited: bool,
    /// Number of favorites.
    pub favorites_count: u32,
    /// Embedded author profile, duplicated per article.
    pub author: Profile,
}

/// Author profile embedded in an [`Article`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub username: String,
    /// Free-text biography.
    pub bio: Option<String>,
    /// Avatar URL.
    pub image: Option<String>,
    /// Whether the viewer follows this author.
    pub following: bool,
}

/// Result of a list query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleList {
    /// Matching articles in storage order.
    pub articles: Vec<Article>,
    /// Number of entries in `articles` (not the size of the whole store).
    pub articles_count: usize,
}

impl From<Vec<Article>> for ArticleList {
    fn from(articles: Vec<Article>) -> Self {
        ArticleList {
            articles_count: articles.len(),
            articles,
        }
    }
}

/// Partial article accepted by `create`. Nothing is validated; missing text
/// fields end up empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    /// Headline.
    pub title: Option<String>,
    /// Teaser.
    pub description: Option<String>,
    /// Markdown body.
    pub body: Option<String>,
    /// Tags, empty when absent.
    pub tag_list: Option<Vec<String>>,
    /// Ignored: new articles always get the placeholder author.
    pub author: Option<Profile>,
}

impl NewArticle {
    /// Start a draft with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Partial article accepted by `update`: `slug` selects the record, every
/// other `Some` field overwrites the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
    /// Key of the article to update.
    pub slug: String,
    /// New headline.
    pub title: Option<String>,
    /// New teaser.
    pub description: Option<String>,
    /// New body.
    pub body: Option<String>,
    /// Replacement tag list.
    pub tag_list: Option<Vec<String>>,
    /// New favorite flag.
    pub favorited: Option<bool>,
    /// New favorite counter.
    pub favorites_count: Option<u32>,
    /// Replacement author profile.
    pub author: Option<Profile>,
}

impl ArticlePatch {
    /// Empty patch addressing `slug`.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Shallow-merge the provided fields into `article`.
    ///
    /// `slug`, `created_at` and `updated_at` are left alone; refreshing
    /// `updated_at` is the caller's job.
    pub fn apply_to(self, article: &mut Article) {
        if let Some(title) = self.title {
            article.title = title;
        }
        if let Some(description) = self.description {
            article.description = description;
        }
        if let Some(body) = self.body {
            article.body = body;
        }
        if let Some(tag_list) = self.tag_list {
            article.tag_list = tag_list;
        }
        if let Some(favorited) = self.favorited {
            article.favorited = favorited;
        }
        if let Some(favorites_count) = self.favorites_count {
            article.favorites_count = favorites_count;
        }
        if let Some(author) = self.author {
            article.author = author;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};

    use super::{Article, Profile};

    pub fn sample_article(slug: &str) -> Article {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap_or_default();
        Article {
            slug: slug.to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            body: "Body".to_string(),
            tag_list: vec!["rust".to_string()],
            created_at: at,
            updated_at: at,
            favorited: false,
            favorites_count: 3,
            author: Profile {
                username: "ada".to_string(),
                bio: None,
                image: None,
                following: false,
            },
        }
    }
}
