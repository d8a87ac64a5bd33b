//! Mock article data and the models re-exported from the shared crate.

// 重新导出shared crate的数据模型
use chrono::{DateTime, Utc};
pub use conduit_shared::{Article, ArticleList, ArticlePatch, NewArticle, Profile};

// =============== Mock 数据 ===============

/// Articles present in a freshly seeded store, stamped with `now`.
pub fn seed_articles(now: DateTime<Utc>) -> Vec<Article> {
    vec![Article {
        slug: "mock-article-1".to_string(),
        title: "Mock Article 1".to_string(),
        description: "This is the first mock article.".to_string(),
        body: "Content of the first mock article.".to_string(),
        tag_list: vec!["mock".to_string(), "test".to_string()],
        created_at: now,
        updated_at: now,
        favorited: false,
        favorites_count: 10,
        author: Profile {
            username: "mockauthor1".to_string(),
            bio: Some("Author 1 bio".to_string()),
            image: Some("https://example.com/avatar1.jpg".to_string()),
            following: false,
        },
    }]
}

/// Author given to every article created through the mock store.
pub fn placeholder_author() -> Profile {
    Profile {
        username: "mockauthor".to_string(),
        bio: Some("Mock bio".to_string()),
        image: Some("https://via.placeholder.com/150".to_string()),
        following: false,
    }
}

/// Materialize a draft. Missing text becomes empty and the draft's author is
/// dropped in favor of `author`.
pub(crate) fn build_article(
    draft: NewArticle,
    slug: String,
    author: Profile,
    now: DateTime<Utc>,
) -> Article {
    Article {
        slug,
        title: draft.title.unwrap_or_default(),
        description: draft.description.unwrap_or_default(),
        body: draft.body.unwrap_or_default(),
        tag_list: draft.tag_list.unwrap_or_default(),
        created_at: now,
        updated_at: now,
        favorited: false,
        favorites_count: 0,
        author,
    }
}
