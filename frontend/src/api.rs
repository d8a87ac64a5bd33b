//! Article data access for the page layer.
//!
//! Pages talk to [`ArticlesApi`]; [`ArticleStore`] is the in-memory
//! implementation used until the article endpoints exist. Every operation
//! resolves immediately, and every failure travels through the returned
//! `Result`.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use conduit_shared::{ArticleError, ArticleListConfig};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::{
    config::StoreConfig,
    models::{self, Article, ArticleList, ArticlePatch, NewArticle},
};

/// Result of every article operation.
pub type ApiResult<T> = Result<T, ArticleError>;

/// Article operations available to pages.
#[async_trait]
pub trait ArticlesApi: Send + Sync {
    /// List articles matching `config.filters` in storage order.
    async fn query(&self, config: &ArticleListConfig) -> ApiResult<ArticleList>;

    /// Fetch one article by slug.
    async fn get(&self, slug: &str) -> ApiResult<Article>;

    /// Remove an article. Succeeds whether or not the slug exists.
    async fn delete(&self, slug: &str) -> ApiResult<()>;

    /// Create an article from a draft and return the stored record.
    async fn create(&self, article: NewArticle) -> ApiResult<Article>;

    /// Merge `patch` into the article named by `patch.slug`.
    async fn update(&self, patch: ArticlePatch) -> ApiResult<Article>;

    /// Mark an article as favorited and bump its counter (saturating).
    async fn favorite(&self, slug: &str) -> ApiResult<Article>;

    /// Clear the favorite flag and decrement the counter (never below zero).
    async fn unfavorite(&self, slug: &str) -> ApiResult<Article>;
}

/// Rows keyed by insertion sequence so iteration keeps storage order, plus a
/// slug index for direct lookup and removal.
#[derive(Debug, Default)]
struct ArticleTable {
    rows: BTreeMap<u64, Article>,
    by_slug: HashMap<String, u64>,
    next_seq: u64,
}

impl ArticleTable {
    fn new() -> Self {
        Self {
            next_seq: 1,
            ..Self::default()
        }
    }

    fn insert(&mut self, article: Article) {
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(stale) = self.by_slug.insert(article.slug.clone(), seq) {
            self.rows.remove(&stale);
        }
        self.rows.insert(seq, article);
    }

    /// First slug from the sequence that is not taken. Sequence numbers are
    /// never reused, so a deleted slug does not come back.
    fn fresh_slug(&self, config: &StoreConfig) -> String {
        let mut n = self.next_seq;
        loop {
            let slug = config.slug_for(n);
            if !self.by_slug.contains_key(&slug) {
                return slug;
            }
            n += 1;
        }
    }

    fn get(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).and_then(|seq| self.rows.get(seq))
    }

    fn get_mut(&mut self, slug: &str) -> Option<&mut Article> {
        let seq = self.by_slug.get(slug)?;
        self.rows.get_mut(seq)
    }

    fn remove(&mut self, slug: &str) -> Option<Article> {
        let seq = self.by_slug.remove(slug)?;
        self.rows.remove(&seq)
    }

    fn iter(&self) -> impl Iterator<Item = &Article> {
        self.rows.values()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}

/// In-memory [`ArticlesApi`] backed by process memory only.
#[derive(Debug)]
pub struct ArticleStore {
    config: StoreConfig,
    table: RwLock<ArticleTable>,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleStore {
    /// Seeded store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Store built from `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        let mut table = ArticleTable::new();
        if config.seed {
            for article in models::seed_articles(Utc::now()) {
                table.insert(article);
            }
        }
        debug!(articles = table.len(), "article store initialized");
        Self {
            config,
            table: RwLock::new(table),
        }
    }

    /// Number of stored articles.
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    /// True when the store holds no article.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored article in storage order.
    pub fn snapshot(&self) -> Vec<Article> {
        self.table.read().iter().cloned().collect()
    }

    fn not_found(op: &'static str, slug: &str) -> ArticleError {
        warn!(op, slug, "article not found");
        ArticleError::not_found(slug)
    }

    /// Apply `mutate` to the article named `slug` and return the result.
    fn modify(
        &self,
        op: &'static str,
        slug: &str,
        mutate: impl FnOnce(&mut Article),
    ) -> ApiResult<Article> {
        let mut table = self.table.write();
        let article = table
            .get_mut(slug)
            .ok_or_else(|| Self::not_found(op, slug))?;
        mutate(article);
        info!(op, slug, favorites = article.favorites_count, "article updated");
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticlesApi for ArticleStore {
    async fn query(&self, config: &ArticleListConfig) -> ApiResult<ArticleList> {
        let articles: Vec<Article> = self
            .table
            .read()
            .iter()
            .filter(|article| config.filters.matches(article))
            .cloned()
            .collect();
        debug!(filters = config.filters.len(), matched = articles.len(), "queried articles");
        Ok(ArticleList::from(articles))
    }

    async fn get(&self, slug: &str) -> ApiResult<Article> {
        let article = self
            .table
            .read()
            .get(slug)
            .cloned()
            .ok_or_else(|| Self::not_found("get", slug))?;
        debug!(slug, "fetched article");
        Ok(article)
    }

    async fn delete(&self, slug: &str) -> ApiResult<()> {
        match self.table.write().remove(slug) {
            Some(_) => info!(slug, "deleted article"),
            None => debug!(slug, "delete of absent article ignored"),
        }
        Ok(())
    }

    async fn create(&self, article: NewArticle) -> ApiResult<Article> {
        let mut table = self.table.write();
        let slug = table.fresh_slug(&self.config);
        let created = models::build_article(
            article,
            slug,
            self.config.placeholder_author.clone(),
            Utc::now(),
        );
        table.insert(created.clone());
        info!(slug = %created.slug, "created article");
        Ok(created)
    }

    async fn update(&self, patch: ArticlePatch) -> ApiResult<Article> {
        let slug = patch.slug.clone();
        self.modify("update", &slug, |article| {
            patch.apply_to(article);
            article.updated_at = Utc::now();
        })
    }

    async fn favorite(&self, slug: &str) -> ApiResult<Article> {
        self.modify("favorite", slug, |article| {
            article.favorited = true;
            article.favorites_count = article.favorites_count.saturating_add(1);
        })
    }

    async fn unfavorite(&self, slug: &str) -> ApiResult<Article> {
        self.modify("unfavorite", slug, |article| {
            article.favorited = false;
            article.favorites_count = article.favorites_count.saturating_sub(1);
        })
    }
}
