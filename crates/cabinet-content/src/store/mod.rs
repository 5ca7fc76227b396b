//! # Article Store
//!
//! Read-only queries over a fixed article collection.
//!
//! The collection is handed to [`ArticleStore::new`] once, validated, sorted by
//! publication date (most recent first, ties keep insertion order) and never
//! mutated afterwards. Every query borrows from the store, so any number of
//! readers can share it.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Article, is_url_safe_slug};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate article slug: {0}")]
    DuplicateSlug(String),
    #[error("article slug is not URL-safe: {0:?}")]
    InvalidSlug(String),
}

#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    /// Sorted by date descending.
    articles: Vec<Article>,
    by_slug: HashMap<String, usize>,
}

impl ArticleStore {
    /// Validates and indexes `articles`.
    ///
    /// Fails if a slug is not URL-safe or appears twice.
    pub fn new(articles: impl IntoIterator<Item = Article>) -> Result<Self, StoreError> {
        let mut articles: Vec<Article> = articles.into_iter().collect();

        for article in &articles {
            if !is_url_safe_slug(&article.slug) {
                return Err(StoreError::InvalidSlug(article.slug.clone()));
            }
        }

        // Stable sort: equal dates keep their insertion order
        articles.sort_by(|a, b| b.date.cmp(&a.date));

        let mut by_slug = HashMap::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            if by_slug.insert(article.slug.clone(), index).is_some() {
                return Err(StoreError::DuplicateSlug(article.slug.clone()));
            }
        }

        log::debug!("indexed {} articles", articles.len());
        Ok(Self { articles, by_slug })
    }

    /// All articles, most recent first.
    pub fn list_all(&self) -> &[Article] {
        &self.articles
    }

    /// Looks up an article by slug. An unknown slug is an ordinary miss.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).map(|&index| &self.articles[index])
    }

    /// Articles whose category equals `category`, most recent first.
    pub fn list_by_category(&self, category: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.category == category)
            .collect()
    }

    /// Every slug in listing order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.articles.iter().map(|article| article.slug.as_str())
    }

    /// Distinct category labels in order of first appearance in the listing.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for article in &self.articles {
            if !categories.contains(&article.category.as_str()) {
                categories.push(&article.category);
            }
        }
        categories
    }

    /// Up to `limit` other articles to suggest after reading `slug`.
    pub fn related(&self, slug: &str, limit: usize) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| article.slug != slug)
            .take(limit)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
