use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

use crate::parsing::BYTE_ORDER_MARK;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Delimiter line opening and closing the TOML front matter of an article file.
pub const FRONT_MATTER_DELIMITER: &str = "+++";

/// Reading speed used when an article does not state its reading time.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("article does not start with a `+++` front matter block")]
    MissingFrontMatter,
    #[error("front matter block is never closed with `+++`")]
    UnterminatedFrontMatter,
    #[error("invalid front matter: {0}")]
    InvalidFrontMatter(#[from] toml::de::Error),
}

/// Search-engine overrides carried by every article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Front matter of an article file: everything except the slug and the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMeta {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    #[serde(default)]
    pub read_time: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    pub seo: SeoMeta,
}

/// A blog article. The slug is the primary key inside an [`crate::ArticleStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw markdown-like body, fed to [`crate::parsing::segment`].
    pub body: String,
    pub author: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Display string such as `8 min`.
    pub read_time: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub seo: SeoMeta,
}

impl Article {
    /// Builds an article from its front matter and body.
    ///
    /// A missing reading time is estimated from the body.
    pub fn new(slug: impl Into<String>, meta: ArticleMeta, body: impl Into<String>) -> Self {
        let body = body.into();
        let read_time = meta
            .read_time
            .unwrap_or_else(|| estimate_read_time(&body));

        Self {
            slug: slug.into(),
            title: meta.title,
            excerpt: meta.excerpt,
            body,
            author: meta.author,
            date: meta.date,
            read_time,
            category: meta.category,
            tags: meta.tags,
            image: meta.image,
            seo: meta.seo,
        }
    }

    /// Parses an article file: a `+++` TOML front matter block followed by the body.
    pub fn from_source(slug: impl Into<String>, source: &str) -> Result<Self, ArticleError> {
        let (front, body) = split_front_matter(source)?;
        let meta: ArticleMeta = toml::from_str(front)?;
        Ok(Self::new(slug, meta, body))
    }
}

fn split_front_matter(source: &str) -> Result<(&str, &str), ArticleError> {
    let rest = source
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(source)
        .trim_start()
        .strip_prefix(FRONT_MATTER_DELIMITER)
        .and_then(strip_line_break)
        .ok_or(ArticleError::MissingFrontMatter)?;

    // Empty front matter: closing delimiter on the very next line
    if let Some(body) = rest.strip_prefix(FRONT_MATTER_DELIMITER) {
        return Ok(("", strip_line_break(body).unwrap_or(body)));
    }

    let closing = format!("\n{FRONT_MATTER_DELIMITER}");
    let end = rest
        .find(&closing)
        .ok_or(ArticleError::UnterminatedFrontMatter)?;
    let body = &rest[end + closing.len()..];
    Ok((
        rest[..end].trim_end_matches('\r'),
        strip_line_break(body).unwrap_or(body),
    ))
}

fn strip_line_break(s: &str) -> Option<&str> {
    s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n'))
}

fn estimate_read_time(body: &str) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min")
}

/// Returns true if `slug` can be used verbatim in a URL path segment.
///
/// Accepted: lowercase ASCII letters and digits, separated by single dashes.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
