use crate::models::{Article, ArticleError};
use crate::store::{ArticleStore, StoreError};
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of article files inside the content directory.
pub const ARTICLE_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Invalid article {path}: {source}")]
    Article {
        path: RelativePathBuf,
        source: ArticleError,
    },
    #[error("Invalid article collection: {0}")]
    Store(#[from] StoreError),
}

/// List article files directly under the content directory, sorted by path
pub fn scan_articles(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(content_root).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() || path.extension().is_none_or(|ext| ext != ARTICLE_EXTENSION) {
            log::debug!("skipping non-article entry {}", path.display());
            continue;
        }

        match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => files.push(RelativePathBuf::from(name)),
            None => log::warn!("skipping article with non UTF-8 name: {}", path.display()),
        }
    }

    files.sort();
    Ok(files)
}

/// Read one article file; its slug is the file stem
pub fn read_article(relative_path: &RelativePath, content_root: &Path) -> Result<Article, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }

    let source = fs::read_to_string(&absolute_path).map_err(IoError::Io)?;
    let slug = relative_path.file_stem().unwrap_or_default();

    Article::from_source(slug, &source).map_err(|source| IoError::Article {
        path: relative_path.to_relative_path_buf(),
        source,
    })
}

/// Load every article under the content directory into a store
pub fn load_store(content_root: &Path) -> Result<ArticleStore, IoError> {
    let articles = scan_articles(content_root)?
        .iter()
        .map(|relative_path| read_article(relative_path, content_root))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "loaded {} articles from {}",
        articles.len(),
        content_root.display()
    );
    Ok(ArticleStore::new(articles)?)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
