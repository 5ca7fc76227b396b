pub mod article;
pub mod date;

pub use article::{Article, ArticleError, ArticleMeta, SeoMeta, is_url_safe_slug};
pub use date::format_date_fr;
