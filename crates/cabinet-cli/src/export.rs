use cabinet_config::SiteConfig;
use cabinet_content::{Article, render_body, to_html};

/// HTML body of `article`, preceded by a comment with its canonical address.
pub fn article_html(article: &Article, site: &SiteConfig) -> String {
    format!(
        "<!-- {} -->\n{}",
        site.article_url(&article.slug),
        to_html(&render_body(&article.body))
    )
}
