//! Shared helpers for unit tests.

use std::fs;

use tempfile::TempDir;
use time::Date;

use crate::models::{Article, SeoMeta};

/// Builds an article with just the fields the store cares about filled in.
pub fn article(slug: &str, date: Date, category: &str) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("Title of {slug}"),
        excerpt: format!("Excerpt of {slug}"),
        body: format!("## {slug}\n\nBody of **{slug}**.\n"),
        author: "Dr. Sophie Martin".to_string(),
        date,
        read_time: "5 min".to_string(),
        category: category.to_string(),
        tags: vec!["conseils".to_string()],
        image: format!("https://images.example/{slug}.jpg"),
        seo: SeoMeta {
            title: format!("{slug} | Dentiste Lyon 6"),
            description: format!("About {slug}"),
            keywords: vec![slug.to_string()],
        },
    }
}

/// Front matter + body for an article file on disk.
pub fn article_source(title: &str, date: &str, category: &str, body: &str) -> String {
    format!(
        r#"+++
title = "{title}"
excerpt = "Excerpt"
author = "Dr. Sophie Martin"
date = "{date}"
read_time = "4 min"
category = "{category}"
tags = ["conseils"]
image = "https://images.example/a.jpg"

[seo]
title = "{title} | Dentiste Lyon 6"
description = "Description"
+++
{body}"#
    )
}

pub fn create_test_content_dir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent dir");
    }
    fs::write(path, content).expect("failed to write test file");
}
