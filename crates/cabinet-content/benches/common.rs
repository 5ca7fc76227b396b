// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use cabinet_content::Article;

/// Article body in the shape the blog uses, `sections` times over.
#[allow(dead_code)]
pub fn generate_article_body(sections: usize) -> String {
    let mut body = String::new();

    for section in 0..sections {
        body.push_str(&format!("## Section {section}\n\n"));
        body.push_str(
            "Le **brossage** est essentiel. Un paragraphe avec un texte **important** et réaliste.\n\n",
        );
        body.push_str("### Conseils\n\n");
        body.push_str("**À retenir** :\n");
        for i in 0..3 {
            body.push_str(&format!("- **Point {i}** : détail du conseil\n"));
        }
        body.push('\n');
        for i in 1..=4 {
            body.push_str(&format!("{i}. Étape **{i}** du protocole\n"));
        }
        body.push_str("\n---\n\n");
    }

    body.push_str("*Signature de l'auteur*\n");
    body
}

#[allow(dead_code)]
pub fn generate_articles(count: usize, categories: usize) -> Vec<Article> {
    (0..count)
        .map(|i| {
            let source = format!(
                "+++\ntitle = \"Article {i}\"\nexcerpt = \"\"\nauthor = \"Dr. Bench\"\n\
                 date = \"2024-{:02}-{:02}\"\ncategory = \"Catégorie {}\"\nimage = \"\"\n\
                 [seo]\ntitle = \"\"\ndescription = \"\"\n+++\n{}",
                i % 12 + 1,
                i % 28 + 1,
                i % categories.max(1),
                generate_article_body(2)
            );
            Article::from_source(format!("article-{i}"), &source).unwrap()
        })
        .collect()
}
