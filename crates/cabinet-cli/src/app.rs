use cabinet_content::{Article, ArticleStore, render_body};
use ratatui::{text::Line, widgets::ListState};

use crate::view::article_lines;

/// Related suggestions shown under an article.
pub const RELATED_LIMIT: usize = 2;

pub struct App {
    site_name: String,
    store: ArticleStore,
    categories: Vec<String>,
    /// Index into `categories`; `None` shows every article.
    category: Option<usize>,
    visible: Vec<usize>,
    pub list_state: ListState,
    pub content: Vec<Line<'static>>,
    pub scroll: u16,
}

impl App {
    pub fn new(site_name: impl Into<String>, store: ArticleStore) -> Self {
        let categories = store.categories().into_iter().map(String::from).collect();
        let mut app = Self {
            site_name: site_name.into(),
            store,
            categories,
            category: None,
            visible: Vec::new(),
            list_state: ListState::default(),
            content: Vec::new(),
            scroll: 0,
        };
        app.apply_filter();
        app
    }

    pub fn visible_articles(&self) -> impl Iterator<Item = &Article> {
        let all = self.store.list_all();
        self.visible.iter().map(move |&i| &all[i])
    }

    pub fn category_label(&self) -> &str {
        self.category
            .and_then(|i| self.categories.get(i))
            .map_or("Tous les articles", String::as_str)
    }

    /// Title of the article list pane.
    pub fn list_title(&self) -> String {
        format!("{} · {}", self.site_name, self.category_label())
    }

    pub fn selected_article(&self) -> Option<&Article> {
        let index = *self.visible.get(self.list_state.selected()?)?;
        self.store.list_all().get(index)
    }

    pub fn next_article(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.visible.len(),
            None => 0,
        };
        self.select(i);
    }

    pub fn previous_article(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.select(i);
    }

    /// Steps through each category, then back to the full listing.
    pub fn cycle_category(&mut self) {
        self.category = match self.category {
            None if !self.categories.is_empty() => Some(0),
            Some(i) if i + 1 < self.categories.len() => Some(i + 1),
            _ => None,
        };
        self.apply_filter();
    }

    pub fn scroll_down(&mut self) {
        let max = u16::try_from(self.content.len()).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn apply_filter(&mut self) {
        let category = self.category.and_then(|i| self.categories.get(i));
        self.visible = self
            .store
            .list_all()
            .iter()
            .enumerate()
            .filter(|(_, article)| category.is_none_or(|c| &article.category == c))
            .map(|(i, _)| i)
            .collect();
        log::debug!(
            "filter {:?}: {} articles",
            self.category_label(),
            self.visible.len()
        );

        if self.visible.is_empty() {
            self.list_state.select(None);
            self.refresh_content();
        } else {
            self.select(0);
        }
    }

    fn select(&mut self, i: usize) {
        self.list_state.select(Some(i));
        self.scroll = 0;
        self.refresh_content();
    }

    fn refresh_content(&mut self) {
        self.content = match self.selected_article() {
            Some(article) => {
                let nodes = render_body(&article.body);
                let related = self.store.related(&article.slug, RELATED_LIMIT);
                article_lines(article, &nodes, &related)
            }
            None => vec![Line::from("Aucun article")],
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(slug: &str, date: &str, category: &str) -> Article {
        let source = format!(
            "+++\ntitle = \"{slug}\"\nexcerpt = \"\"\nauthor = \"Dr. Test\"\ndate = \"{date}\"\n\
             category = \"{category}\"\nimage = \"\"\n[seo]\ntitle = \"\"\ndescription = \"\"\n+++\n\
             ## Titre\n\nCorps **important**\n"
        );
        Article::from_source(slug, &source).unwrap()
    }

    fn app() -> App {
        App::new(
            "Cabinet du Dr. Martin",
            ArticleStore::new(vec![
                article("a", "2024-12-01", "Hygiène"),
                article("b", "2024-11-15", "Urgences"),
                article("c", "2024-10-20", "Hygiène"),
            ])
            .unwrap(),
        )
    }

    fn visible_slugs(app: &App) -> Vec<&str> {
        app.visible_articles().map(|a| a.slug.as_str()).collect()
    }

    #[test]
    fn starts_on_most_recent_article() {
        let app = app();
        assert_eq!(visible_slugs(&app), vec!["a", "b", "c"]);
        assert_eq!(app.selected_article().unwrap().slug, "a");
        assert_eq!(app.content[0].spans[0].content, "a");
    }

    #[test]
    fn navigation_wraps_around() {
        let mut app = app();
        app.previous_article();
        assert_eq!(app.selected_article().unwrap().slug, "c");
        app.next_article();
        assert_eq!(app.selected_article().unwrap().slug, "a");
    }

    #[test]
    fn category_filter_cycles_back_to_all() {
        let mut app = app();

        app.cycle_category();
        assert_eq!(app.category_label(), "Hygiène");
        assert_eq!(visible_slugs(&app), vec!["a", "c"]);

        app.cycle_category();
        assert_eq!(app.category_label(), "Urgences");
        assert_eq!(visible_slugs(&app), vec!["b"]);
        assert_eq!(app.selected_article().unwrap().slug, "b");

        app.cycle_category();
        assert_eq!(app.category_label(), "Tous les articles");
        assert_eq!(visible_slugs(&app).len(), 3);
    }

    #[test]
    fn list_title_names_site_and_filter() {
        let mut app = app();
        assert_eq!(app.list_title(), "Cabinet du Dr. Martin · Tous les articles");
        app.cycle_category();
        assert_eq!(app.list_title(), "Cabinet du Dr. Martin · Hygiène");
    }

    #[test]
    fn empty_store_has_no_selection() {
        let mut app = App::new("Cabinet", ArticleStore::default());
        app.next_article();
        app.cycle_category();

        assert!(app.selected_article().is_none());
        assert_eq!(app.content, vec![Line::from("Aucun article")]);
    }

    #[test]
    fn content_ends_with_related_articles() {
        let app = app();
        let tail: Vec<String> = app
            .content
            .iter()
            .rev()
            .take(3)
            .map(|line| line.to_string())
            .collect();
        assert_eq!(tail, vec!["• c", "• b", "Articles liés"]);
    }
}
