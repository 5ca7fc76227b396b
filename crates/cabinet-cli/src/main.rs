mod app;
mod export;
mod settings;
mod view;

use anyhow::Result;
use app::App;
use cabinet_config::Config;
use cabinet_content::{load_store, validate_content_dir};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    process,
};

const USAGE: &str = "[content-dir] | html <slug> [content-dir]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("cabinet-cli", String::as_str);

    match args.get(1).map(String::as_str) {
        Some("html") => {
            let Some(slug) = args.get(2) else {
                eprintln!("Usage: {program} {USAGE}");
                process::exit(1);
            };
            if args.len() > 4 {
                eprintln!("Usage: {program} {USAGE}");
                process::exit(1);
            }
            let config = resolve_config(program, args.get(3).map(String::as_str));
            print_html(&config, slug)
        }
        _ if args.len() > 2 => {
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
        dir => {
            let config = resolve_config(program, dir);
            run_reader(config)
        }
    }
}

/// Content directory from the command line, falling back to the config file.
///
/// The first run with an explicit directory writes a default config file.
fn resolve_config(program: &str, arg: Option<&str>) -> Config {
    let config_path = Config::config_path();

    let stored = match Config::load() {
        Ok(stored) => stored,
        Err(e) if arg.is_some() => {
            log::warn!("ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    };
    let config_unreadable = stored.is_none() && config_path.exists();

    let Some(settings) = settings::resolve(arg, stored) else {
        eprintln!("Error: No content directory provided and no config file found");
        eprintln!("Usage: {program} {USAGE}");
        eprintln!("Or create a config file at {}", config_path.display());
        process::exit(1);
    };

    if let Err(e) = validate_content_dir(&settings.config.content_path) {
        let source = if settings.from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content directory '{}'{source} is invalid: {e}",
            settings.config.content_path.display()
        );
        process::exit(1);
    }

    if settings.first_run && !config_unreadable {
        match settings.config.save() {
            Ok(()) => log::info!("wrote default config to {}", config_path.display()),
            Err(e) => log::warn!("could not write config to {}: {e}", config_path.display()),
        }
    }

    settings.config
}

fn print_html(config: &Config, slug: &str) -> Result<()> {
    let store = load_store(&config.content_path)?;
    let Some(article) = store.find_by_slug(slug) else {
        eprintln!("Article not found: {slug}");
        process::exit(1);
    };

    print!("{}", export::article_html(article, &config.site));
    Ok(())
}

fn run_reader(config: Config) -> Result<()> {
    let store = load_store(&config.content_path)?;
    log::info!(
        "loaded {} articles from {}",
        store.len(),
        config.content_path.display()
    );
    let mut app = App::new(config.site.name, store);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_article(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
                KeyCode::Char('c') => app.cycle_category(),
                KeyCode::PageDown | KeyCode::Char('J') => app.scroll_down(),
                KeyCode::PageUp | KeyCode::Char('K') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .visible_articles()
        .map(|article| {
            ListItem::new(vec![
                Line::from(article.title.clone()),
                Line::styled(
                    format!("  {}", article.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.list_title()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, columns[0], &mut app.list_state);

    let content = Paragraph::new(app.content.clone())
        .block(Block::default().borders(Borders::ALL).title("Article"))
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));
    f.render_widget(content, columns[1]);

    let help = Paragraph::new(Line::from(
        "q: Quitter | ↑/k ↓/j: Article | c: Catégorie | PgUp/K PgDn/J: Défiler",
    ));
    f.render_widget(help, rows[1]);
}
