//! CatalogTUI - Terminal browser for product catalog option values
//!
//! Pages option values out of a catalog file into a scrolling list and
//! fetches the next page as the user scrolls toward the end.
//!
//! # Architecture
//!
//! The binary is a thin shell over the `catalogtui` library:
//! - `config` - Settings file and command-line overrides
//! - `stores` - Catalog sources
//! - `view` - Layout inflation, list view and endless scrolling
//! - `utils` - Argument guards and collection helpers
//! - `ui` - Screen rendering with ratatui

mod ui;

use anyhow::{Context, Result};
use catalogtui::config::Config;
use catalogtui::logging::init_logging;
use catalogtui::model::OptionValue;
use catalogtui::stores::JsonFileCatalog;
use catalogtui::traits::CatalogSource;
use catalogtui::utils::{
    check_not_blank, check_not_empty, check_not_null, filter, first_item_with, fold, min_item,
    reduce,
};
use catalogtui::view::{
    inflate, inflate_from, inflate_with, set_on_endless_listener, LayoutInflater,
    LinearLayoutManager, ListView, View,
};
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    collections::{BTreeMap, VecDeque},
    io,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};
use tokio::sync::mpsc;
use ui::{ui, EMPTY_CATALOG_LAYOUT, ERROR_PANEL_LAYOUT, MAIN_LAYOUT, OPTION_DETAIL_LAYOUT};

/// Rows moved by PageUp/PageDown
const PAGE_JUMP: isize = 10;

/// Number of errors kept for the error panel
const ERROR_LOG_LIMIT: usize = 100;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog JSON file to browse
    #[arg(short, long, env = "CATALOG_FILE")]
    catalog: Option<PathBuf>,

    /// Option values fetched per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Rows from the end of the list that trigger the next page
    #[arg(short, long)]
    threshold: Option<usize>,

    /// YAML file with layout overrides
    #[arg(long)]
    layouts: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppMode {
    Browsing,
    Filtering,
    Detail,
}

/// Requests raised by view listeners and handled by the run loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppEvent {
    LoadMore,
}

/// Figures shown in the header, recomputed whenever a page arrives
#[derive(Debug, Default)]
struct CatalogSummary {
    /// Number of loaded values per option name
    names: BTreeMap<String, usize>,
    /// Total length of all loaded value strings
    value_chars: usize,
    lowest_option_id: Option<i64>,
    first_value: Option<String>,
}

impl CatalogSummary {
    fn from_values(values: &[OptionValue]) -> Self {
        let names = fold(BTreeMap::new(), values, |mut names, value| {
            *names
                .entry(value.name().unwrap_or("-").to_string())
                .or_insert(0) += 1;
            names
        });
        let value_chars = reduce(
            Some(values),
            |acc: usize, value: &OptionValue| acc + value.value().map_or(0, str::len),
            0,
        );
        let lowest_option_id = min_item(
            values.iter().filter_map(OptionValue::option_id).map(Some),
            None,
            |a, b| a.cmp(b),
        );
        let first_value = first_item_with(Some(values), OptionValue::to_string);

        Self {
            names,
            value_chars,
            lowest_option_id,
            first_value,
        }
    }
}

struct App {
    mode: AppMode,
    catalog: Arc<dyn CatalogSource>,
    page_size: usize,
    values: Vec<OptionValue>,
    /// Indices into `values` that pass the active filter
    visible: Vec<usize>,
    next_page: usize,
    has_more: bool,
    list: ListView,
    filter_input: String,
    active_filter: Option<String>,
    summary: CatalogSummary,
    error_log: VecDeque<(chrono::DateTime<Utc>, String)>,
    show_errors: bool,
    events: mpsc::UnboundedReceiver<AppEvent>,
    inflater: LayoutInflater,
    screen: View,
    empty_view: View,
    detail_view: View,
}

impl App {
    fn new(
        catalog: Arc<dyn CatalogSource>,
        inflater: LayoutInflater,
        page_size: usize,
        threshold: usize,
    ) -> Result<Self> {
        let screen = inflate_from(&inflater, MAIN_LAYOUT)?;
        let content = screen
            .find("content")
            .context("Layout 'main' has no 'content' slot")?;
        let empty_view = inflate(&inflater, content, EMPTY_CATALOG_LAYOUT)?;
        let detail_view = inflate_from(&inflater, OPTION_DETAIL_LAYOUT)?;

        let (tx, events) = mpsc::unbounded_channel();
        let mut list = ListView::new().with_layout_manager(LinearLayoutManager::new());
        set_on_endless_listener(&mut list, threshold, move || {
            // The receiver only goes away when the app shuts down.
            let _ = tx.send(AppEvent::LoadMore);
        });

        Ok(Self {
            mode: AppMode::Browsing,
            catalog,
            page_size,
            values: Vec::new(),
            visible: Vec::new(),
            next_page: 0,
            has_more: true,
            list,
            filter_input: String::new(),
            active_filter: None,
            summary: CatalogSummary::default(),
            error_log: VecDeque::new(),
            show_errors: false,
            events,
            inflater,
            screen,
            empty_view,
            detail_view,
        })
    }

    fn log_error(&mut self, error: String) {
        tracing::warn!(%error, "recorded error");
        if self.error_log.len() >= ERROR_LOG_LIMIT {
            self.error_log.pop_front();
        }
        self.error_log.push_back((Utc::now(), error));
    }

    /// Fetches the next catalog page and appends it to the list
    async fn load_next_page(&mut self) -> Result<()> {
        if !self.has_more {
            return Ok(());
        }

        let page = self
            .catalog
            .fetch_page(self.next_page, self.page_size)
            .await
            .with_context(|| format!("Failed to load page {}", self.next_page + 1))?;
        tracing::info!(
            page = page.page,
            count = page.values.len(),
            has_more = page.has_more,
            "loaded catalog page"
        );

        self.next_page += 1;
        self.has_more = page.has_more;
        self.values.extend(page.values);
        self.summary = CatalogSummary::from_values(&self.values);
        self.refresh_visible();
        Ok(())
    }

    /// Handles pending endless-scroll requests
    ///
    /// Several requests may queue up between frames; they collapse into a
    /// single page load.
    async fn process_load_requests(&mut self) {
        let mut requested = false;
        while let Ok(AppEvent::LoadMore) = self.events.try_recv() {
            requested = true;
        }
        if requested && self.has_more {
            if let Err(e) = self.load_next_page().await {
                self.log_error(format!("{:#}", e));
            }
        }
    }

    fn refresh_visible(&mut self) {
        let indices = 0..self.values.len();
        self.visible = match &self.active_filter {
            Some(query) => {
                let query = query.to_lowercase();
                let values = &self.values;
                filter(indices, |i| {
                    values[*i]
                        .name()
                        .is_some_and(|name| name.to_lowercase().contains(&query))
                })
            }
            None => indices.collect(),
        };
        self.list.set_item_count(self.visible.len());
    }

    fn apply_filter(&mut self, query: Option<String>) {
        self.active_filter = query;
        self.refresh_visible();
        self.list.select((!self.visible.is_empty()).then_some(0));
    }

    fn selected_value(&self) -> Option<&OptionValue> {
        self.list
            .selected()
            .and_then(|row| self.visible.get(row))
            .map(|&index| &self.values[index])
    }

    /// Attaches or detaches the error panel beside the option list
    fn toggle_errors(&mut self) -> Result<()> {
        let body = self
            .screen
            .find_mut("body")
            .context("Layout 'main' has no 'body' container")?;
        if self.show_errors {
            body.remove_child("errors");
        } else {
            inflate_with(&self.inflater, ERROR_PANEL_LAYOUT, Some(body), true)?;
        }
        self.show_errors = !self.show_errors;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let mut config = Config::load_from(&config_path)?;
    let _log_guard = init_logging(&Config::log_dir()?, &config.log_level)?;

    let catalog_path = check_not_null(
        args.catalog.clone().or_else(|| config.catalog_path.clone()),
        "No catalog file given. Use --catalog, CATALOG_FILE or catalog_path in config.yaml",
    )?;
    let page_size = args.page_size.unwrap_or(config.page_size);
    let threshold = args.threshold.unwrap_or(config.endless_threshold);
    tracing::info!(catalog = ?catalog_path, page_size, threshold, "starting catalogtui");

    let mut inflater = LayoutInflater::builtin()?;
    if let Some(layouts) = args.layouts.as_ref().or(config.layouts_path.as_ref()) {
        inflater.merge_file(layouts)?;
    }

    let catalog: Arc<dyn CatalogSource> = Arc::new(JsonFileCatalog::new(&catalog_path));
    let mut app = App::new(catalog, inflater, page_size, threshold)?;

    match app.load_next_page().await {
        Ok(()) => {
            let empty = check_not_empty(Some(&app.values[..]), "Catalog holds no option values")
                .err();
            if let Some(e) = empty {
                app.log_error(e.to_string());
            }
        }
        Err(e) => app.log_error(format!("{:#}", e)),
    }

    config.add_recent_catalog(catalog_path);
    if let Err(e) = config.save_to(&config_path) {
        tracing::warn!(error = %e, "failed to save config");
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Handles key events while browsing the list
fn handle_browsing_input(app: &mut App, key_code: KeyCode) -> Result<bool> {
    match key_code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Down => app.list.scroll_by(1),
        KeyCode::Up => app.list.scroll_by(-1),
        KeyCode::PageDown => app.list.scroll_by(PAGE_JUMP),
        KeyCode::PageUp => app.list.scroll_by(-PAGE_JUMP),
        KeyCode::End => app.list.scroll_to_edge(true),
        KeyCode::Home => app.list.scroll_to_edge(false),
        KeyCode::Enter => {
            if app.selected_value().is_some() {
                app.mode = AppMode::Detail;
            }
        }
        KeyCode::Char('/') => {
            app.filter_input = app.active_filter.clone().unwrap_or_default();
            app.mode = AppMode::Filtering;
        }
        KeyCode::Esc if app.active_filter.is_some() => app.apply_filter(None),
        KeyCode::Char('e') => {
            if let Err(e) = app.toggle_errors() {
                app.log_error(format!("{:#}", e));
            }
        }
        _ => {}
    }
    Ok(false)
}

/// Handles key events while typing a name filter
fn handle_filter_input(app: &mut App, key_code: KeyCode) -> Result<bool> {
    match key_code {
        KeyCode::Char(c) => app.filter_input.push(c),
        KeyCode::Backspace => {
            app.filter_input.pop();
        }
        KeyCode::Enter => {
            // An empty query clears the filter.
            let query = check_not_blank(Some(app.filter_input.trim()), "filter query")
                .ok()
                .map(str::to_string);
            app.apply_filter(query);
            app.mode = AppMode::Browsing;
        }
        KeyCode::Esc => app.mode = AppMode::Browsing,
        _ => {}
    }
    Ok(false)
}

/// Handles key events while the detail popup is open
fn handle_detail_input(app: &mut App, key_code: KeyCode) -> Result<bool> {
    match key_code {
        KeyCode::Enter | KeyCode::Esc => app.mode = AppMode::Browsing,
        KeyCode::Char('q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.clear()?;

    loop {
        app.process_load_requests().await;

        terminal.draw(|f| ui(f, app))?;

        if poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let should_quit = match app.mode {
                    AppMode::Browsing => handle_browsing_input(app, key.code)?,
                    AppMode::Filtering => handle_filter_input(app, key.code)?,
                    AppMode::Detail => handle_detail_input(app, key.code)?,
                };

                if should_quit {
                    return Ok(());
                }
            }
        }
    }
}
