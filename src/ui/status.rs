//! Header, status bar and error display rendering
//!
//! The header summarises what has been loaded, the status bar lists the
//! keyboard shortcuts of the current mode and the error panel shows the
//! most recent failures.

use crate::{App, AppMode};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Renders the header with the catalog summary
pub(crate) fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let summary = &app.summary;
    let names = summary
        .names
        .iter()
        .map(|(name, count)| format!("{}({})", name, count))
        .collect::<Vec<_>>()
        .join(", ");
    let lowest = summary
        .lowest_option_id
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    let header_text = format!(
        "Catalog: {} | Pages: {} | Options: {} | Lowest ID: {} | Value chars: {} | First: {}",
        app.catalog.describe(),
        app.next_page,
        if names.is_empty() { "-" } else { names.as_str() },
        lowest,
        summary.value_chars,
        summary.first_value.as_deref().unwrap_or("-"),
    );

    let title = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

/// Renders the status bar with context-appropriate keyboard shortcuts
pub(crate) fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let shortcuts_text = match app.mode {
        AppMode::Browsing => {
            if app.active_filter.is_some() {
                "[↑↓] Nav  [PgUp/PgDn] Page  [Enter] Detail  [/] Edit filter  [Esc] Clear filter  [e] Errors  [q] Quit".to_string()
            } else {
                "[↑↓] Nav  [PgUp/PgDn] Page  [Home/End] Jump  [Enter] Detail  [/] Filter  [e] Errors  [q] Quit".to_string()
            }
        }
        AppMode::Filtering => format!("Filter by name: {}_  [Enter] Apply  [Esc] Cancel", app.filter_input),
        AppMode::Detail => "[Enter/Esc] Close  [q] Quit".to_string(),
    };

    let status_bar = Paragraph::new(shortcuts_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

    f.render_widget(status_bar, area);
}

/// Renders the error log panel
///
/// Displays the most recent errors (up to 20), newest first.
pub(crate) fn render_error_panel(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Errors ({}) - Press 'e' to hide", app.error_log.len());

    let errors: Vec<ListItem> = app
        .error_log
        .iter()
        .rev()
        .take(20)
        .map(|(timestamp, error)| {
            let time_str = timestamp.format("%H:%M:%S").to_string();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", time_str),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(error.as_str(), Style::default().fg(Color::Red)),
            ]))
        })
        .collect();

    let list = List::new(errors).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Red)),
    );

    f.render_widget(list, area);
}
