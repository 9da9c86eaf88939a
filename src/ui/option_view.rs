//! Option value list and detail rendering
//!
//! Shows loaded option values one per row, a placeholder while nothing is
//! loaded or nothing matches the filter, and a popup with the selected
//! value's fields.

use crate::App;
use catalogtui::model::OptionValue;
use catalogtui::utils::map_items;
use catalogtui::view::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Paragraph},
    Frame,
};

fn option_row(value: &OptionValue) -> ListItem<'static> {
    let id = value
        .option_id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());

    ListItem::new(Line::from(vec![
        Span::styled(format!("[{}] ", id), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("{}: ", value.name().unwrap_or("-")),
            Style::default().fg(Color::Green),
        ),
        Span::raw(value.value().unwrap_or("-").to_string()),
    ]))
}

/// Renders the option value list
///
/// The title shows how many values are listed and whether the catalog has
/// more pages to fetch.
pub(crate) fn render_option_list(f: &mut Frame, app: &mut App, area: Rect) {
    if app.visible.is_empty() {
        render_empty(f, app, area);
        return;
    }

    let values = &app.values;
    let items = map_items(&app.visible, |&index| option_row(&values[index]));

    let progress = if app.has_more {
        "scroll for more"
    } else {
        "end of catalog"
    };
    let title = match &app.active_filter {
        Some(query) => format!(
            "Option Values matching \"{}\" ({} of {} loaded, {})",
            query,
            app.visible.len(),
            app.values.len(),
            progress
        ),
        None => format!("Option Values ({} loaded, {})", app.values.len(), progress),
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    app.list.render(f, area, items, block);
}

fn render_empty(f: &mut Frame, app: &App, area: Rect) {
    let hint = match (&app.active_filter, app.has_more) {
        (Some(query), _) => format!(
            "No loaded option names contain \"{}\". [Esc] clears.",
            query
        ),
        (None, true) => "Waiting for the first page...".to_string(),
        (None, false) => "The catalog is empty.".to_string(),
    };

    app.empty_view.render(f, area, &mut |slot, f, area| {
        if slot == "empty_hint" {
            let paragraph =
                Paragraph::new(hint.as_str()).style(Style::default().fg(Color::DarkGray));
            f.render_widget(paragraph, area);
        }
    });
}

/// Renders the popup describing the selected option value
pub(crate) fn render_option_detail(f: &mut Frame, app: &App) {
    let Some(value) = app.selected_value() else {
        return;
    };

    let area = centered_rect(60, 40, f.area());
    f.render_widget(Clear, area);

    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Option ID: ", label),
            Span::raw(
                value
                    .option_id()
                    .map_or_else(|| "-".to_string(), |id| id.to_string()),
            ),
        ]),
        Line::from(vec![
            Span::styled("Name:      ", label),
            Span::raw(value.name().unwrap_or("-").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Value:     ", label),
            Span::raw(value.value().unwrap_or("-").to_string()),
        ]),
    ];

    app.detail_view.render(f, area, &mut |slot, f, area| {
        if slot == "detail_body" {
            f.render_widget(Paragraph::new(lines.clone()), area);
        }
    });
}
