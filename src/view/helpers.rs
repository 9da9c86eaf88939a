//! UI helper functions
//!
//! View inflation shortcuts, endless-scroll wiring for list views and
//! popup geometry.

use super::layout::{InflateError, LayoutId, LayoutInflater, View};
use super::list::{ListView, OnScrollListener, ScrollState};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Callback fired when a list is scrolled close to its end
pub trait OnEndlessListener {
    fn on_endless(&mut self);
}

impl<F: FnMut()> OnEndlessListener for F {
    fn on_endless(&mut self) {
        self()
    }
}

/// Inflates a layout sized for `parent` without attaching it
///
/// # Errors
/// `InflateError::UnknownLayout` if the inflater has no such layout.
pub fn inflate(
    inflater: &LayoutInflater,
    parent: &View,
    layout: LayoutId,
) -> Result<View, InflateError> {
    let mut root = inflater.instantiate(layout)?;
    parent.generate_layout_params(&mut root);
    Ok(root)
}

/// Inflates a standalone layout
///
/// # Errors
/// `InflateError::UnknownLayout` if the inflater has no such layout.
pub fn inflate_from(inflater: &LayoutInflater, layout: LayoutId) -> Result<View, InflateError> {
    inflater.instantiate(layout)
}

/// Inflates a layout, optionally attaching it to `parent`
///
/// With a parent, an unsized root picks up the parent's child sizing. When
/// `attach_to_root` is set and a parent is given, the new subtree becomes
/// the parent's last child and `None` is returned; otherwise the subtree is
/// returned to the caller. `attach_to_root` is ignored without a parent.
///
/// # Errors
/// `InflateError::UnknownLayout` if the inflater has no such layout.
pub fn inflate_with(
    inflater: &LayoutInflater,
    layout: LayoutId,
    parent: Option<&mut View>,
    attach_to_root: bool,
) -> Result<Option<View>, InflateError> {
    let mut root = inflater.instantiate(layout)?;
    match parent {
        Some(parent) => {
            parent.generate_layout_params(&mut root);
            if attach_to_root {
                parent.children.push(root);
                Ok(None)
            } else {
                Ok(Some(root))
            }
        }
        None => Ok(Some(root)),
    }
}

struct EndlessScrollListener<L> {
    threshold: usize,
    listener: L,
}

impl<L: OnEndlessListener> OnScrollListener for EndlessScrollListener<L> {
    fn on_scroll_state_changed(&mut self, list: &ListView, new_state: ScrollState) {
        let item_count = list.item_count();
        let is_ended = match list.layout_manager() {
            Some(layout_manager) => {
                // An empty list reports no visible row, counted as -1.
                let last_visible = layout_manager
                    .find_last_visible_item_position(item_count)
                    .map_or(-1, |position| position as i64);
                let item_count = i64::try_from(item_count).unwrap_or(i64::MAX);
                let threshold = i64::try_from(self.threshold).unwrap_or(i64::MAX);
                last_visible >= item_count.saturating_sub(threshold)
            }
            None => false,
        };

        if is_ended {
            tracing::trace!(item_count, ?new_state, "list scrolled near its end");
            self.listener.on_endless();
        }
    }
}

/// Calls `listener` whenever a scroll of `list` settles within `threshold`
/// rows of the end
///
/// The check runs on every scroll state change and is not de-duplicated: as
/// long as the last visible row stays inside the threshold, each further
/// state change fires the listener again. Lists without a layout manager
/// never fire.
pub fn set_on_endless_listener<L>(list: &mut ListView, threshold: usize, listener: L)
where
    L: OnEndlessListener + 'static,
{
    list.add_on_scroll_listener(EndlessScrollListener {
        threshold,
        listener,
    });
}

/// Creates a centered rectangle within a given area
///
/// Useful for modal dialogs and popups.
///
/// # Arguments
/// - `percent_x` - Width as a percentage (0-100)
/// - `percent_y` - Height as a percentage (0-100)
/// - `area` - The parent rectangle to center within
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
