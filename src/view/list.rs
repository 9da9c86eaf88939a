//! Scrollable list view
//!
//! `ListView` wraps ratatui's `ListState` with the pieces a scrolling list
//! needs to drive paging: the number of items the data source holds, a
//! layout manager that knows which rows are on screen, and listeners that
//! are told whenever a scroll gesture settles.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

/// Scroll phase reported to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollState {
    /// The list is not moving
    Idle,
    /// The user is actively moving the list
    Dragging,
    /// The list is finishing a jump (page up/down, home/end)
    Settling,
}

/// Observer of scroll state changes on a `ListView`
pub trait OnScrollListener {
    fn on_scroll_state_changed(&mut self, list: &ListView, new_state: ScrollState);
}

/// Lays items out one per row, top to bottom
///
/// Tracks the first visible position and the number of rows on screen so
/// visible positions can be answered without a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearLayoutManager {
    first_visible: usize,
    viewport_rows: usize,
}

impl LinearLayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the rows available on screen, as measured by the last render
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
    }

    /// Index of the first row on screen, `None` for an empty list
    pub fn find_first_visible_item_position(&self, item_count: usize) -> Option<usize> {
        (item_count > 0).then(|| self.first_visible.min(item_count - 1))
    }

    /// Index of the last row on screen, `None` for an empty list
    pub fn find_last_visible_item_position(&self, item_count: usize) -> Option<usize> {
        let first = self.find_first_visible_item_position(item_count)?;
        let rows = self.viewport_rows.max(1);
        Some((first + rows).min(item_count) - 1)
    }

    /// Moves the window the minimum amount needed to show `position`
    pub fn scroll_to_position(&mut self, position: usize) {
        let rows = self.viewport_rows.max(1);
        if position < self.first_visible {
            self.first_visible = position;
        } else if position >= self.first_visible + rows {
            self.first_visible = position + 1 - rows;
        }
    }
}

/// A selectable, scrollable list
pub struct ListView {
    state: ListState,
    item_count: usize,
    layout_manager: Option<LinearLayoutManager>,
    scroll_listeners: Vec<Box<dyn OnScrollListener>>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// Creates an empty list without a layout manager
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            item_count: 0,
            layout_manager: None,
            scroll_listeners: Vec::new(),
        }
    }

    pub fn with_layout_manager(mut self, layout_manager: LinearLayoutManager) -> Self {
        self.layout_manager = Some(layout_manager);
        self
    }

    pub fn layout_manager(&self) -> Option<&LinearLayoutManager> {
        self.layout_manager.as_ref()
    }

    /// Number of items the backing data holds
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Records a new item count after the backing data changed
    ///
    /// Keeps the selection inside the list, selecting the first item when a
    /// previously empty list receives data.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        let selected = match (self.state.selected(), item_count) {
            (_, 0) => None,
            (Some(selected), count) => Some(selected.min(count - 1)),
            (None, _) => Some(0),
        };
        self.select(selected);
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Selects a row and brings it on screen without notifying listeners
    pub fn select(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.item_count);
        self.state.select(index);
        if let Some(index) = index {
            self.keep_visible(index);
        }
    }

    /// Registers a listener for scroll state changes
    pub fn add_on_scroll_listener(&mut self, listener: impl OnScrollListener + 'static) {
        self.scroll_listeners.push(Box::new(listener));
    }

    /// Moves the selection by `delta` rows and reports the scroll
    ///
    /// Listeners are notified even when the selection is already at an edge,
    /// since the user still asked the list to move.
    pub fn scroll_by(&mut self, delta: isize) {
        if self.item_count > 0 {
            let current = self.state.selected().unwrap_or(0) as isize;
            let last = self.item_count as isize - 1;
            let target = current.saturating_add(delta).clamp(0, last) as usize;
            self.select(Some(target));
        }
        let state = if delta.unsigned_abs() > 1 {
            ScrollState::Settling
        } else {
            ScrollState::Dragging
        };
        self.dispatch_scroll_state_changed(state);
        self.dispatch_scroll_state_changed(ScrollState::Idle);
    }

    /// Jumps to the first or last row
    pub fn scroll_to_edge(&mut self, end: bool) {
        if self.item_count > 0 {
            let target = if end { self.item_count - 1 } else { 0 };
            self.select(Some(target));
        }
        self.dispatch_scroll_state_changed(ScrollState::Settling);
        self.dispatch_scroll_state_changed(ScrollState::Idle);
    }

    /// Notifies every registered listener of a new scroll state
    pub fn dispatch_scroll_state_changed(&mut self, new_state: ScrollState) {
        let mut listeners = std::mem::take(&mut self.scroll_listeners);
        for listener in listeners.iter_mut() {
            listener.on_scroll_state_changed(self, new_state);
        }
        self.scroll_listeners = listeners;
    }

    /// Renders `items` inside `block`, measuring the viewport as it goes
    ///
    /// Without a layout manager only the block is drawn.
    pub fn render(&mut self, f: &mut Frame, area: Rect, items: Vec<ListItem>, block: Block) {
        let inner = block.inner(area);
        let Some(layout_manager) = self.layout_manager.as_mut() else {
            f.render_widget(block, area);
            return;
        };

        layout_manager.set_viewport_rows(inner.height as usize);
        if let Some(selected) = self.state.selected() {
            layout_manager.scroll_to_position(selected);
        }
        *self.state.offset_mut() = layout_manager.first_visible;

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn keep_visible(&mut self, index: usize) {
        if let Some(layout_manager) = self.layout_manager.as_mut() {
            layout_manager.scroll_to_position(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn linear(rows: usize) -> LinearLayoutManager {
        let mut layout_manager = LinearLayoutManager::new();
        layout_manager.set_viewport_rows(rows);
        layout_manager
    }

    struct Recorder(Rc<RefCell<Vec<ScrollState>>>);

    impl OnScrollListener for Recorder {
        fn on_scroll_state_changed(&mut self, _list: &ListView, new_state: ScrollState) {
            self.0.borrow_mut().push(new_state);
        }
    }

    #[test]
    fn test_last_visible_position_clamps_to_item_count() {
        let layout_manager = linear(10);
        assert_eq!(layout_manager.find_last_visible_item_position(0), None);
        assert_eq!(layout_manager.find_last_visible_item_position(4), Some(3));
        assert_eq!(layout_manager.find_last_visible_item_position(40), Some(9));
    }

    #[test]
    fn test_scroll_to_position_moves_window_minimally() {
        let mut layout_manager = linear(5);
        layout_manager.scroll_to_position(7);
        assert_eq!(layout_manager.find_first_visible_item_position(20), Some(3));
        layout_manager.scroll_to_position(5);
        assert_eq!(layout_manager.find_first_visible_item_position(20), Some(3));
        layout_manager.scroll_to_position(1);
        assert_eq!(layout_manager.find_first_visible_item_position(20), Some(1));
    }

    #[test]
    fn test_set_item_count_selects_first_row() {
        let mut list = ListView::new().with_layout_manager(linear(5));
        assert_eq!(list.selected(), None);
        list.set_item_count(3);
        assert_eq!(list.selected(), Some(0));
        list.select(Some(2));
        list.set_item_count(1);
        assert_eq!(list.selected(), Some(0));
        list.set_item_count(0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_scroll_by_clamps_and_notifies() {
        let states = Rc::new(RefCell::new(Vec::new()));
        let mut list = ListView::new().with_layout_manager(linear(5));
        list.add_on_scroll_listener(Recorder(states.clone()));
        list.set_item_count(3);

        list.scroll_by(10);
        assert_eq!(list.selected(), Some(2));
        list.scroll_by(1);
        assert_eq!(list.selected(), Some(2));

        assert_eq!(
            *states.borrow(),
            vec![
                ScrollState::Settling,
                ScrollState::Idle,
                ScrollState::Dragging,
                ScrollState::Idle
            ]
        );
    }

    #[test]
    fn test_selection_keeps_window_in_view() {
        let mut list = ListView::new().with_layout_manager(linear(4));
        list.set_item_count(20);
        list.scroll_by(9);
        let layout_manager = list.layout_manager().unwrap();
        assert_eq!(layout_manager.find_first_visible_item_position(20), Some(6));
        assert_eq!(layout_manager.find_last_visible_item_position(20), Some(9));
    }
}
