//! View toolkit
//!
//! Building blocks the screens are made of:
//! - `layout` - YAML layout resources and the inflated view tree
//! - `list` - scrollable list view with scroll-state listeners
//! - `helpers` - inflation shortcuts, endless scrolling, popup geometry

pub mod helpers;
pub mod layout;
pub mod list;

pub use helpers::{
    centered_rect, inflate, inflate_from, inflate_with, set_on_endless_listener,
    OnEndlessListener,
};
pub use layout::{InflateError, LayoutId, LayoutInflater, Size, View, ViewKind};
pub use list::{LinearLayoutManager, ListView, OnScrollListener, ScrollState};
