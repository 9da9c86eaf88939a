//! Utility functions
//!
//! Pure helpers shared by the screens: argument guards and collection
//! transformations. Nothing here touches the terminal or the catalog.

pub mod collections;
pub mod validation;

pub use collections::{
    filter, first_item, first_item_with, fold, map_items, min_item, reduce, ReduceCallback,
};
pub use validation::{check_not_blank, check_not_empty, check_not_null, ArgumentError};
