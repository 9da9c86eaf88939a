//! Catalog data model
//!
//! Value objects deserialized from the product catalog. Only option values
//! are modelled here; products and variants live on the catalog service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One concrete value of a product option
///
/// For example the value "Blue" of the option named "Color". Instances are
/// immutable once built; equality and hashing cover all three fields, so two
/// values with the same option id, name and value are interchangeable.
///
/// Every field may be absent in the catalog payload. Absent fields compare
/// equal to each other and unequal to any present value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    option_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl OptionValue {
    /// Creates a fully populated option value
    pub fn new(option_id: i64, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            option_id: Some(option_id),
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    /// Unique identifier of the option this value belongs to
    pub fn option_id(&self) -> Option<i64> {
        self.option_id
    }

    /// The option name (e.g. "Color", "Size")
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The value (e.g. "Blue", "Small")
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name().unwrap_or("-"),
            self.value().unwrap_or("-")
        )
    }
}

/// One page of option values served by a catalog source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    /// Zero-based page index
    pub page: usize,
    /// Values on this page, in catalog order
    pub values: Vec<OptionValue>,
    /// Whether a later page holds more values
    pub has_more: bool,
}
