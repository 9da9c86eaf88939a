//! Layout resources and the view tree
//!
//! Screens are described as YAML layout resources and turned into a `View`
//! tree by a `LayoutInflater`. A view tree only knows how to split space and
//! draw static chrome; `slot` nodes hand their area back to the caller so
//! screens can draw live data into them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Layouts shipped with the application
const BUILTIN_LAYOUTS: &str = include_str!("layouts.yaml");

/// Failure while loading or inflating a layout resource
#[derive(Debug, Error)]
pub enum InflateError {
    #[error("unknown layout '{0}'")]
    UnknownLayout(String),
    #[error("malformed layout resource: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to read layout resource {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid size '{0}'")]
    InvalidSize(String),
}

/// Identifier of a layout resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(&'static str);

impl LayoutId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Kind of a node in the view tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Stacks children top to bottom
    Column,
    /// Places children left to right
    Row,
    /// Bordered, titled box stacking its children
    Panel,
    /// Static text
    Text,
    /// Area drawn by the caller
    Slot,
}

/// Space a view asks for inside its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "SizeRepr")]
pub enum Size {
    Length(u16),
    Percentage(u16),
    Min(u16),
    Fill(u16),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Cells(u16),
    Spec(String),
}

impl TryFrom<SizeRepr> for Size {
    type Error = InflateError;

    fn try_from(repr: SizeRepr) -> Result<Self, Self::Error> {
        match repr {
            SizeRepr::Cells(cells) => Ok(Size::Length(cells)),
            SizeRepr::Spec(spec) => spec.parse(),
        }
    }
}

impl FromStr for Size {
    type Err = InflateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || InflateError::InvalidSize(s.to_string());

        if s == "fill" {
            return Ok(Size::Fill(1));
        }
        if let Some(weight) = s.strip_prefix("fill:") {
            return weight.trim().parse().map(Size::Fill).map_err(|_| invalid());
        }
        if let Some(min) = s.strip_prefix("min:") {
            return min.trim().parse().map(Size::Min).map_err(|_| invalid());
        }
        if let Some(percent) = s.strip_suffix('%') {
            let percent: u16 = percent.trim().parse().map_err(|_| invalid())?;
            if percent > 100 {
                return Err(invalid());
            }
            return Ok(Size::Percentage(percent));
        }
        s.parse().map(Size::Length).map_err(|_| invalid())
    }
}

impl From<Size> for Constraint {
    fn from(size: Size) -> Self {
        match size {
            Size::Length(cells) => Constraint::Length(cells),
            Size::Percentage(percent) => Constraint::Percentage(percent),
            Size::Min(cells) => Constraint::Min(cells),
            Size::Fill(weight) => Constraint::Fill(weight),
        }
    }
}

/// A node of an inflated view tree
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct View {
    #[serde(rename = "type")]
    pub kind: ViewKind,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub size: Option<Size>,
    #[serde(default)]
    pub children: Vec<View>,
}

impl View {
    /// Finds the first node with the given id, depth first
    pub fn find(&self, id: &str) -> Option<&View> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut View> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Detaches the direct child with the given id
    pub fn remove_child(&mut self, id: &str) -> Option<View> {
        let index = self
            .children
            .iter()
            .position(|child| child.id.as_deref() == Some(id))?;
        Some(self.children.remove(index))
    }

    /// Gives an unsized child the sizing this view applies to its children
    pub(crate) fn generate_layout_params(&self, child: &mut View) {
        if child.size.is_none() {
            child.size = Some(Size::Fill(1));
        }
    }

    /// Draws the tree into `area`
    ///
    /// `slots` is called with the id and area of every `slot` node.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        slots: &mut dyn FnMut(&str, &mut Frame, Rect),
    ) {
        match self.kind {
            ViewKind::Column => self.render_children(f, area, Direction::Vertical, slots),
            ViewKind::Row => self.render_children(f, area, Direction::Horizontal, slots),
            ViewKind::Panel => {
                let mut block = Block::default().borders(Borders::ALL);
                if let Some(title) = &self.title {
                    block = block.title(title.as_str());
                }
                let inner = block.inner(area);
                f.render_widget(block, area);
                self.render_children(f, inner, Direction::Vertical, slots);
            }
            ViewKind::Text => {
                let text = self.text.as_deref().unwrap_or_default();
                let paragraph = Paragraph::new(text)
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true });
                f.render_widget(paragraph, area);
            }
            ViewKind::Slot => slots(self.id.as_deref().unwrap_or_default(), f, area),
        }
    }

    fn render_children(
        &self,
        f: &mut Frame,
        area: Rect,
        direction: Direction,
        slots: &mut dyn FnMut(&str, &mut Frame, Rect),
    ) {
        if self.children.is_empty() {
            return;
        }

        let constraints: Vec<Constraint> = self
            .children
            .iter()
            .map(|child| child.size.map_or(Constraint::Min(0), Constraint::from))
            .collect();
        let chunks = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .split(area);

        for (child, chunk) in self.children.iter().zip(chunks.iter()) {
            child.render(f, *chunk, slots);
        }
    }
}

/// Registry of layout resources that builds view trees on demand
#[derive(Debug, Clone, Default)]
pub struct LayoutInflater {
    layouts: HashMap<String, View>,
}

impl LayoutInflater {
    /// Parses a YAML document mapping layout ids to view trees
    pub fn from_yaml(document: &str) -> Result<Self, InflateError> {
        let layouts: HashMap<String, View> = serde_yaml::from_str(document)?;
        Ok(Self { layouts })
    }

    /// Loads the layouts bundled with the application
    pub fn builtin() -> Result<Self, InflateError> {
        Self::from_yaml(BUILTIN_LAYOUTS)
    }

    /// Adds the layouts of a YAML file, replacing any with the same id
    pub fn merge_file(&mut self, path: &Path) -> Result<(), InflateError> {
        let contents = fs::read_to_string(path).map_err(|source| InflateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides = Self::from_yaml(&contents)?;
        tracing::info!(
            path = %path.display(),
            count = overrides.layouts.len(),
            "merged layout overrides"
        );
        self.layouts.extend(overrides.layouts);
        Ok(())
    }

    pub fn contains(&self, layout: LayoutId) -> bool {
        self.layouts.contains_key(layout.name())
    }

    /// Builds a fresh copy of a layout's view tree
    pub(crate) fn instantiate(&self, layout: LayoutId) -> Result<View, InflateError> {
        self.layouts
            .get(layout.name())
            .cloned()
            .ok_or_else(|| InflateError::UnknownLayout(layout.name().to_string()))
    }
}
