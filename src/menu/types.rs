//! Menu data model.
//!
//! Represents navigational links organized into an ordered tree. The tree is
//! built by a data-binding collaborator and handed to the renderer read-only;
//! item order is rendering order.

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_path_separator() -> char {
    '/'
}

/// A single node in a navigation menu tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label.
    pub text: String,

    /// Link destination; `None` or empty means the item is not a link.
    #[serde(default)]
    pub navigate_url: Option<String>,

    /// CSS class for a leading icon glyph inside the rendered anchor.
    #[serde(default)]
    pub icon_class: Option<String>,

    /// Hover tooltip; falls back to `text` when absent or empty.
    #[serde(default)]
    pub tool_tip: Option<String>,

    /// Disabled items are never rendered as links, even with a URL.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Child items, rendered in insertion order.
    #[serde(default)]
    pub children: Vec<MenuItem>,

    /// Separator-delimited identifier of this item's tree position.
    /// Preserved to match the host data-binding contract; the renderer does
    /// not consume it.
    #[serde(default)]
    pub value_path: String,
}

impl MenuItem {
    /// Create an item with the given label and nothing else set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            navigate_url: None,
            icon_class: None,
            tool_tip: None,
            enabled: true,
            children: Vec::new(),
            value_path: String::new(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.navigate_url = Some(url.into());
        self
    }

    pub fn with_icon_class(mut self, icon_class: impl Into<String>) -> Self {
        self.icon_class = Some(icon_class.into());
        self
    }

    pub fn with_tool_tip(mut self, tool_tip: impl Into<String>) -> Self {
        self.tool_tip = Some(tool_tip.into());
        self
    }

    pub fn with_value_path(mut self, value_path: impl Into<String>) -> Self {
        self.value_path = value_path.into();
        self
    }

    pub fn with_child(mut self, child: MenuItem) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = MenuItem>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Whether the item carries one or more child items.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the item renders as a working link: enabled with a non-empty
    /// URL.
    pub fn is_link(&self) -> bool {
        self.enabled && self.navigate_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// The URL the item navigates to, if one resolves. A disabled item never
    /// resolves a URL, so it degrades to the fallback anchor and is never
    /// marked active.
    pub fn resolved_url(&self) -> Option<&str> {
        if self.is_link() {
            self.navigate_url.as_deref()
        } else {
            None
        }
    }
}

/// Per-request configuration for a single render pass.
///
/// Constructed once per pass by the host and read-only for the duration of
/// rendering; no state is carried across passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    /// When true, a link whose resolved URL equals `current_path` is marked
    /// active.
    #[serde(default)]
    pub highlight_active: bool,

    /// Absolute path of the current request, compared exactly against
    /// resolved item URLs.
    #[serde(default)]
    pub current_path: String,

    /// Extra CSS class appended to the root container and to every dropdown
    /// body.
    #[serde(default)]
    pub css_class: Option<String>,

    /// Separator used in item `value_path`s. Preserved to match the host
    /// contract; the renderer does not consume it.
    #[serde(default = "default_path_separator")]
    pub path_separator: char,

    /// Maximum dropdown nesting depth; descending past it fails the render.
    /// `None` leaves descent unbounded.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            highlight_active: false,
            current_path: String::new(),
            css_class: None,
            path_separator: '/',
            max_depth: None,
        }
    }

    pub fn with_highlight_active(mut self, highlight_active: bool) -> Self {
        self.highlight_active = highlight_active;
        self
    }

    pub fn with_current_path(mut self, current_path: impl Into<String>) -> Self {
        self.current_path = current_path.into();
        self
    }

    pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    pub fn with_path_separator(mut self, path_separator: char) -> Self {
        self.path_separator = path_separator;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
