use tracing::{debug, trace};

use crate::error::{RenderError, RenderResult};
use crate::menu::{MenuItem, RenderContext};
use crate::renderer::traits::MarkupSink;
use crate::renderer::writer::escape;

/// Class applied to the root navbar container.
const ROOT_CLASS: &str = "navbar-nav mr-auto mt-2 mt-lg-0";

/// Class applied to dropdown body containers.
const DROPDOWN_MENU_CLASS: &str = "dropdown-menu";

/// Where a sequence of items is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// The outermost `ul` navbar container; items are wrapped in `li`.
    Root,
    /// A `div.dropdown-menu` body; anchors are direct children of the body.
    DropDown,
}

/// Stateless Bootstrap 4 navbar renderer.
///
/// Consumes a [`MenuItem`] tree and a [`RenderContext`] and emits begin-tag,
/// attribute, text, and end-tag operations to a [`MarkupSink`] in strict
/// document order. Holds no state between calls; concurrent renders over
/// independent inputs need no locking.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuRenderer;

impl MenuRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render `items` as a navbar, writing markup to `sink`.
    ///
    /// An empty slice writes nothing and succeeds. The tree must be acyclic;
    /// descent is bounded only when [`RenderContext::max_depth`] is set.
    pub fn render(
        &self,
        items: &[MenuItem],
        context: &RenderContext,
        sink: &mut dyn MarkupSink,
    ) -> RenderResult<()> {
        if items.is_empty() {
            return Ok(());
        }
        debug!(
            items = items.len(),
            highlight_active = context.highlight_active,
            "rendering navbar"
        );
        self.render_items(items, context, sink, Placement::Root, 0)
    }

    /// Render a sequence of items inside its container element.
    fn render_items(
        &self,
        items: &[MenuItem],
        context: &RenderContext,
        sink: &mut dyn MarkupSink,
        placement: Placement,
        depth: usize,
    ) -> RenderResult<()> {
        if let Some(limit) = context.max_depth {
            if depth > limit {
                return Err(RenderError::DepthExceeded { depth, limit });
            }
        }

        let (tag, base_class) = match placement {
            Placement::Root => ("ul", ROOT_CLASS),
            Placement::DropDown => ("div", DROPDOWN_MENU_CLASS),
        };
        let mut class = base_class.to_string();
        if let Some(extra) = context.css_class.as_deref().filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }
        sink.add_attribute("class", &class)?;
        sink.begin_tag(tag)?;

        for item in items {
            self.render_item(item, context, sink, placement, depth)?;
        }

        sink.end_tag()
    }

    /// Classify and render a single item.
    ///
    /// Children presence takes precedence over link-ness: an item with both
    /// children and a URL renders as a dropdown and its URL is discarded.
    /// Link and leaf-non-link items share the same wrapping; the anchor
    /// degrades to `href="#"` when no URL resolves.
    fn render_item(
        &self,
        item: &MenuItem,
        context: &RenderContext,
        sink: &mut dyn MarkupSink,
        placement: Placement,
        depth: usize,
    ) -> RenderResult<()> {
        trace!(text = %item.text, "rendering menu item");

        if item.has_children() {
            sink.add_attribute("class", "nav-item dropdown")?;
            sink.begin_tag("li")?;
            self.render_dropdown(item, context, sink, depth)?;
            sink.end_tag()
        } else if placement == Placement::DropDown {
            self.render_link(item, context, sink, true)
        } else {
            sink.add_attribute("class", "nav-item")?;
            sink.begin_tag("li")?;
            self.render_link(item, context, sink, false)?;
            sink.end_tag()
        }
    }

    /// Render an anchor for a link or leaf item.
    fn render_link(
        &self,
        item: &MenuItem,
        context: &RenderContext,
        sink: &mut dyn MarkupSink,
        in_dropdown: bool,
    ) -> RenderResult<()> {
        let resolved = item.resolved_url();

        let href = match resolved {
            Some(url) => escape(url),
            None => "#".to_string(),
        };
        sink.add_attribute("href", &href)?;

        // Exact string equality on the resolved path, never a prefix match.
        let active = context.highlight_active && resolved == Some(context.current_path.as_str());
        let base_class = if in_dropdown { "dropdown-item" } else { "nav-link" };
        let class = if active {
            format!("active {}", base_class)
        } else {
            base_class.to_string()
        };
        sink.add_attribute("class", &class)?;

        let title = item
            .tool_tip
            .as_deref()
            .filter(|tip| !tip.is_empty())
            .unwrap_or(&item.text);
        sink.add_attribute("title", title)?;
        sink.begin_tag("a")?;

        if let Some(icon) = item.icon_class.as_deref().filter(|c| !c.trim().is_empty()) {
            sink.add_attribute("class", icon)?;
            sink.begin_tag("i")?;
            sink.end_tag()?;
        }

        sink.write_text(&item.text)?;
        sink.end_tag()
    }

    /// Render a dropdown: toggle anchor followed by the nested body.
    fn render_dropdown(
        &self,
        item: &MenuItem,
        context: &RenderContext,
        sink: &mut dyn MarkupSink,
        depth: usize,
    ) -> RenderResult<()> {
        sink.add_attribute("href", "#")?;
        sink.add_attribute("class", "nav-link dropdown-toggle")?;
        sink.add_attribute("aria-haspopup", "true")?;
        sink.add_attribute("aria-expanded", "false")?;
        sink.add_attribute("data-toggle", "dropdown")?;
        sink.begin_tag("a")?;

        sink.write_text(&format!("{}&nbsp;", item.text))?;

        sink.add_attribute("class", "caret")?;
        sink.begin_tag("b")?;
        sink.end_tag()?;

        sink.end_tag()?;

        self.render_items(&item.children, context, sink, Placement::DropDown, depth + 1)
    }
}
