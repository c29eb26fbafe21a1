//! # bootnav
//!
//! Renders a hierarchical menu tree into Bootstrap 4 navbar/dropdown markup.
//!
//! The crate is a single transform: a [`MenuRenderer`] walks a read-only
//! [`MenuItem`] tree depth-first and emits begin-tag, attribute, text, and
//! end-tag operations to a [`MarkupSink`]. Data binding, postback wiring, and
//! request lifecycle belong to the host; it materializes the tree and the
//! per-request [`RenderContext`], then calls [`MenuRenderer::render`].
//!
//! ```
//! use bootnav::{HtmlWriter, MenuItem, MenuRenderer, RenderContext};
//!
//! let items = vec![
//!     MenuItem::new("Home").with_url("/"),
//!     MenuItem::new("About").with_child(MenuItem::new("Team").with_url("/team")),
//! ];
//! let context = RenderContext::new()
//!     .with_current_path("/")
//!     .with_highlight_active(true);
//!
//! let mut writer = HtmlWriter::new();
//! MenuRenderer::new().render(&items, &context, &mut writer)?;
//! let html = writer.into_html()?;
//!
//! assert!(html.contains(r#"<a href="/" class="active nav-link" title="Home">Home</a>"#));
//! assert!(html.contains(r#"<div class="dropdown-menu">"#));
//! # Ok::<(), bootnav::RenderError>(())
//! ```

pub mod error;
pub mod menu;
pub mod renderer;


pub use error::{RenderError, RenderResult};
pub use menu::{MenuItem, RenderContext};
pub use renderer::{escape, HtmlWriter, MarkupSink, MenuRenderer};
