use crate::error::{RenderError, RenderResult};
use crate::renderer::traits::MarkupSink;

/// Minimal HTML escaping for attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// String-backed [`MarkupSink`] producing flat HTML.
///
/// Output carries no whitespace between tags. Attribute values and text are
/// emitted verbatim; callers escape anything that needs it.
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    pending: Vec<(String, String)>,
    open: Vec<String>,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The markup accumulated so far, open tags included.
    pub fn html(&self) -> &str {
        &self.out
    }

    /// Finish writing and return the accumulated markup.
    ///
    /// Fails with [`RenderError::InvalidArgument`] if any element is still
    /// open.
    pub fn into_html(self) -> RenderResult<String> {
        if !self.open.is_empty() {
            return Err(RenderError::InvalidArgument("end_tag"));
        }
        Ok(self.out)
    }
}

impl MarkupSink for HtmlWriter {
    fn add_attribute(&mut self, name: &str, value: &str) -> RenderResult<()> {
        self.pending.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn begin_tag(&mut self, tag: &str) -> RenderResult<()> {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in self.pending.drain(..) {
            self.out.push(' ');
            self.out.push_str(&name);
            self.out.push_str("=\"");
            self.out.push_str(&value);
            self.out.push('"');
        }
        self.out.push('>');
        self.open.push(tag.to_string());
        Ok(())
    }

    fn end_tag(&mut self) -> RenderResult<()> {
        let tag = self
            .open
            .pop()
            .ok_or(RenderError::InvalidArgument("open element"))?;
        self.pending.clear();
        self.out.push_str("</");
        self.out.push_str(&tag);
        self.out.push('>');
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> RenderResult<()> {
        self.out.push_str(text);
        Ok(())
    }
}
