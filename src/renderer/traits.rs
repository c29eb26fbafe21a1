use crate::error::RenderResult;

/// Destination for structured markup write operations.
///
/// Attributes queued since the last `begin_tag`/`end_tag` call apply to the
/// next opened tag. Text is written as-is; the sink owns any further
/// escaping.
pub trait MarkupSink {
    /// Queue an attribute for the next opened tag.
    fn add_attribute(&mut self, name: &str, value: &str) -> RenderResult<()>;

    /// Open a tag, applying all queued attributes in insertion order.
    fn begin_tag(&mut self, tag: &str) -> RenderResult<()>;

    /// Close the innermost open tag, discarding any attributes queued since
    /// it was opened.
    fn end_tag(&mut self) -> RenderResult<()>;

    /// Write text content verbatim.
    fn write_text(&mut self, text: &str) -> RenderResult<()>;
}
