//! Rendering error types.

use thiserror::Error;

/// Errors surfaced while rendering a menu tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A structurally required input was missing at a rendering step,
    /// named by the payload.
    #[error("missing required {0}")]
    InvalidArgument(&'static str),

    /// The tree nested past the limit configured on the render context.
    #[error("menu nesting depth {depth} exceeds configured limit {limit}")]
    DepthExceeded { depth: usize, limit: usize },
}

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
