pub mod renderer;
pub mod traits;
pub mod writer;

pub use renderer::*;
pub use traits::*;
pub use writer::*;
