// Page-layout collaborator: style resolution + PDF rendering over builtin
// fonts. Rendering is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod pdf;
pub mod style;

pub use pdf::{render_pdf, RenderError};
pub use style::StyleConfig;
