use maud::Render;

use crate::view::Counter;

pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// The single seam to the markup engine: serialize the current view to
/// a string. Errors surface to the caller; the route handler decides
/// what the client sees.
pub trait ViewRenderer: Send + Sync {
    fn render_view(&self) -> Result<String, RenderError>;
}

/// Production renderer backed by maud. Builds a fresh default counter
/// on every call; no request state flows in, so the output is
/// deterministic.
pub struct MaudRenderer;

impl ViewRenderer for MaudRenderer {
    fn render_view(&self) -> Result<String, RenderError> {

        Ok(Counter::default().render().into_string())

    }
}
