use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use tokio::fs;

use crate::AppState;
use crate::logger::log_render_failure;
use crate::render::RenderError;

/// Literal token in the template that the rendered markup replaces.
pub const SSR_MARKER: &str = "{{SSR_CONTENT}}";

pub async fn ssr_handler(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, &'static str)> {

    let page = render_page(&state)
        .await
        .map_err(|e| {
            // operator gets the detail, the client gets the generic body
            log_render_failure(&e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        })?;

    Ok(Html(page))

}

// Render the view, then splice it into the template. Only the first
// occurrence of the marker is replaced; a missing or repeated marker
// passes through untouched (unspecified upstream, pinned here as
// first-match-only).
async fn render_page(state: &AppState) -> Result<String, RenderError> {

    let markup = state.renderer.render_view()?;

    let template = fs::read_to_string(&state.template_path).await?;

    Ok(template.replacen(SSR_MARKER, &markup, 1))

}
