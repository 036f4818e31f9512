//! HTTP endpoints for the pages.
use std::sync::Arc;

use axum::{
  Router,
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
  routing::get,
};
use log::{error, info};
use tera::Context;
use tokio::net::TcpListener;

use crate::{
  error::{HydraError, Result},
  render::{PAGES, PageRenderer},
};

impl IntoResponse for HydraError {
  fn into_response(self) -> Response {
    let status = if self.is_not_found() {
      StatusCode::NOT_FOUND
    } else {
      StatusCode::INTERNAL_SERVER_ERROR
    };
    error!("Request failed ({status}): {self}");

    (status, self.to_string()).into_response()
  }
}

/// Create the application router.
pub fn router(renderer: Arc<PageRenderer>) -> Router {
  let mut router = Router::new().route("/", get(index));

  for (slug, template) in PAGES {
    router = router.route(
      &format!("/{slug}"),
      get(move |State(renderer): State<Arc<PageRenderer>>| {
        serve_page(renderer, template)
      }),
    );
  }

  router.with_state(renderer)
}

async fn index() -> &'static str {
  "Greetings, programs!"
}

/// Render a page on the blocking thread pool, highlighting can be slow.
async fn serve_page(
  renderer: Arc<PageRenderer>,
  template: &'static str,
) -> Result<Html<String>> {
  tokio::task::spawn_blocking(move || render_page(&renderer, template)).await?
}

/// Render one page for a request.
///
/// # Errors
///
/// Returns the rendering error, which maps to a 404 for unknown templates and
/// a 500 otherwise.
pub fn render_page(
  renderer: &PageRenderer,
  template: &str,
) -> Result<Html<String>> {
  renderer
    .render_page(template, &Context::new())
    .map(Html)
}

/// Listen on `bind` and serve until Ctrl+C is received.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run(renderer: Arc<PageRenderer>, bind: &str) -> Result<()> {
  let listener = TcpListener::bind(bind).await?;
  info!("Listening on http://{}", listener.local_addr()?);

  axum::serve(listener, router(renderer))
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  if let Err(e) = tokio::signal::ctrl_c().await {
    error!("Failed to install Ctrl+C handler: {e}");
    std::future::pending::<()>().await;
  }
  info!("Shutdown signal received, stopping server...");
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Config;

  fn renderer() -> PageRenderer {
    PageRenderer::new(Config::default()).expect("default config works")
  }

  #[test]
  fn test_pages_render() {
    let renderer = renderer();
    for (_, template) in PAGES {
      let Html(body) =
        render_page(&renderer, template).expect("embedded pages render");
      assert!(body.contains("<article>"));
    }
  }

  #[test]
  fn test_missing_page_is_not_found() {
    let response = render_page(&renderer(), "invalid_template.md")
      .expect_err("template does not exist")
      .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn test_serve_page_runs_off_the_runtime() {
    let runtime = tokio::runtime::Builder::new_current_thread()
      .build()
      .expect("runtime builds");
    let renderer = Arc::new(renderer());

    let Html(body) = runtime
      .block_on(serve_page(Arc::clone(&renderer), "colors.md"))
      .expect("embedded pages render");
    assert!(body.contains("<article>"));

    let response = runtime
      .block_on(serve_page(renderer, "invalid_template.md"))
      .expect_err("template does not exist")
      .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn test_other_errors_are_internal() {
    let response =
      HydraError::Config("broken".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  }
}
