//! Play API reference for RustAPI
//!
//! This crate renders a self-contained HTML page that bootstraps the
//! browser-side Play viewer, giving a RustAPI application interactive
//! API documentation from its OpenAPI document. The page embeds the
//! viewer configuration as JSON and loads the viewer script from a CDN;
//! nothing else is fetched or executed server-side.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rustapi_rs::prelude::*;
//! use rustapi_play::{play_reference_html, PlayConfig};
//!
//! async fn reference() -> Response {
//!     play_reference_html(&PlayConfig::new("/openapi.json", "My API - Reference"))
//! }
//!
//! RustApi::new()
//!     .route("/reference", get(reference))
//!     .run("127.0.0.1:8080")
//!     .await
//! ```
//!
//! The generator itself is a pure function and can be used without the
//! HTTP helper via [`generate_play_html`].

mod config;
mod error;
mod hidden_clients;
mod html;
mod options;
mod theme;

pub use config::{PlayConfig, PLAY_FAVICON_URL, PLAY_INTEGRATION, PLAY_JS_URL};
pub use error::PlayError;
pub use hidden_clients::{HiddenClients, TargetClients};
pub use html::generate_play_html;
pub use options::{Layout, SearchHotKey};
pub use theme::PLAY_THEME;

use bytes::Bytes;
use http::{header, Response, StatusCode};
use http_body_util::Full;

/// Generate the Play reference HTML response
///
/// Returns `200 OK` with `text/html` on success. If the viewer
/// configuration cannot be serialized, no partial document is sent: the
/// error is logged and a plain `500` response is returned instead.
pub fn play_reference_html(config: &PlayConfig) -> Response<Full<Bytes>> {
    match generate_play_html(config) {
        Ok(html) => {
            tracing::debug!("rendered Play reference page ({} bytes)", html.len());
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
                .body(Full::new(Bytes::from(html)))
                .unwrap()
        }
        Err(err) => {
            tracing::error!("Play reference rendering failed: {}", err);
            Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(Full::new(Bytes::from("Failed to render API reference")))
                .unwrap()
        }
    }
}
