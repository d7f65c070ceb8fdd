//! The static file router: path resolution with a traversal guard, MIME
//! lookup by extension, and plain HTML error pages.

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// MIME types by lowercase file extension. Anything else is served as
/// `application/octet-stream`.
const MIME_TYPES: &[(&str, &str)] = &[
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "text/javascript"),
    ("json", "application/json"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("avif", "image/avif"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
    ("ttf", "font/ttf"),
    ("otf", "font/otf"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
];

pub fn mime_for(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| *mime)
        })
        .unwrap_or("application/octet-stream")
}

#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Directory files are served from.
    pub root: PathBuf,
    /// File served for the bare `/` path.
    pub index: String,
}

pub fn router(config: ServeConfig) -> Router {
    Router::new()
        .fallback(get(serve_file))
        .with_state(Arc::new(config))
}

/// Resolve a request path to a root-relative path, or `None` for anything
/// that could escape the root: `..` segments (before or after percent
/// decoding), undecodable escapes, backslashes, NULs.
pub fn sanitize_request_path(raw: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            segment if segment.contains('\\') || segment.contains('\0') => return None,
            segment => relative.push(segment),
        }
    }
    Some(relative)
}

async fn serve_file(State(config): State<Arc<ServeConfig>>, uri: Uri) -> Response {
    let request_path = uri.path();
    let Some(relative) = sanitize_request_path(request_path) else {
        error!(path = request_path, "rejected unsafe request path");
        return not_found();
    };

    let full = if relative.as_os_str().is_empty() {
        config.root.join(&config.index)
    } else {
        config.root.join(relative)
    };

    match tokio::fs::read(&full).await {
        Ok(data) => {
            info!(path = request_path, bytes = data.len(), "served");
            (
                [
                    (header::CONTENT_TYPE, mime_for(&full)),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                data,
            )
                .into_response()
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!(path = request_path, "not found");
            not_found()
        }
        Err(err) => {
            error!(path = request_path, %err, "error serving file");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>500 Internal Server Error</h1>"),
            )
                .into_response()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>404 Not Found</h1><p>The requested file was not found.</p>"),
    )
        .into_response()
}
