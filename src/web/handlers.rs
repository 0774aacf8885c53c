//! Request handlers and the API error type.

use super::AppState;
use crate::gallery::{Gallery, GalleryError};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unknown action: {0:?}")]
    UnknownAction(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Gallery(#[from] GalleryError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownAction(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Gallery(GalleryError::UnknownImage(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Run a gallery operation on the blocking pool.
async fn blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Gallery) -> Result<T, ApiError> + Send + 'static,
{
    let gallery = Arc::clone(&state.gallery);
    tokio::task::spawn_blocking(move || f(&gallery)).await?
}

pub async fn health() -> &'static str {
    "ok"
}

// ============================================================================
// Listing
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub visitor: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListingResponse {
    /// The visitor the star state is for. Freshly assigned if none was given.
    pub visitor: String,
    pub images: Vec<ImageEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    /// URL of the thumbnail, `null` when it could not be generated.
    pub thumbnail: Option<String>,
    pub starred: bool,
    pub stars: usize,
}

/// Route to an image's thumbnail, with the filename encoded as one path segment.
pub fn thumbnail_url(filename: &str) -> String {
    format!("/thumbs/{}", urlencoding::encode(filename))
}

pub async fn list_images(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListingResponse>, ApiError> {
    let visitor = params
        .visitor
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let listing = {
        let visitor = visitor.clone();
        blocking(&state, move |gallery| Ok(gallery.listing(&visitor)?)).await?
    };

    let images = listing
        .into_iter()
        .map(|entry| ImageEntry {
            thumbnail: entry
                .thumbnail
                .map(|_| thumbnail_url(&entry.filename)),
            filename: entry.filename,
            starred: entry.starred,
            stars: entry.stars,
        })
        .collect();
    Ok(Json(ListingResponse { visitor, images }))
}

// ============================================================================
// Star toggle
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub action: String,
    pub image: String,
    pub visitor: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub starred: bool,
}

pub async fn toggle_star(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, ApiError> {
    if request.action != "toggle_star" {
        return Err(ApiError::UnknownAction(request.action));
    }
    if request.visitor.is_empty() {
        return Err(ApiError::BadRequest("visitor must not be empty".into()));
    }
    let starred = blocking(&state, move |gallery| {
        Ok(gallery.toggle_star(&request.image, &request.visitor)?)
    })
    .await?;
    Ok(Json(ToggleResponse {
        success: true,
        starred,
    }))
}

// ============================================================================
// Files
// ============================================================================

pub async fn thumbnail(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let (bytes, mime) = blocking(&state, move |gallery| {
        let thumb = gallery.thumbnail(&filename)?;
        Ok((std::fs::read(&thumb.path)?, thumb.format.mime_type()))
    })
    .await?;
    Ok(([(header::CONTENT_TYPE, mime)], bytes).into_response())
}

pub async fn original(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    let (bytes, mime) = blocking(&state, move |gallery| {
        let image = gallery.image(&filename)?;
        Ok((std::fs::read(&image.path)?, image.format.mime_type()))
    })
    .await?;
    Ok(([(header::CONTENT_TYPE, mime)], bytes).into_response())
}
