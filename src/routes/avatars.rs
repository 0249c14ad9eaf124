use std::collections::BTreeMap;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use super::docs::AVATAR_TAG;
use crate::{
    app::{
        error::{AppError, ErrorResponse},
        headers::{CORS_HEADERS, IMMUTABLE_CACHE, LISTING_CACHE},
        params::{asset_filename, sanitize_category},
        ApiContext,
    },
    avatar::catalog::{scan_catalog, scan_category, IMAGE_EXTENSIONS},
    telemetry::spawn_blocking_with_tracing,
};

#[derive(OpenApi)]
#[openapi(
    paths(list_catalog, list_category, serve_asset),
    components(schemas(CatalogResponse, CategoryResponse, ErrorResponse))
)]
pub struct AvatarsApi;

#[derive(Serialize, ToSchema)]
pub struct CatalogResponse {
    categories: BTreeMap<String, Vec<String>>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryResponse {
    files: Vec<String>,
}

pub fn router() -> Router<ApiContext> {
    Router::new()
        .route("/api/avatars", get(list_catalog).options(preflight))
        .route("/api/avatars/:category", get(list_category).options(preflight))
        .route("/api/avatars/:category/:id", get(serve_asset))
}

async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, CORS_HEADERS)
}

#[utoipa::path(
    get,
    path = "/api/avatars",
    tag = AVATAR_TAG,
    responses(
        (status = 200, description = "Image files per category", body = CatalogResponse),
        (status = 404, description = "Avatar catalog not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "List avatar catalog", skip_all)]
async fn list_catalog(ctx: State<ApiContext>) -> Result<Response, AppError> {
    let root = ctx.config.avatars_dir.clone();

    let scanned = spawn_blocking_with_tracing(move || scan_catalog(&root, IMAGE_EXTENSIONS))
        .await
        .context("failed to spawn blocking task.")?;

    let categories = match scanned {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!(error = %e, "failed to scan avatar catalog");
            return Err(AppError::catalog_not_found("Avatar catalog not found."));
        }
    };

    let categories = categories
        .into_iter()
        .filter(|(_, files)| !files.is_empty())
        .collect();

    Ok((
        CORS_HEADERS,
        [LISTING_CACHE],
        Json(CatalogResponse { categories }),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/avatars/{category}",
    tag = AVATAR_TAG,
    params(("category" = String, Path, description = "Category directory name")),
    responses(
        (status = 200, description = "Image files in the category", body = CategoryResponse),
        (status = 404, description = "Category invalid or not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "List avatar category", skip_all, fields(category = %category))]
async fn list_category(
    ctx: State<ApiContext>,
    Path(category): Path<String>,
) -> Result<Response, AppError> {
    let category = sanitize_category(&category);
    if category.is_empty() {
        return Err(AppError::invalid_category("Category is invalid."));
    }

    let dir = ctx.config.avatars_dir.join(&category);
    let scanned = spawn_blocking_with_tracing(move || scan_category(&dir, IMAGE_EXTENSIONS))
        .await
        .context("failed to spawn blocking task.")?;

    let Ok(files) = scanned else {
        return Err(AppError::catalog_not_found("Category not found."));
    };

    Ok((CORS_HEADERS, [LISTING_CACHE], Json(CategoryResponse { files })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/avatars/{category}/{id}",
    tag = AVATAR_TAG,
    params(
        ("category" = String, Path, description = "Category directory name"),
        ("id" = String, Path, description = "File name or numeric id; `.png` is appended when missing")
    ),
    responses(
        (status = 200, description = "PNG asset", content_type = "image/png", body = Vec<u8>),
        (status = 404, description = "Not found")
    )
)]
#[tracing::instrument(name = "Serve avatar asset", skip_all, fields(category = %category, id = %id))]
async fn serve_asset(
    ctx: State<ApiContext>,
    Path((category, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let category = sanitize_category(&category);
    let filename = asset_filename(&id).ok_or(AppError::NotFound)?;
    if category.is_empty() {
        return Err(AppError::NotFound);
    }

    let path = ctx.config.avatars_dir.join(category).join(filename);
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "asset not readable");
        AppError::NotFound
    })?;

    Ok((
        [(header::CONTENT_TYPE, "image/png"), IMMUTABLE_CACHE],
        bytes,
    )
        .into_response())
}
