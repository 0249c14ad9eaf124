use axum::{
    extract::{Path, Query},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use utoipa::OpenApi;

use super::docs::AVATAR_TAG;
use crate::{
    app::{error::AppError, headers::IMMUTABLE_CACHE, params::AvatarParams, ApiContext},
    avatar::render_style,
};

#[derive(OpenApi)]
#[openapi(paths(render_avatar))]
pub struct AvatarApi;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api/avatar/:style", get(render_avatar))
}

#[utoipa::path(
    get,
    path = "/api/avatar/{style}",
    tag = AVATAR_TAG,
    params(
        ("style" = String, Path, description = "Registered style name, case-insensitive"),
        ("seed" = Option<String>, Query, description = "Any string, truncated to 200 characters"),
        ("size" = Option<u32>, Query, description = "Pixel size within 16..=512, default 64"),
        ("radius" = Option<u32>, Query, description = "Corner radius within 0..=50, default 0"),
    ),
    responses(
        (status = 200, description = "Rendered avatar", content_type = "image/svg+xml", body = String),
        (status = 404, description = "Style not found")
    )
)]
#[tracing::instrument(name = "Render avatar", skip_all, fields(style = %style))]
async fn render_avatar(
    Path(style): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let params = AvatarParams::from_query(&query);
    let svg = render_style(&style, &params.seed, &params.render_options())?;

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml"), IMMUTABLE_CACHE],
        svg,
    )
        .into_response())
}
