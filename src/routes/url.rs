use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use super::docs::AVATAR_TAG;
use crate::{
    app::{error::AppError, ApiContext},
    avatar::{
        url::{DEFAULT_CATEGORY, DEFAULT_TAG},
        AvatarUrl,
    },
};

#[derive(OpenApi)]
#[openapi(paths(avatar_url), components(schemas(UrlResponse)))]
pub struct UrlApi;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UrlQuery {
    /// Any non-empty string
    seed: String,
    /// Defaults to `voxel`
    category: Option<String>,
    /// Explicit pool size, selects numeric `{n}.png` file names
    total: Option<i64>,
    /// `main` or a release tag such as `1.0.0`
    tag: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UrlResponse {
    url: String,
}

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api/url", get(avatar_url))
}

#[utoipa::path(
    get,
    path = "/api/url",
    tag = AVATAR_TAG,
    params(UrlQuery),
    responses(
        (status = 200, description = "CDN URL of the selected asset", body = UrlResponse),
        (status = 400, description = "Empty seed or non-positive total")
    )
)]
#[tracing::instrument(name = "Build avatar url", skip(ctx))]
async fn avatar_url(
    ctx: State<ApiContext>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<UrlResponse>, AppError> {
    let mut request = AvatarUrl::new(&query.seed)
        .category(query.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
        .tag(query.tag.as_deref().unwrap_or(DEFAULT_TAG));
    if let Some(total) = query.total {
        request = request.total(total);
    }

    let url = request.build(&ctx.config.cdn_base, &ctx.manifest)?;

    Ok(Json(UrlResponse { url }))
}
