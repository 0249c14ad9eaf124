use crate::app::ApiContext;
use crate::routes::{avatar::AvatarApi, avatars::AvatarsApi, url::UrlApi};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const AVATAR_TAG: &str = "avatar";

pub fn router() -> Router<ApiContext> {
    Router::new().route("/api-docs/openapi.json", get(openapi))
}

#[derive(OpenApi)]
#[openapi(
    info(title = "avatarsverse"),
    tags((name = "avatar", description = "Deterministic avatars"))
)]
struct Api;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    let mut api = Api::openapi();
    api.merge(AvatarApi::openapi());
    api.merge(AvatarsApi::openapi());
    api.merge(UrlApi::openapi());

    Json(api)
}
