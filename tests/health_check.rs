mod common;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app().await;

    let res = app.get("/health_check").await;

    assert!(res.status().is_success());
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let app = common::spawn_app().await;

    let res = app.get("/api-docs/openapi.json").await;
    assert!(res.status().is_success());

    let body: serde_json::Value = res.json().await.unwrap();
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/avatar/{style}",
        "/api/avatars",
        "/api/avatars/{category}",
        "/api/avatars/{category}/{id}",
        "/api/url",
    ] {
        assert!(paths.contains_key(path), "{} missing from openapi", path);
    }
}
