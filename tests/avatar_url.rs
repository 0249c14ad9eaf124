use avatarsverse::avatar::hash_seed;
use reqwest::StatusCode;

mod common;

async fn url_for(app: &common::TestApp, query: &str) -> reqwest::Response {
    app.get(&format!("/api/url?{}", query)).await
}

#[tokio::test]
async fn picks_from_manifest() {
    let app = common::spawn_app().await;

    let res = url_for(&app, "seed=alice").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let files = ["1.png", "2.png", "10.png"];
    let expected = files[(hash_seed("alice") % 3) as usize];
    assert_eq!(
        body["url"],
        format!("https://cdn.example.com/avatars@main/avatars/voxel/{}", expected)
    );
}

#[tokio::test]
async fn same_seed_same_url() {
    let app = common::spawn_app().await;

    let a: serde_json::Value = url_for(&app, "seed=bob").await.json().await.unwrap();
    let b: serde_json::Value = url_for(&app, "seed=bob").await.json().await.unwrap();

    assert_eq!(a, b);
}

#[tokio::test]
async fn legacy_total_uses_numbered_png() {
    let app = common::spawn_app().await;

    let body: serde_json::Value = url_for(&app, "seed=seed&total=20&tag=1.0.0")
        .await
        .json()
        .await
        .unwrap();

    let n = hash_seed("seed") % 20 + 1;
    assert_eq!(
        body["url"],
        format!("https://cdn.example.com/avatars@1.0.0/avatars/voxel/{}.png", n)
    );
}

#[tokio::test]
async fn category_without_manifest_entry_falls_back() {
    let app = common::spawn_app_with(false).await;

    let body: serde_json::Value = url_for(&app, "seed=alice")
        .await
        .json()
        .await
        .unwrap();

    assert_eq!(
        body["url"],
        "https://cdn.example.com/avatars@main/avatars/voxel/1.png"
    );
}

#[tokio::test]
async fn rejects_invalid_arguments() {
    let app = common::spawn_app().await;

    for query in ["seed=", "seed=alice&total=0", "seed=alice&total=-3"] {
        let res = url_for(&app, query).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", query);
    }
}
