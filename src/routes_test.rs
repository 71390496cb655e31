use super::*;

#[tokio::test]
async fn healthz_reports_ok_with_version() {
    let Json(body) = healthz().await;
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn base_routes_build_without_leptos_config() {
    let _router: Router = base_routes();
}
