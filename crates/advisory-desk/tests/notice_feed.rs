use std::sync::Arc;

use advisory_desk::content::{
    notice_router, InMemoryNoticeStore, Notice, NoticeFeedService, NoticeStore, NoticeStoreError,
};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use serde_json::Value;
use tower::util::ServiceExt;

fn notice(id: u64, year: i32, month: u32, day: u32) -> Notice {
    Notice {
        id,
        title: format!("Notice {id}"),
        published_on: NaiveDate::from_ymd_opt(year, month, day).expect("valid date"),
        summary: "Regulatory update.".to_string(),
        source_link: (id % 2 == 0).then(|| format!("https://example.org/notices/{id}")),
    }
}

async fn read_json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json payload")
}

#[tokio::test]
async fn feed_lists_notices_newest_first() {
    let store = Arc::new(InMemoryNoticeStore::seeded(vec![
        notice(1, 2025, 3, 10),
        notice(2, 2025, 7, 1),
        notice(3, 2025, 5, 20),
    ]));
    let router = notice_router(Arc::new(NoticeFeedService::new(store)));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/notices")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .expect("array payload")
        .iter()
        .map(|notice| notice["title"].as_str().expect("title string"))
        .collect();
    assert_eq!(titles, vec!["Notice 2", "Notice 3", "Notice 1"]);
}

#[tokio::test]
async fn feed_omits_absent_source_links() {
    let store = Arc::new(InMemoryNoticeStore::seeded(vec![notice(1, 2025, 3, 10)]));
    let router = notice_router(Arc::new(NoticeFeedService::new(store)));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/notices")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    let body = read_json_body(response).await;
    let first = &body.as_array().expect("array payload")[0];
    assert!(first.get("source_link").is_none());
}

struct OfflineStore;

impl NoticeStore for OfflineStore {
    fn fetch_all(&self) -> Result<Vec<Notice>, NoticeStoreError> {
        Err(NoticeStoreError::Unavailable("backend offline".to_string()))
    }
}

#[tokio::test]
async fn store_failures_surface_as_an_inline_error() {
    let router = notice_router(Arc::new(NoticeFeedService::new(Arc::new(OfflineStore))));

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/v1/notices")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json_body(response).await;
    assert_eq!(
        body["error"],
        "Failed to load legal updates. Please try again later."
    );
}
