use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::pages::{MarketingPage, PageSlug, SiteNavigation};
use super::stories::{StoryLibrary, SuccessStory};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct StoryQuery {
    #[serde(default)]
    pub sector: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoryListView {
    pub total: usize,
    pub stories: Vec<SuccessStory>,
}

/// Router for marketing pages, navigation and success stories.
pub fn site_router(stories: Arc<StoryLibrary>) -> Router {
    Router::new()
        .route("/api/v1/stories", get(stories_handler))
        .route("/api/v1/pages/:slug", get(page_handler))
        .route("/api/v1/site/navigation", get(navigation_handler))
        .with_state(stories)
}

pub(crate) async fn stories_handler(
    State(library): State<Arc<StoryLibrary>>,
    Query(query): Query<StoryQuery>,
) -> Json<StoryListView> {
    let stories: Vec<SuccessStory> = library
        .in_sector(query.sector.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    Json(StoryListView {
        total: stories.len(),
        stories,
    })
}

pub(crate) async fn page_handler(
    Path(slug): Path<String>,
) -> Result<Json<MarketingPage>, AppError> {
    let slug =
        PageSlug::parse(&slug).ok_or_else(|| AppError::NotFound(format!("page `{slug}`")))?;
    Ok(Json(MarketingPage::for_slug(slug)))
}

pub(crate) async fn navigation_handler() -> Json<SiteNavigation> {
    Json(SiteNavigation::standard())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn fetch(uri: &str) -> (StatusCode, Value) {
        let library = Arc::new(StoryLibrary::standard().expect("valid stories"));
        let response = site_router(library)
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn lists_stories_in_curated_order() {
        let (status, payload) = fetch("/api/v1/stories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["total"], 5);
        assert_eq!(payload["stories"][0]["startup"], "KhetiLink");
    }

    #[tokio::test]
    async fn filters_stories_by_sector() {
        let (_, payload) = fetch("/api/v1/stories?sector=clean%20energy").await;
        assert_eq!(payload["total"], 1);
        assert_eq!(payload["stories"][0]["startup"], "VoltGrid");
    }

    #[tokio::test]
    async fn serves_known_pages() {
        let (status, payload) = fetch("/api/v1/pages/for-investors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["title"], "For investors");
    }

    #[tokio::test]
    async fn unknown_page_is_not_found() {
        let (status, payload) = fetch("/api/v1/pages/pricing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(payload["error"], "page `pricing` not found");
    }

    #[tokio::test]
    async fn navigation_includes_footer() {
        let (status, payload) = fetch("/api/v1/site/navigation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["footer"][0]["heading"], "Platform");
    }
}
