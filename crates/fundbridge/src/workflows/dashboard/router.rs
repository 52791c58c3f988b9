use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};

use super::identity::HeaderIdentity;
use super::{select_dashboard, DashboardView};
use crate::config::IdentityConfig;

/// Router serving the dashboard for the identity forwarded by the auth gateway.
pub fn dashboard_router(identity: IdentityConfig) -> Router {
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler))
        .with_state(identity)
}

pub(crate) async fn dashboard_handler(
    State(identity): State<IdentityConfig>,
    headers: HeaderMap,
) -> Json<DashboardView> {
    let provider = HeaderIdentity::new(&headers, &identity.header);
    Json(select_dashboard(&provider))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    async fn fetch(request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = dashboard_router(IdentityConfig::default())
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn startup_identity_header_selects_startup_dashboard() {
        let request = Request::builder()
            .uri("/api/v1/dashboard")
            .header("x-decoded-identity", r#"{"name":"Asha","userType":"startup"}"#)
            .body(Body::empty())
            .expect("request builds");

        let (status, payload) = fetch(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["role"], "startup");
        assert_eq!(payload["displayName"], "Asha");
    }

    #[tokio::test]
    async fn malformed_header_still_renders_investor_dashboard() {
        let request = Request::builder()
            .uri("/api/v1/dashboard")
            .header("x-decoded-identity", "not-json")
            .body(Body::empty())
            .expect("request builds");

        let (status, payload) = fetch(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["role"], "investor");
        assert_eq!(payload["displayName"], "there");
    }

    #[tokio::test]
    async fn custom_header_name_is_honoured() {
        let config = IdentityConfig::new("X-Auth-Claims").expect("valid header");
        let request = Request::builder()
            .uri("/api/v1/dashboard")
            .header("x-auth-claims", r#"{"userType":"startup"}"#)
            .body(Body::empty())
            .expect("request builds");

        let response = dashboard_router(config)
            .oneshot(request)
            .await
            .expect("router responds");
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["role"], "startup");
    }
}
