//! Route definitions.

use axum::Router;

use crate::AppState;

pub mod expenses;
pub mod health;
pub mod stats;
pub mod summaries;

/// Creates the router with every page and the health check.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(expenses::routes())
        .merge(stats::routes())
        .merge(summaries::routes())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, Response, header::CONTENT_TYPE},
    };
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tally_shared::{ReplayCodec, SheetConfig};
    use tally_sheets::InMemoryRowStore;
    use tower::ServiceExt;

    use crate::{AppState, create_router};

    pub fn sheet_config() -> SheetConfig {
        SheetConfig {
            token: "test-token".to_string(),
            project: "budget".to_string(),
            tab: "expenses".to_string(),
            user: "u1".to_string(),
            base_url: "http://localhost".to_string(),
            summaries_tab: "summaries".to_string(),
        }
    }

    pub fn codec() -> ReplayCodec {
        ReplayCodec::new("route-test-secret", Duration::minutes(10))
    }

    pub fn app(store: Arc<InMemoryRowStore>) -> Router {
        create_router(AppState::new(store, &sheet_config(), codec()))
    }

    pub async fn get(app: Router, uri: &str) -> Response<Body> {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(app: Router, uri: &str, form: &str) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    pub async fn body_text(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}
