use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;
use serde_json::json;
use viability::calculator::{calculator_router, CalculatorService, DocumentSink};

use crate::infra::AppState;

pub(crate) const CALCULATOR_PATH: &str = "/is-my-startup-viable-calculator";

/// The domain router plus operational endpoints and the two navigable views.
pub(crate) fn with_site_routes<D>(service: Arc<CalculatorService<D>>) -> Router
where
    D: DocumentSink + 'static,
{
    let views = Router::new()
        .route("/", get(home_endpoint))
        .route(CALCULATOR_PATH, get(calculator_view_endpoint::<D>))
        .with_state(service.clone());

    calculator_router(service)
        .merge(views)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

#[derive(Debug, Serialize)]
pub(crate) struct NavLinkView {
    pub(crate) label: &'static str,
    pub(crate) path: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ArticleView {
    pub(crate) published: &'static str,
    pub(crate) title: &'static str,
    pub(crate) path: &'static str,
    pub(crate) highlights: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HomeView {
    pub(crate) heading: &'static str,
    pub(crate) intro: &'static str,
    pub(crate) nav: Vec<NavLinkView>,
    pub(crate) articles: Vec<ArticleView>,
}

fn nav_links() -> Vec<NavLinkView> {
    vec![
        NavLinkView {
            label: "Blog",
            path: "/",
        },
        NavLinkView {
            label: "Calculator: Is My Startup Viable?",
            path: CALCULATOR_PATH,
        },
    ]
}

/// Listing view: the blog index the site opens on.
pub(crate) async fn home_endpoint() -> Json<HomeView> {
    Json(HomeView {
        heading: "Brent Sullivan's Blog",
        intro: "I'm a startup founder interested in business ideation, customer development \
                and scaling, concentrating on VC-backable scale-ups since 2021 (mostly fintech \
                and SaaS).",
        nav: nav_links(),
        articles: vec![ArticleView {
            published: "Aug 4, 2023",
            title: "Calculator: Is My Startup Viable?",
            path: CALCULATOR_PATH,
            highlights: vec![
                "Yesterday, my co-founder and I decided to walk away from our \
                 revenue-generating startup.",
                "After analyzing our target audience, business model, and product, it was \
                 painfully obvious we were headed in the wrong direction.",
                "Our \"ah-ha\" moment came from Jason Cohen's writing on whether the problem \
                 you solve can sustain a business.",
            ],
        }],
    })
}

/// Calculator view: the full view model the form renders from.
pub(crate) async fn calculator_view_endpoint<D>(
    axum::extract::State(service): axum::extract::State<Arc<CalculatorService<D>>>,
) -> impl IntoResponse
where
    D: DocumentSink + 'static,
{
    Json(service.overview())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::RecordingDocumentSink;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn site() -> (Router, Arc<CalculatorService<RecordingDocumentSink>>) {
        let sink = Arc::new(RecordingDocumentSink::default());
        let service = Arc::new(
            CalculatorService::new(sink, "Startup_Details.pdf").expect("presets validate"),
        );
        (with_site_routes(service.clone()), service)
    }

    async fn get_json(router: Router, path: &str) -> serde_json::Value {
        let response = router
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn home_view_lists_the_calculator_article() {
        let (router, _) = site();

        let payload = get_json(router, "/").await;

        assert_eq!(payload.get("heading"), Some(&json!("Brent Sullivan's Blog")));
        let articles = payload
            .get("articles")
            .and_then(serde_json::Value::as_array)
            .expect("articles array");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].get("path"), Some(&json!(CALCULATOR_PATH)));
    }

    #[tokio::test]
    async fn calculator_view_reflects_loaded_state() {
        let (router, service) = site();
        service.load_preset("WP Engine").expect("preset exists");

        let payload = get_json(router, CALCULATOR_PATH).await;

        assert_eq!(
            payload.pointer("/identity/name"),
            Some(&json!("WP Engine"))
        );
        assert_eq!(payload.pointer("/readout/score"), Some(&json!(4.0)));
        assert_eq!(
            payload.pointer("/readout/tier_class"),
            Some(&json!("bg-green-400"))
        );
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let (router, _) = site();

        let payload = get_json(router, "/health").await;

        assert_eq!(payload.get("status"), Some(&json!("ok")));
    }
}
