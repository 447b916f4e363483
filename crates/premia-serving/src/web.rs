//! Local web surface: the prediction form page and its JSON API.
//!
//! One page, served from embedded assets, plus two JSON endpoints. The
//! page posts the six form values to `/api/predict` and renders the
//! formatted result card; `/api/model` feeds the static info panel with
//! artifact metadata.

use crate::config::AppConfig;
use crate::display;
use crate::error::{ServingError, ServingResult};
use crate::facade::{PredictionResult, Predictor};
use crate::request::PredictionRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// The index HTML page, served as-is. All assets load via the `/static/`
/// routes; result rendering happens client-side from the JSON API.
const INDEX_HTML: &str = include_str!("../templates/app.html");

/// Raw CSS, included at compile time.
const STYLE_CSS: &str = include_str!("../templates/style.css");

/// Shared application state for the axum handlers.
///
/// Holds only the prediction façade; the artifact behind it is immutable,
/// so no locking is involved.
#[derive(Debug)]
pub struct AppState {
    /// The façade every predict request goes through.
    pub predictor: Predictor,
}

/// JSON body returned by `POST /api/predict`.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Model point estimate in dollars.
    pub point: f64,

    /// Lower bound of the display band.
    pub lower: f64,

    /// Upper bound of the display band.
    pub upper: f64,

    /// Ready-to-render strings for the result card.
    pub formatted: FormattedResult,
}

/// Currency-formatted rendering of a [`PredictionResult`].
#[derive(Debug, Serialize)]
pub struct FormattedResult {
    /// Point estimate with cents (`$12,345.68`).
    pub point: String,

    /// Whole-dollar band (`$9,877 – $14,815`).
    pub range: String,
}

impl From<PredictionResult> for PredictResponse {
    fn from(result: PredictionResult) -> Self {
        let (point, range) = display::result_lines(&result);
        Self {
            point: result.point,
            lower: result.lower,
            upper: result.upper,
            formatted: FormattedResult { point, range },
        }
    }
}

/// JSON body returned by `GET /api/model`.
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    /// Human-readable model name.
    pub name: String,

    /// One-line description of the producing pipeline.
    pub description: String,

    /// Regressor family (`linear`, `tree_ensemble`).
    pub family: &'static str,

    /// Artifact format version.
    pub format_version: u32,

    /// Input columns the model expects, in schema order.
    pub feature_names: Vec<String>,

    /// Offline evaluation metrics recorded at export time.
    pub metrics: HashMap<String, f64>,
}

/// JSON error envelope with its mapped status code.
///
/// Client-side failures (domain violations, schema mismatches) map to 422,
/// everything else to 500. The body is `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<ServingError> for ApiError {
    fn from(err: ServingError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Build the application router.
///
/// Routes:
/// - `GET /` -- the prediction form page
/// - `GET /static/style.css` -- stylesheet
/// - `POST /api/predict` -- run one prediction
/// - `GET /api/model` -- artifact metadata for the info panel
pub fn router(predictor: Predictor) -> Router {
    let state = Arc::new(AppState { predictor });
    Router::new()
        .route("/", get(index_handler))
        .route("/static/style.css", get(css_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/model", get(model_handler))
        .with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: &AppConfig, predictor: Predictor) -> ServingResult<()> {
    config.validate()?;
    let app = router(predictor);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServingError::server(format!("failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Serving prediction form");
    axum::serve(listener, app)
        .await
        .map_err(|e| ServingError::server(e.to_string()))
}

/// Serves the prediction form page.
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Serves the stylesheet with an explicit content type.
async fn css_handler() -> ([(&'static str, &'static str); 1], &'static str) {
    ([("content-type", "text/css; charset=utf-8")], STYLE_CSS)
}

/// Runs one prediction for the posted request.
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictResponse>, ApiError> {
    let result = state.predictor.predict(&request)?;
    Ok(Json(PredictResponse::from(result)))
}

/// Returns artifact metadata for the info panel.
async fn model_handler(State(state): State<Arc<AppState>>) -> Json<ModelInfo> {
    let artifact = state.predictor.artifact();
    Json(ModelInfo {
        name: artifact.metadata.name.clone(),
        description: artifact.metadata.description.clone(),
        family: artifact.regressor.family(),
        format_version: artifact.format_version,
        feature_names: artifact.feature_names().map(str::to_string).collect(),
        metrics: artifact.metadata.metrics.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;
    use http_body_util::BodyExt;
    use premia_model::demo;
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(Predictor::new(Arc::new(demo::insurance_demo())))
    }

    #[tokio::test]
    async fn index_serves_the_form_page() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let page = String::from_utf8(body.to_vec()).unwrap();
        assert!(page.contains("Insurance Charges Predictor"));
        assert!(page.contains("/api/predict"));
    }

    #[tokio::test]
    async fn stylesheet_has_css_content_type() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/css; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn api_predict_returns_formatted_result() {
        let body = serde_json::json!({
            "age": 30,
            "bmi": 25.0,
            "children": 0,
            "sex": "male",
            "smoker": "no",
            "region": "northwest",
        });

        let resp = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/predict")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let point = payload["point"].as_f64().unwrap();
        let lower = payload["lower"].as_f64().unwrap();
        let upper = payload["upper"].as_f64().unwrap();
        assert!(point.is_finite() && point > 0.0);
        assert!((lower - point * 0.8).abs() < 1e-9);
        assert!((upper - point * 1.2).abs() < 1e-9);

        let formatted_point = payload["formatted"]["point"].as_str().unwrap();
        let formatted_range = payload["formatted"]["range"].as_str().unwrap();
        assert!(formatted_point.starts_with('$'));
        assert!(formatted_range.contains(" – "));
    }

    #[tokio::test]
    async fn api_predict_rejects_out_of_domain_input() {
        let body = serde_json::json!({
            "age": 150,
            "bmi": 25.0,
            "children": 0,
            "sex": "male",
            "smoker": "no",
            "region": "northwest",
        });

        let resp = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/predict")
                    .header("content-type", "application/json")
                    .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 422);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let message = payload["error"].as_str().unwrap();
        assert!(message.contains("age"));
    }

    #[tokio::test]
    async fn api_model_returns_artifact_metadata() {
        let resp = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/model")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(payload["name"], "insurance-charges-gbdt");
        assert_eq!(payload["family"], "tree_ensemble");
        assert_eq!(payload["format_version"], 1);
        let features: Vec<&str> = payload["feature_names"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            features,
            vec!["age", "sex", "bmi", "children", "smoker", "region", "index"]
        );
    }
}
