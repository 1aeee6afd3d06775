use {
    auction::{AuctionError, AuctionHouse, Authority},
    axum::{
        Router,
        extract::{DefaultBodyLimit, Request},
        http::{HeaderMap, StatusCode},
        middleware::{self, Next},
        response::{IntoResponse, Json, Response},
    },
    serde::{Deserialize, Serialize},
    std::{borrow::Cow, sync::Arc, time::Instant},
    tower_http::{cors::CorsLayer, trace::TraceLayer},
};

mod get_catalog;
mod get_franchises;
mod get_lot;
mod get_outcomes;
mod get_session;
mod post_bid;
mod post_claim;
mod post_end;
mod post_purse;
mod post_release;
mod post_roster;
mod post_sale;
mod post_skip;
mod post_start;
mod post_unsold;

/// Centralized application state shared across all API handlers.
pub struct AppState {
    pub house: Arc<AuctionHouse>,
    pub admin_secret: String,
}

impl AppState {
    /// Administrator authority is a capability derived per request from the
    /// shared secret header; the core never sees credentials.
    pub fn authority(&self, headers: &HeaderMap) -> Authority {
        match headers.get("x-admin-secret") {
            Some(secret) if secret.as_bytes() == self.admin_secret.as_bytes() => Authority::Admin,
            _ => Authority::Participant,
        }
    }
}

/// Middleware that tracks request metrics using axum's MatchedPath.
async fn with_matched_path_metric(req: Request, next: Next) -> Response {
    let metrics = ApiMetrics::instance(observe::metrics::get_storage_registry()).unwrap();

    let method = req.method().as_str();
    let matched_path = req
        .extensions()
        .get::<axum::extract::MatchedPath>()
        .map(|path| path.as_str())
        .unwrap_or("unknown");
    let label = format!("{method} {matched_path}");

    let timer = Instant::now();
    let response = next.run(req).await;
    let status = response.status();

    metrics.on_request_completed(&label, status, timer);
    if status.is_client_error() || status.is_server_error() {
        metrics
            .requests_rejected
            .with_label_values(&[status.as_str()])
            .inc();
    }

    response
}

const MAX_JSON_BODY_PAYLOAD: usize = 1024 * 16;
/// Roster uploads are whole CSV files and get a higher limit.
const MAX_ROSTER_PAYLOAD: usize = 1024 * 1024 * 4;

pub fn handle_all_routes(house: Arc<AuctionHouse>, admin_secret: String) -> Router {
    let state = Arc::new(AppState {
        house,
        admin_secret,
    });

    let api_router = Router::new()
        .route(
            "/v1/franchises",
            axum::routing::get(get_franchises::get_franchises_handler),
        )
        .route(
            "/v1/franchises/{name}/claim",
            axum::routing::post(post_claim::post_claim_handler),
        )
        .route(
            "/v1/franchises/{name}/release",
            axum::routing::post(post_release::post_release_handler),
        )
        .route(
            "/v1/franchises/{name}/purse",
            axum::routing::post(post_purse::post_purse_handler),
        )
        .route(
            "/v1/catalog",
            axum::routing::get(get_catalog::get_catalog_handler),
        )
        .route(
            "/v1/roster",
            axum::routing::post(post_roster::post_roster_handler)
                .layer(DefaultBodyLimit::max(MAX_ROSTER_PAYLOAD)),
        )
        .route(
            "/v1/session",
            axum::routing::get(get_session::get_session_handler),
        )
        .route("/v1/lot", axum::routing::get(get_lot::get_lot_handler))
        .route(
            "/v1/outcomes",
            axum::routing::get(get_outcomes::get_outcomes_handler),
        )
        .route(
            "/v1/auction/start",
            axum::routing::post(post_start::post_start_handler),
        )
        .route(
            "/v1/auction/bid",
            axum::routing::post(post_bid::post_bid_handler),
        )
        .route(
            "/v1/auction/sale",
            axum::routing::post(post_sale::post_sale_handler),
        )
        .route(
            "/v1/auction/unsold",
            axum::routing::post(post_unsold::post_unsold_handler),
        )
        .route(
            "/v1/auction/skip",
            axum::routing::post(post_skip::post_skip_handler),
        )
        .route(
            "/v1/auction/end",
            axum::routing::post(post_end::post_end_handler),
        )
        .with_state(state)
        .layer(middleware::from_fn(with_matched_path_metric));

    finalize_router(api_router)
}

/// Applies cors, body limits, log tracing and the metrics route.
fn finalize_router(api_router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(vec![
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(vec![
            axum::http::header::ORIGIN,
            axum::http::header::CONTENT_TYPE,
            // HTTP/2 requires lowercase header names
            axum::http::HeaderName::from_static("x-admin-secret"),
        ]);

    api_router
        .merge(observe::metrics::handle_metrics())
        .layer(DefaultBodyLimit::max(MAX_JSON_BODY_PAYLOAD))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[derive(prometheus_metric_storage::MetricStorage, Clone, Debug)]
#[metric(subsystem = "api")]
struct ApiMetrics {
    /// Number of completed API requests.
    #[metric(labels("method", "status_code"))]
    requests_complete: prometheus::IntCounterVec,

    /// Number of rejected API requests.
    #[metric(labels("status_code"))]
    requests_rejected: prometheus::IntCounterVec,

    /// Execution time for each API request.
    #[metric(labels("method"), buckets(0.1, 0.5, 1, 2, 4, 6, 8, 10))]
    requests_duration_seconds: prometheus::HistogramVec,
}

impl ApiMetrics {
    fn on_request_completed(&self, method: &str, status: StatusCode, timer: Instant) {
        self.requests_complete
            .with_label_values(&[method, status.as_str()])
            .inc();
        self.requests_duration_seconds
            .with_label_values(&[method])
            .observe(timer.elapsed().as_secs_f64());
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    pub error_type: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

pub fn error(error_type: &'static str, description: impl AsRef<str>) -> Json<Error> {
    Json(Error {
        error_type: error_type.into(),
        description: Cow::Owned(description.as_ref().to_owned()),
    })
}

/// Newtype wrapper for AuctionError to allow an IntoResponse implementation
/// (orphan rules prevent implementing it on the external type directly).
pub(crate) struct AuctionErrorWrapper(pub(crate) AuctionError);

impl IntoResponse for AuctionErrorWrapper {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            AuctionError::AlreadyStarted => (StatusCode::BAD_REQUEST, "AlreadyStarted"),
            AuctionError::AlreadyClaimed => (StatusCode::BAD_REQUEST, "AlreadyClaimed"),
            AuctionError::NotStarted => (StatusCode::BAD_REQUEST, "NotStarted"),
            AuctionError::NoClaimant => (StatusCode::BAD_REQUEST, "NoClaimant"),
            AuctionError::NoActivePlayer => (StatusCode::BAD_REQUEST, "NoActivePlayer"),
            AuctionError::InvalidAmount => (StatusCode::BAD_REQUEST, "InvalidAmount"),
            AuctionError::BidTooLow { .. } => (StatusCode::BAD_REQUEST, "BidTooLow"),
            AuctionError::InsufficientPurse => (StatusCode::BAD_REQUEST, "InsufficientPurse"),
            AuctionError::NoBid => (StatusCode::BAD_REQUEST, "NoBid"),
            AuctionError::EmptyCatalog => (StatusCode::BAD_REQUEST, "EmptyCatalog"),
            AuctionError::NotAuthorized => (StatusCode::UNAUTHORIZED, "NotAuthorized"),
            AuctionError::InvalidFranchise => (StatusCode::NOT_FOUND, "InvalidFranchise"),
            AuctionError::InvalidPlayer => (StatusCode::NOT_FOUND, "InvalidPlayer"),
        };
        (status, error(error_type, self.0.to_string())).into_response()
    }
}

impl From<AuctionError> for AuctionErrorWrapper {
    fn from(err: AuctionError) -> Self {
        Self(err)
    }
}

#[cfg(test)]
pub async fn response_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[cfg(test)]
pub mod test_util {
    use {super::*, model::Crore};

    /// A state with two franchises, one loaded player (tier 1, base 200
    /// lakh) and the secret "s3cret".
    pub fn app_state() -> Arc<AppState> {
        let house = AuctionHouse::new([("X".into(), Crore(100.)), ("Y".into(), Crore(100.))]);
        house
            .reload_catalog(Authority::Admin, vec![model::PlayerRecord {
                id: model::PlayerId(1),
                tier: 1,
                first_name: "Only".to_string(),
                surname: "Player".to_string(),
                base_price: model::Lakh(200.),
                ..Default::default()
            }])
            .unwrap();
        Arc::new(AppState {
            house: Arc::new(house),
            admin_secret: "s3cret".to_string(),
        })
    }

    pub fn admin_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-admin-secret", "s3cret".parse().unwrap());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::{test_util::*, *};

    #[test]
    fn authority_requires_exact_secret() {
        let state = app_state();
        assert_eq!(state.authority(&admin_headers()), Authority::Admin);

        let mut wrong = HeaderMap::new();
        wrong.insert("x-admin-secret", "guess".parse().unwrap());
        assert_eq!(state.authority(&wrong), Authority::Participant);
        assert_eq!(state.authority(&HeaderMap::new()), Authority::Participant);
    }

    #[tokio::test]
    async fn all_routes_are_mounted() {
        use {
            axum::{body::Body, http::Request},
            tower::ServiceExt,
        };

        let state = app_state();
        let router = handle_all_routes(state.house.clone(), state.admin_secret.clone());

        for path in [
            "/v1/franchises",
            "/v1/catalog",
            "/v1/session",
            "/v1/outcomes",
            "/v1/lot",
        ] {
            let response = router
                .clone()
                .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        }

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/v1/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn error_reply_carries_type_and_description() {
        let response = AuctionErrorWrapper(AuctionError::NotAuthorized).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = response_body(response).await;
        let error: Error = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error_type, "NotAuthorized");
        assert!(!error.description.is_empty());
    }
}
