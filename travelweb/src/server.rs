//! Web server module for the travel log.
//!
//! Starts the database bootstrap as a background task, then binds the HTTP
//! listener and begins serving immediately — the listener never waits on
//! the database. Handlers that need the database must go through
//! `AppState::db`, which reports not-ready until the bootstrap's single
//! write completes. Serves the index page, the travel-entry preview, and a
//! health probe that exposes the connection state.
//!
use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use travelentry::entry::TravelEntry;

use crate::{
    config::Config,
    db::{self, DbState},
    html::{INDEX_PAGE, entry_page},
};

/// Application state shared with every handler.
pub(crate) struct AppState {
    /// Database handle slot, filled once by the bootstrap task
    pub(crate) db: DbState,
}

impl AppState {
    /// Record the outcome of the connection bootstrap. Success fills the
    /// handle slot once; failure is logged and absorbed — the slot stays
    /// empty and the listener keeps serving.
    fn finish_bootstrap(&self, result: Result<mongodb::Database, db::DbError>) {
        match result {
            Ok(database) => {
                if self.db.install(database) {
                    info!("Database connected ({})", db::DB_NAME);
                } else {
                    warn!("Database handle already installed, dropping duplicate");
                }
            }
            Err(err) => warn!("Database connection failed: {err}"),
        }
    }
}

/// Start the bootstrap task and the HTTP listener.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState { db: DbState::new() });

    // Connection bootstrap overlaps listener startup; its outcome is
    // observed only through the state cell. Failure is logged and
    // absorbed — the listener keeps serving either way.
    let boot_state = Arc::clone(&state);
    let conn_str = config.conn_str.clone();
    tokio::spawn(async move {
        let result = db::connect(&conn_str).await;
        boot_state.finish_bootstrap(result);
    });

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Server started on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Split out from `run` so tests can drive it without
/// binding a socket or reaching a database.
fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/entry", get(render_entry))
        .route("/health", get(health))
        .with_state(state)
}

/// Display the landing page
async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Render a travel entry from its property set in the query string
async fn render_entry(Query(entry): Query<TravelEntry>) -> Html<String> {
    Html(entry_page(&entry.render()))
}

/// Health probe response body
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database_connected: bool,
}

/// GET /health - report process liveness and database readiness
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database_connected: state.db.is_connected(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        create_router(Arc::new(AppState { db: DbState::new() }))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn failed_bootstrap_leaves_state_disconnected() {
        let state = AppState { db: DbState::new() };

        state.finish_bootstrap(Err(db::DbError::EmptyConnectionString));
        assert!(!state.db.is_connected());

        // the listener keeps serving with the slot still empty
        let response = create_router(Arc::new(state))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn successful_bootstrap_installs_handle_once() {
        let options = mongodb::options::ClientOptions::builder().build();
        let client = mongodb::Client::with_options(options).unwrap();
        let state = AppState { db: DbState::new() };

        state.finish_bootstrap(Ok(client.database(db::DB_NAME)));
        assert!(state.db.is_connected());

        // a late duplicate completion is absorbed, the first handle stays
        state.finish_bootstrap(Ok(client.database("other")));
        assert_eq!(state.db.database().unwrap().name(), db::DB_NAME);
    }

    #[tokio::test]
    async fn health_reports_disconnected_without_database() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database_connected"], false);
    }

    #[tokio::test]
    async fn index_page_serves_without_database() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Travel Log"));
    }

    #[tokio::test]
    async fn entry_renders_query_properties_in_order() {
        let uri = "/entry?author=Jane&place=Lisbon&lat=38.7N%2C9.1W&link=http%3A%2F%2Fx";
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;

        let expected = [
            "Author:", "Jane", "Place:", "Lisbon", "Lat + Long:", "38.7N,9.1W", "Link:",
            "http://x",
        ];
        let mut pos = 0;
        for needle in expected {
            let found = body[pos..]
                .find(needle)
                .unwrap_or_else(|| panic!("missing {needle:?} after byte {pos}"));
            pos += found + needle.len();
        }
    }

    #[tokio::test]
    async fn entry_renders_with_no_properties() {
        let response = test_router()
            .oneshot(Request::builder().uri("/entry").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("travel-entry"));
        assert!(body.contains("Lat + Long:"));
    }
}
