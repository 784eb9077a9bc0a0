//! Composition root: wires ports into handlers and handlers into the router.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::HeaderValue;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http::{
    health_routes, participant_routes, session_routes, submission_routes, ParticipantHandlers,
    SessionHandlers, SubmissionHandlers,
};
use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgres::{
    PostgresParticipantDirectory, PostgresRestaurantCatalog, PostgresSessionReader,
    PostgresSessionRepository, PostgresSubmissionLedger,
};
use crate::application::{
    CheckSubmissionHandler, CloseSessionHandler, CreateSessionHandler, GetParticipantHandler,
    GetSessionHandler, ListSessionsHandler, ListSubmissionsHandler, LoginHandler, SessionLocks,
    SubmitRestaurantHandler,
};
use crate::config::{AppConfig, ServerConfig};
use crate::domain::resolution::ResolutionEngine;
use crate::ports::{
    ParticipantDirectory, RestaurantCatalog, SessionReader, SessionRepository, SubmissionLedger,
};

/// One implementation of every persistence port.
#[derive(Clone)]
pub struct Ports {
    pub participants: Arc<dyn ParticipantDirectory>,
    pub restaurants: Arc<dyn RestaurantCatalog>,
    pub sessions: Arc<dyn SessionRepository>,
    pub session_reader: Arc<dyn SessionReader>,
    pub submissions: Arc<dyn SubmissionLedger>,
}

impl Ports {
    /// All ports backed by one shared in-memory store.
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self {
            participants: Arc::new(store.clone()),
            restaurants: Arc::new(store.clone()),
            sessions: Arc::new(store.clone()),
            session_reader: Arc::new(store.clone()),
            submissions: Arc::new(store),
        }
    }

    /// All ports backed by one PostgreSQL pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            participants: Arc::new(PostgresParticipantDirectory::new(pool.clone())),
            restaurants: Arc::new(PostgresRestaurantCatalog::new(pool.clone())),
            sessions: Arc::new(PostgresSessionRepository::new(pool.clone())),
            session_reader: Arc::new(PostgresSessionReader::new(pool.clone())),
            submissions: Arc::new(PostgresSubmissionLedger::new(pool)),
        }
    }
}

/// Build the full HTTP application.
pub fn build_router(ports: Ports, config: &AppConfig) -> Router {
    let locks = Arc::new(SessionLocks::new());
    let engine = Arc::new(match config.sessions.resolution_seed {
        Some(seed) => {
            tracing::warn!(seed, "Result draws use a fixed seed");
            ResolutionEngine::seeded(seed)
        }
        None => ResolutionEngine::from_entropy(),
    });

    let session_handlers = SessionHandlers::new(
        Arc::new(CreateSessionHandler::new(
            ports.sessions.clone(),
            ports.participants.clone(),
        )),
        Arc::new(CloseSessionHandler::new(
            ports.sessions.clone(),
            ports.submissions.clone(),
            ports.restaurants.clone(),
            engine,
            locks.clone(),
        )),
        Arc::new(GetSessionHandler::new(ports.session_reader.clone())),
        Arc::new(ListSessionsHandler::new(ports.session_reader.clone())),
    );

    let submission_handlers = SubmissionHandlers::new(
        Arc::new(
            SubmitRestaurantHandler::new(
                ports.sessions.clone(),
                ports.participants.clone(),
                ports.restaurants.clone(),
                ports.submissions.clone(),
                locks,
            )
            .with_auto_register_participants(config.sessions.auto_register_participants),
        ),
        Arc::new(CheckSubmissionHandler::new(
            ports.participants.clone(),
            ports.restaurants.clone(),
            ports.submissions.clone(),
        )),
        Arc::new(ListSubmissionsHandler::new(ports.submissions.clone())),
    );

    let participant_handlers = ParticipantHandlers::new(
        Arc::new(LoginHandler::new(ports.participants.clone())),
        Arc::new(GetParticipantHandler::new(ports.participants)),
    );

    Router::new()
        .merge(health_routes())
        .merge(participant_routes(participant_handlers))
        .merge(session_routes(session_handlers))
        .merge(submission_routes(submission_handlers))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
}

/// Permissive CORS unless explicit origins are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
