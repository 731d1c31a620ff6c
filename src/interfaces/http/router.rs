//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AuditLogger, CardService, RoleService, UserService};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{
    AuditRepository, CardRepository, RoleRepository, UserRepository,
};
use crate::interfaces::http::common::{ErrorResponse, MessageResponse};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::metrics::{
    http_metrics_middleware, prometheus_metrics, MetricsState,
};
use crate::interfaces::http::modules::request_id::request_id_middleware;
use crate::interfaces::http::modules::{auth, cards, dashboard, health, roles, users};

/// Unified router state. Each handler extracts its own slice via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<CardService<CardRepository>>,
    pub users: Arc<UserService<UserRepository>>,
    pub roles: Arc<RoleService<RoleRepository>>,
    pub auth: AuthState,
    pub db: DatabaseConnection,
    pub started_at: Arc<Instant>,
}

impl AppState {
    /// Wire repositories, the audit sink and services on top of one store handle.
    pub fn new(db: DatabaseConnection, jwt_config: JwtConfig) -> Self {
        let audit = AuditLogger::new(Arc::new(AuditRepository::new(db.clone())));

        Self {
            cards: Arc::new(CardService::new(
                Arc::new(CardRepository::new(db.clone())),
                audit.clone(),
            )),
            users: Arc::new(UserService::new(
                Arc::new(UserRepository::new(db.clone())),
                jwt_config.clone(),
                audit.clone(),
            )),
            roles: Arc::new(RoleService::new(
                Arc::new(RoleRepository::new(db.clone())),
                audit,
            )),
            auth: AuthState { jwt_config },
            db,
            started_at: Arc::new(Instant::now()),
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for cards::CardHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            cards: Arc::clone(&s.cards),
        }
    }
}

impl FromRef<AppState> for auth::AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            users: Arc::clone(&s.users),
        }
    }
}

impl FromRef<AppState> for users::UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            users: Arc::clone(&s.users),
        }
    }
}

impl FromRef<AppState> for roles::RoleHandlerState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            roles: Arc::clone(&s.roles),
        }
    }
}

impl FromRef<AppState> for health::HealthState {
    fn from_ref(s: &AppState) -> Self {
        Self {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        auth::get_current_user,
        // Tarjetas
        cards::list_cards,
        cards::register_card,
        cards::use_card,
        cards::usage_history,
        // Usuarios
        users::list_users,
        users::create_user,
        users::update_user_role,
        // Roles
        roles::list_roles,
        roles::create_role,
        // Dashboard
        dashboard::list_families,
        dashboard::usage_series,
    ),
    components(
        schemas(
            // Common
            MessageResponse,
            ErrorResponse,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::RegisterRequest,
            auth::RegisterResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Tarjetas
            cards::CardDto,
            cards::RegisterCardRequest,
            cards::RegisterCardResponse,
            cards::UsageEventDto,
            // Usuarios
            users::UserDto,
            users::CreateUserRequest,
            users::CreateUserResponse,
            users::UpdateRoleRequest,
            // Roles
            roles::RoleDto,
            roles::CreateRoleRequest,
            roles::CreateRoleResponse,
            // Dashboard
            dashboard::FamilyDto,
            dashboard::UsageSeriesDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Registration, login (JWT), logout and current user"),
        (name = "Tarjetas", description = "Card registration, usage counting and history"),
        (name = "Usuarios", description = "User administration and role assignment"),
        (name = "Roles", description = "Role catalogue"),
        (name = "Dashboard", description = "Family catalogue and usage chart data"),
    ),
    info(
        title = "Tarjetas API",
        version = "1.0.0",
        description = "REST API for tracking card usage per product family and line",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Card, user and role routes. Mounted both at the root and under `/api`.
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/tarjetas", get(cards::list_cards).post(cards::register_card))
        .route("/tarjetas/{dmc}/historial", get(cards::usage_history))
        .route("/usar/{dmc}", post(cards::use_card))
        .route("/usuarios", get(users::list_users).post(users::create_user))
        .route("/usuarios/{id}/role", put(users::update_user_role))
        .route("/roles", get(roles::list_roles).post(roles::create_role))
}

/// Create the API router with all routes.
///
/// `/metrics` is only mounted when a Prometheus handle is supplied.
pub fn create_api_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Protected: only /me needs a token
        .route(
            "/me",
            get(auth::get_current_user).route_layer(middleware::from_fn_with_state(
                state.auth.clone(),
                auth_middleware,
            )),
        );

    let dashboard_routes = Router::new()
        .route("/familias", get(dashboard::list_families))
        .route("/uso", get(dashboard::usage_series));

    let api_routes = resource_routes()
        .nest("/auth", auth_routes)
        .nest("/dashboard", dashboard_routes);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Resources, un-prefixed and under /api
        .merge(resource_routes())
        .nest("/api", api_routes)
        .with_state(state);

    if let Some(handle) = metrics {
        router = router.route(
            "/metrics",
            get(prometheus_metrics).with_state(MetricsState { handle }),
        );
    }

    // Middleware
    router
        .layer(middleware::from_fn(http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
