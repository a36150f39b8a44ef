// HTTP layer: routing, handlers, middleware, error mapping

pub mod errors;
pub mod handlers;
pub mod middleware;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use self::handlers::{auth as auth_handlers, employees};

/// Builds the application router.
///
/// The employee routes sit behind the bearer-token gate; whether the
/// gate actually enforces anything is decided by `AUTH_REQUIRED`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let employee_routes = Router::new()
        .route(
            "/employees",
            post(employees::create_employee).get(employees::list_employees),
        )
        .route("/employees/search", get(employees::search_employees))
        .route(
            "/employees/avg-salary",
            get(employees::avg_salary_by_department),
        )
        .route(
            "/employees/:employee_id",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .route("/", get(auth_handlers::root))
        .route("/auth/login", post(auth_handlers::login))
        .merge(employee_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
