use std::any::Any;

use axum::{
    http::StatusCode,
    middleware::map_response_with_state,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ProblemDto,
    server::{
        controller::{accommodation, user},
        error::{AppError, InternalServerError, Problem},
        middleware::problem::render_problem,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Lodging API", description = "Owner-scoped accommodation management"),
    modifiers(&SecurityAddon),
    components(schemas(ProblemDto)),
    tags(
        (name = "accommodation", description = "Accommodations and their locations"),
        (name = "user", description = "Authenticated user")
    )
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by every operation.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// API routes with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            accommodation::list_accommodations,
            accommodation::create_accommodation
        ))
        .routes(routes!(
            accommodation::get_accommodation,
            accommodation::update_accommodation,
            accommodation::delete_accommodation
        ))
        .routes(routes!(accommodation::book_accommodation))
        .routes(routes!(user::get_current_user))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .fallback(fallback)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Complete application with problem rendering and request tracing.
pub fn app(state: AppState) -> Router {
    with_middleware(router(), state)
}

/// Wraps `router` in the layers shared by every route.
///
/// Panics are caught inside `render_problem` so they still produce a problem body.
pub fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(map_response_with_state(state.clone(), render_problem))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> AppError {
    AppError::NotFound("Route not found.".to_string())
}

async fn method_not_allowed() -> Problem {
    Problem::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "MethodNotAllowed",
        "Method not allowed.",
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    InternalServerError(format!("Handler panicked: {}", message)).into_response()
}
