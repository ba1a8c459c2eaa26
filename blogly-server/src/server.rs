use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::infrastructure::settings::Settings;
use crate::presentation::middleware::trace::apply_trace;
use crate::presentation::{AppState, handlers, routes};

pub(crate) async fn run_http(settings: &Settings, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);
    let app = apply_trace(app);

    let listener = TcpListener::bind(&settings.http_addr).await?;

    info!("HTTP server listening on {}", settings.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::homepage))
        .nest("/users", routes::users::router())
        .nest("/posts", routes::posts::router())
        .nest("/tags", routes::tags::router())
        .fallback(handlers::pages::not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::build_router;
    use crate::application::blogly_service::BloglyService;
    use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
    use crate::data::repositories::postgres::tag_repository::PostgresTagRepository;
    use crate::data::repositories::postgres::user_repository::PostgresUserRepository;
    use crate::presentation::AppState;
    use crate::presentation::templates::build_templates;

    // Lazy pool: no connection is made for routes that never reach the
    // database, which is all this test exercises.
    fn test_state() -> AppState {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/blogly_test")
            .expect("lazy pool must build");

        let service = BloglyService::new(
            PostgresUserRepository::new(pool.clone()),
            PostgresPostRepository::new(pool.clone()),
            PostgresTagRepository::new(pool),
        );
        let templates = build_templates(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
            .expect("templates must load");

        AppState::new(Arc::new(service), Arc::new(templates))
    }

    #[tokio::test]
    async fn unknown_route_renders_404_page() {
        let app = build_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-page")
                    .body(Body::empty())
                    .expect("request must build"),
            )
            .await
            .expect("router must respond");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
