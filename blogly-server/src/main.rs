use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::blogly_service::BloglyService;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use data::repositories::postgres::tag_repository::PostgresTagRepository;
use data::repositories::postgres::user_repository::PostgresUserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;
use presentation::templates::build_templates;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url, settings.db_max_connections).await?;
    run_migrations(&pool).await?;

    let service = BloglyService::new(
        PostgresUserRepository::new(pool.clone()),
        PostgresPostRepository::new(pool.clone()),
        PostgresTagRepository::new(pool),
    );
    let templates = build_templates(&settings.templates_dir)?;
    let state = AppState::new(Arc::new(service), Arc::new(templates));

    server::run_http(&settings, state).await
}
