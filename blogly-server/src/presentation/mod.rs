use std::sync::Arc;

use tera::Tera;

use crate::application::blogly_service::BloglyService;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::tag_repository::PostgresTagRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;

pub(crate) mod app_error;
pub(crate) mod flash;
pub(crate) mod handlers;
pub(crate) mod middleware;
pub(crate) mod routes;
pub(crate) mod templates;
pub(crate) mod views;

pub(crate) type Service =
    BloglyService<PostgresUserRepository, PostgresPostRepository, PostgresTagRepository>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) service: Arc<Service>,
    pub(crate) templates: Arc<Tera>,
}

impl AppState {
    pub(crate) fn new(service: Arc<Service>, templates: Arc<Tera>) -> Self {
        Self { service, templates }
    }
}
