use axum::Router;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::tags::{
    create_tag, delete_tag, edit_tag_form, list_tags, new_tag_form, show_tag, update_tag,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tags))
        .route("/new", get(new_tag_form).post(create_tag))
        .route("/{id}", get(show_tag))
        .route("/{id}/edit", get(edit_tag_form).post(update_tag))
        .route("/{id}/delete", post(delete_tag))
}
