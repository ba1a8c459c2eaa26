use axum::Router;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{
    delete_post, edit_post_form, show_post, update_post,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(show_post))
        .route("/{id}/edit", get(edit_post_form).post(update_post))
        .route("/{id}/delete", post(delete_post))
}
