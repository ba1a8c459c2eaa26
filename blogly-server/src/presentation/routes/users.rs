use axum::Router;
use axum::routing::{get, post};

use crate::presentation::AppState;
use crate::presentation::handlers::posts::{create_post, new_post_form};
use crate::presentation::handlers::users::{
    create_user, delete_user, edit_user_form, list_users, new_user_form, show_user, update_user,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/new", get(new_user_form).post(create_user))
        .route("/{id}", get(show_user))
        .route("/{id}/edit", get(edit_user_form).post(update_user))
        .route("/{id}/delete", post(delete_user))
        .route("/{id}/posts/new", get(new_post_form).post(create_post))
}
