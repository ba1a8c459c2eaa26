use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tera::Context;

use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::templates::render;
use crate::presentation::views::PostView;

/// The homepage shows the five most recent posts.
const HOMEPAGE_POST_LIMIT: i64 = 5;

pub(crate) async fn homepage(State(state): State<AppState>) -> AppResult<Html<String>> {
    let posts = state.service.list_posts_recent(HOMEPAGE_POST_LIMIT).await?;
    let posts: Vec<PostView> = posts.into_iter().map(PostView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("posts", &posts);
    render(&state.templates, "homepage.html", &ctx)
}

pub(crate) async fn not_found(State(state): State<AppState>) -> Response {
    let body = match render(&state.templates, "404.html", &Context::new()) {
        Ok(html) => html,
        Err(err) => return err.into_response(),
    };
    (StatusCode::NOT_FOUND, body).into_response()
}
