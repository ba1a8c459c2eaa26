use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tera::Context;
use validator::Validate;

use crate::domain::user::{CreateUserRequest, UpdateUserRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::flash::{FlashParams, redirect_with_flash};
use crate::presentation::templates::render;
use crate::presentation::views::{PostView, UserView};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct UserForm {
    #[serde(rename = "first-name")]
    #[validate(length(min = 1, max = 50))]
    pub(crate) first_name: String,
    #[serde(rename = "last-name")]
    #[validate(length(min = 1, max = 50))]
    pub(crate) last_name: String,
    #[serde(rename = "profile-image")]
    pub(crate) profile_image: Option<String>,
}

pub(crate) async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let users = state.service.list_users().await?;
    let users: Vec<UserView> = users.into_iter().map(UserView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("users", &users);
    ctx.insert("flash", &params.flash);
    render(&state.templates, "users/list.html", &ctx)
}

pub(crate) async fn new_user_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state.templates, "users/new.html", &Context::new())
}

pub(crate) async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> AppResult<Redirect> {
    form.validate()?;
    let user = state
        .service
        .create_user(CreateUserRequest {
            first_name: form.first_name,
            last_name: form.last_name,
            image_url: form.profile_image,
        })
        .await?;

    Ok(redirect_with_flash(
        "/users",
        &format!("User {} added.", user.full_name()),
    ))
}

pub(crate) async fn show_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let details = state.service.user_details(user_id).await?;
    let user = UserView::from(details.user);
    let posts: Vec<PostView> = details.posts.into_iter().map(PostView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("posts", &posts);
    ctx.insert("flash", &params.flash);
    render(&state.templates, "users/detail.html", &ctx)
}

pub(crate) async fn edit_user_form(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let user = state.service.get_user(user_id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    render(&state.templates, "users/edit.html", &ctx)
}

pub(crate) async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<UserForm>,
) -> AppResult<Redirect> {
    form.validate()?;
    let user = state
        .service
        .update_user(
            user_id,
            UpdateUserRequest {
                first_name: form.first_name,
                last_name: form.last_name,
                image_url: form.profile_image,
            },
        )
        .await?;

    Ok(redirect_with_flash(
        "/users",
        &format!("User {} edited.", user.full_name()),
    ))
}

pub(crate) async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Redirect> {
    // Flash wording needs the name, so resolve the user before the delete.
    let user = state.service.get_user(user_id).await?;
    state.service.delete_user(user_id).await?;

    Ok(redirect_with_flash(
        "/users",
        &format!("User {} deleted.", user.full_name()),
    ))
}
