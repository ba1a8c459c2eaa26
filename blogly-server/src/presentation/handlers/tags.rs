use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tera::Context;
use validator::Validate;

use crate::domain::tag::{CreateTagRequest, UpdateTagRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;
use crate::presentation::flash::{FlashParams, redirect_with_flash};
use crate::presentation::templates::render;
use crate::presentation::views::{PostView, TagView};

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct TagForm {
    #[validate(length(min = 1))]
    pub(crate) name: String,
}

pub(crate) async fn list_tags(
    State(state): State<AppState>,
    Query(params): Query<FlashParams>,
) -> AppResult<Html<String>> {
    let tags = state.service.list_tags().await?;
    let tags: Vec<TagView> = tags.into_iter().map(TagView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("tags", &tags);
    ctx.insert("flash", &params.flash);
    render(&state.templates, "tags/list.html", &ctx)
}

pub(crate) async fn show_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
) -> AppResult<Html<String>> {
    let details = state.service.tag_details(tag_id).await?;
    let posts: Vec<PostView> = details.posts.into_iter().map(PostView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("tag", &TagView::from(details.tag));
    ctx.insert("posts", &posts);
    render(&state.templates, "tags/detail.html", &ctx)
}

pub(crate) async fn new_tag_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state.templates, "tags/new.html", &Context::new())
}

pub(crate) async fn create_tag(
    State(state): State<AppState>,
    Form(form): Form<TagForm>,
) -> AppResult<Redirect> {
    form.validate()?;
    let tag = state
        .service
        .create_tag(CreateTagRequest { name: form.name })
        .await?;

    Ok(redirect_with_flash(
        "/tags",
        &format!("Tag {} was created.", tag.name),
    ))
}

pub(crate) async fn edit_tag_form(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
) -> AppResult<Html<String>> {
    let tag = state.service.get_tag(tag_id).await?;

    let mut ctx = Context::new();
    ctx.insert("tag", &TagView::from(tag));
    render(&state.templates, "tags/edit.html", &ctx)
}

pub(crate) async fn update_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
    Form(form): Form<TagForm>,
) -> AppResult<Redirect> {
    form.validate()?;
    let original = state.service.get_tag(tag_id).await?;
    let updated = state
        .service
        .update_tag(tag_id, UpdateTagRequest { name: form.name })
        .await?;

    Ok(redirect_with_flash(
        "/tags",
        &format!(
            "Tag {} was successfully changed to {}.",
            original.name, updated.name
        ),
    ))
}

pub(crate) async fn delete_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
) -> AppResult<Redirect> {
    let tag = state.service.delete_tag(tag_id).await?;

    Ok(redirect_with_flash(
        "/tags",
        &format!("Tag '{}' deleted.", tag.name),
    ))
}
