use axum::extract::{Path, RawForm, State};
use axum::response::{Html, Redirect};
use tera::Context;
use url::form_urlencoded;

use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::presentation::AppState;
use crate::presentation::app_error::{AppError, AppResult};
use crate::presentation::flash::redirect_with_flash;
use crate::presentation::templates::render;
use crate::presentation::views::{PostView, TagView, UserView};

/// Post forms repeat the `tags` key once per checked checkbox, which the
/// urlencoded `Form` extractor cannot represent; the raw body is parsed
/// instead.
#[derive(Debug)]
pub(crate) struct PostForm {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) tag_ids: Vec<i64>,
}

pub(crate) fn parse_post_form(body: &[u8]) -> Result<PostForm, AppError> {
    let mut title = String::new();
    let mut content = String::new();
    let mut tag_ids = Vec::new();

    for (key, value) in form_urlencoded::parse(body) {
        match key.as_ref() {
            "title" => title = value.into_owned(),
            "content" => content = value.into_owned(),
            "tags" => {
                let id = value
                    .parse::<i64>()
                    .map_err(|_| AppError::BadRequest(format!("invalid tag id: {value}")))?;
                tag_ids.push(id);
            }
            _ => {}
        }
    }

    Ok(PostForm {
        title,
        content,
        tag_ids,
    })
}

pub(crate) async fn show_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Html<String>> {
    let details = state.service.post_details(post_id).await?;
    let tags: Vec<TagView> = details.tags.into_iter().map(TagView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::from(details.post));
    ctx.insert("author", &UserView::from(details.author));
    ctx.insert("tags", &tags);
    render(&state.templates, "posts/detail.html", &ctx)
}

pub(crate) async fn new_post_form(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let user = state.service.get_user(user_id).await?;
    let tags = state.service.list_tags().await?;
    let tags: Vec<TagView> = tags.into_iter().map(TagView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(user));
    ctx.insert("tags", &tags);
    render(&state.templates, "posts/new.html", &ctx)
}

pub(crate) async fn create_post(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    RawForm(body): RawForm,
) -> AppResult<Redirect> {
    let form = parse_post_form(&body)?;
    // 404 before touching the form when the author does not exist.
    state.service.get_user(user_id).await?;

    let post = state
        .service
        .create_post(
            user_id,
            CreatePostRequest {
                title: form.title,
                content: form.content,
                tag_ids: form.tag_ids,
            },
        )
        .await?;

    Ok(redirect_with_flash(
        &format!("/users/{user_id}"),
        &format!("Post '{}' added.", post.title),
    ))
}

pub(crate) async fn edit_post_form(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Html<String>> {
    let post = state.service.get_post(post_id).await?;
    let all_tags = state.service.list_tags().await?;
    let checked: Vec<i64> = state
        .service
        .tags_for_post(post_id)
        .await?
        .into_iter()
        .map(|tag| tag.id)
        .collect();
    let all_tags: Vec<TagView> = all_tags.into_iter().map(TagView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::from(post));
    ctx.insert("tags", &all_tags);
    ctx.insert("checked_tag_ids", &checked);
    render(&state.templates, "posts/edit.html", &ctx)
}

pub(crate) async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    RawForm(body): RawForm,
) -> AppResult<Redirect> {
    let form = parse_post_form(&body)?;
    let post = state
        .service
        .update_post(
            post_id,
            UpdatePostRequest {
                title: form.title,
                content: form.content,
                tag_ids: form.tag_ids,
            },
        )
        .await?;

    Ok(Redirect::to(&format!("/posts/{}", post.id)))
}

pub(crate) async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Redirect> {
    let post = state.service.delete_post(post_id).await?;

    Ok(redirect_with_flash(
        &format!("/users/{}", post.user_id),
        &format!("Post '{}' deleted.", post.title),
    ))
}

#[cfg(test)]
mod tests {
    use super::parse_post_form;

    #[test]
    fn parse_collects_repeated_tags_keys() {
        let body = b"title=My+Post&content=Body+text&tags=1&tags=3";
        let form = parse_post_form(body).expect("form must parse");

        assert_eq!(form.title, "My Post");
        assert_eq!(form.content, "Body text");
        assert_eq!(form.tag_ids, vec![1, 3]);
    }

    #[test]
    fn parse_accepts_missing_tags() {
        let body = b"title=T&content=C";
        let form = parse_post_form(body).expect("form must parse");
        assert!(form.tag_ids.is_empty());
    }

    #[test]
    fn parse_rejects_non_numeric_tag_id() {
        let body = b"title=T&content=C&tags=abc";
        assert!(parse_post_form(body).is_err());
    }

    #[test]
    fn parse_decodes_percent_escapes() {
        let body = b"title=Caf%C3%A9&content=100%25";
        let form = parse_post_form(body).expect("form must parse");
        assert_eq!(form.title, "Caf\u{e9}");
        assert_eq!(form.content, "100%");
    }
}
