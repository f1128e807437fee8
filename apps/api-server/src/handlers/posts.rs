//! Post resource handlers.

use actix_web::{HttpResponse, web};

use posts_core::domain::Post;
use posts_shared::dto::{CreatedPostResponse, PostForm, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        title: post.title.clone(),
        body: post.body.clone(),
        date: post.pub_date.clone(),
    }
}

/// Form extraction result; decoding errors surface only when the form is read.
type FormInput = Result<web::Form<PostForm>, actix_web::Error>;

/// Split a form into (title, body, date), rejecting an undecodable form or
/// missing required fields.
fn required_fields(form: FormInput) -> AppResult<(String, String, String)> {
    let form = form
        .map_err(|e| AppError::BadRequest(format!("Invalid form: {}", e)))?
        .into_inner();

    match form {
        PostForm {
            title: Some(title),
            body,
            date: Some(date),
        } => Ok((title, body.unwrap_or_default(), date)),
        form => Err(AppError::BadRequest(format!(
            "Missing form field(s): {}",
            form.missing_fields().join(", ")
        ))),
    }
}

async fn find_post(state: &AppState, id: String) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id.clone())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    form: FormInput,
) -> AppResult<HttpResponse> {
    let (title, body, date) = required_fields(form)?;
    let post = Post::new(title, body, date);

    let mut session = state.posts.session();
    session.add(post.clone());
    session.commit().await?;

    tracing::info!(post_uuid = %post.uuid, "Post created");

    Ok(HttpResponse::Created().json(CreatedPostResponse {
        post: to_response(&post),
        uuid: post.uuid,
    }))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// PUT /posts/{id}
///
/// The lookup happens before the form is checked, so an unknown id is a 404
/// even when the request carries no form at all.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: FormInput,
) -> AppResult<HttpResponse> {
    let mut post = find_post(&state, path.into_inner()).await?;
    let (title, body, date) = required_fields(form)?;
    post.update(title, body, date);

    let mut session = state.posts.session();
    session.add(post.clone());
    session.commit().await?;

    tracing::info!(post_uuid = %post.uuid, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;
    let uuid = post.uuid.clone();

    let mut session = state.posts.session();
    session.delete(post);
    session.commit().await?;

    tracing::info!(post_uuid = %uuid, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
