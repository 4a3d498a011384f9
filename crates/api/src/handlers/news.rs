//! Handlers for the `/news` resource.
//!
//! Public listing/detail plus the editor-gated create/update/delete that
//! run through the bilingual content workflow. Create and update take
//! `multipart/form-data` (`title`, `body`, `publish` and up to ten
//! `images` parts) because image bytes travel with the text.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lindholm_content::{ContentWorkflow, MediaUpload, NewSubmission, SubmissionOutcome};
use lindholm_core::error::CoreError;
use lindholm_core::types::DbId;
use lindholm_db::models::news::NewsPost;
use lindholm_db::repositories::{NewsImageRepo, NewsRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::PageParams;
use crate::response::{DataResponse, Paged};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// A news post with its image URLs, as the frontend consumes it.
#[derive(Debug, Serialize)]
pub struct NewsPostResponse {
    #[serde(flatten)]
    pub post: NewsPost,
    pub images: Vec<NewsImageResponse>,
}

/// One image of a post, with the public URL derived from its storage key.
#[derive(Debug, Serialize)]
pub struct NewsImageResponse {
    pub id: DbId,
    pub url: String,
    pub sort_order: i32,
}

/// Result of a create/update, including how many images made it.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub post: NewsPostResponse,
    pub media_stored: usize,
    pub media_skipped: usize,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /news?page=&limit=
///
/// Public paginated listing, newest first.
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let (page, limit, offset) = params.resolve();

    let posts = NewsRepo::list(&state.pool, limit, offset).await?;
    let total = NewsRepo::count(&state.pool).await?;

    let mut data = Vec::with_capacity(posts.len());
    for post in posts {
        data.push(attach_images(&state, post).await?);
    }

    Ok(Json(Paged {
        data,
        total,
        page,
        limit,
    }))
}

/// GET /news/{id}
///
/// Public detail view.
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = NewsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "NewsPost",
                id,
            })
        })?;

    Ok(Json(DataResponse {
        data: attach_images(&state, post).await?,
    }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /news  (multipart)
///
/// Create a post through the content workflow.
pub async fn create_news(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let input = read_submission(multipart).await?;

    let workflow = build_workflow(&state);
    let outcome = workflow.submit(member.member_id, &input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: submit_response(&state, outcome).await?,
        }),
    ))
}

/// PUT /news/{id}  (multipart)
///
/// Re-submit a post: translation is re-run unconditionally and any new
/// images are appended.
pub async fn update_news(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let input = read_submission(multipart).await?;

    let workflow = build_workflow(&state);
    let outcome = workflow.resubmit(id, member.member_id, &input).await?;

    Ok(Json(DataResponse {
        data: submit_response(&state, outcome).await?,
    }))
}

/// DELETE /news/{id}
///
/// Remove the post, its image rows, and their storage objects.
pub async fn delete_news(
    RequireEditor(member): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let workflow = build_workflow(&state);
    workflow.delete(id).await?;

    tracing::info!(member_id = member.member_id, post_id = id, "News post removed");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_workflow(state: &AppState) -> ContentWorkflow<'_> {
    ContentWorkflow::new(
        &state.pool,
        state.translator.as_ref(),
        state.store.as_ref(),
        state.feed.as_deref(),
    )
}

/// Parse the multipart form into a workflow submission. Image parts get
/// their position from arrival order; the workflow keeps that position
/// even when an image later fails.
async fn read_submission(mut multipart: Multipart) -> AppResult<NewSubmission> {
    let mut title = String::new();
    let mut body = String::new();
    let mut publish_to_feed = false;
    let mut media = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("title") => title = field.text().await?,
            Some("body") => body = field.text().await?,
            Some("publish") => {
                publish_to_feed = field.text().await?.trim().eq_ignore_ascii_case("true");
            }
            Some("images") => {
                let position = media.len() as i32;
                media.push(MediaUpload {
                    bytes: field.bytes().await?.to_vec(),
                    position,
                });
            }
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unexpected form field '{}'",
                    other.unwrap_or("<unnamed>")
                )));
            }
        }
    }

    Ok(NewSubmission {
        title,
        body,
        media,
        publish_to_feed,
    })
}

async fn attach_images(state: &AppState, post: NewsPost) -> AppResult<NewsPostResponse> {
    let images = NewsImageRepo::list_by_post(&state.pool, post.id)
        .await?
        .into_iter()
        .map(|image| NewsImageResponse {
            id: image.id,
            url: state.store.public_url(&image.storage_key),
            sort_order: image.sort_order,
        })
        .collect();

    Ok(NewsPostResponse { post, images })
}

async fn submit_response(
    state: &AppState,
    outcome: SubmissionOutcome,
) -> AppResult<SubmitResponse> {
    Ok(SubmitResponse {
        post: attach_images(state, outcome.post).await?,
        media_stored: outcome.media_stored,
        media_skipped: outcome.media_skipped,
    })
}
