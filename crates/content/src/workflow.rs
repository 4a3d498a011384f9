//! Create/update/delete orchestration for news posts.

use lindholm_core::content::{validate_body, validate_media_count, validate_title};
use lindholm_core::error::CoreError;
use lindholm_core::media::{normalize_image, MediaError, NEWS_IMAGE_PX, NORMALIZED_CONTENT_TYPE};
use lindholm_core::types::DbId;
use lindholm_db::models::news::{CreateNewsPost, NewsPost, ReplaceNewsPost};
use lindholm_db::models::news_image::CreateNewsImage;
use lindholm_db::repositories::{NewsImageRepo, NewsRepo};
use lindholm_social::FeedClient;
use lindholm_storage::{ObjectStore, StorageError};
use lindholm_translate::{Translate, TranslateError};
use sqlx::PgPool;

use crate::bilingual::translate_pair;

/// One uploaded image plus its submitted position. The position is passed
/// explicitly rather than inferred from iteration order, so a skipped
/// file leaves a gap instead of renumbering its successors.
#[derive(Debug)]
pub struct MediaUpload {
    pub bytes: Vec<u8>,
    pub position: i32,
}

/// Input to [`ContentWorkflow::submit`] and [`ContentWorkflow::resubmit`].
#[derive(Debug)]
pub struct NewSubmission {
    pub title: String,
    pub body: String,
    pub media: Vec<MediaUpload>,
    pub publish_to_feed: bool,
}

/// Result of a successful submit/resubmit.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The persisted post, including the feed post URL when publishing
    /// succeeded.
    pub post: NewsPost,
    pub media_stored: usize,
    pub media_skipped: usize,
}

/// Errors that abort the workflow. Per-image and feed-publish failures
/// never appear here; they are logged and reflected in the outcome.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// Input rejected before any network call was made.
    #[error(transparent)]
    Invalid(CoreError),

    /// The translation provider failed; nothing was persisted.
    #[error("Translation failed: {0}")]
    Translation(#[from] TranslateError),

    /// A database statement on the post itself failed.
    #[error(transparent)]
    Persistence(#[from] sqlx::Error),

    /// A storage object could not be removed during delete.
    #[error("Storage delete failed for {key}: {source}")]
    Storage {
        key: String,
        #[source]
        source: StorageError,
    },

    /// The targeted post does not exist.
    #[error("News post {0} not found")]
    NotFound(DbId),
}

/// One image's normalize/upload/insert chain, for the fail-soft loop.
#[derive(Debug, thiserror::Error)]
enum MediaStepError {
    #[error("normalize: {0}")]
    Normalize(#[from] MediaError),
    #[error("store: {0}")]
    Store(#[from] StorageError),
    #[error("insert: {0}")]
    Insert(#[from] sqlx::Error),
}

/// Orchestrates the bilingual translate-and-persist pipeline.
pub struct ContentWorkflow<'a> {
    pool: &'a PgPool,
    translator: &'a dyn Translate,
    store: &'a dyn ObjectStore,
    feed: Option<&'a FeedClient>,
}

impl<'a> ContentWorkflow<'a> {
    pub fn new(
        pool: &'a PgPool,
        translator: &'a dyn Translate,
        store: &'a dyn ObjectStore,
        feed: Option<&'a FeedClient>,
    ) -> Self {
        Self {
            pool,
            translator,
            store,
            feed,
        }
    }

    /// Create a new bilingual post.
    pub async fn submit(
        &self,
        actor: DbId,
        input: &NewSubmission,
    ) -> Result<SubmissionOutcome, WorkflowError> {
        Self::validate(input)?;

        let title = translate_pair(self.translator, input.title.trim()).await?;
        let body = translate_pair(self.translator, input.body.trim()).await?;

        // The title's detection wins when title and body disagree; the
        // source system had no reconciliation either.
        let post = NewsRepo::create(
            self.pool,
            &CreateNewsPost {
                title_da: title.da,
                title_en: title.en,
                body_da: body.da,
                body_en: body.en,
                source_lang: title.source.as_str().to_string(),
                author_id: actor,
            },
        )
        .await?;

        tracing::info!(post_id = post.id, author_id = actor, "News post created");

        self.finish(actor, post, input).await
    }

    /// Re-submit an existing post. All four language fields are
    /// recomputed from the freshly submitted text; newly attached images
    /// are appended.
    pub async fn resubmit(
        &self,
        id: DbId,
        actor: DbId,
        input: &NewSubmission,
    ) -> Result<SubmissionOutcome, WorkflowError> {
        Self::validate(input)?;

        let title = translate_pair(self.translator, input.title.trim()).await?;
        let body = translate_pair(self.translator, input.body.trim()).await?;

        let post = NewsRepo::replace(
            self.pool,
            id,
            &ReplaceNewsPost {
                title_da: title.da,
                title_en: title.en,
                body_da: body.da,
                body_en: body.en,
                source_lang: title.source.as_str().to_string(),
            },
        )
        .await?
        .ok_or(WorkflowError::NotFound(id))?;

        tracing::info!(post_id = id, author_id = actor, "News post re-submitted");

        self.finish(actor, post, input).await
    }

    /// Delete a post, its image rows, and their storage objects.
    ///
    /// Order matters: objects first, then image rows, then the post row,
    /// so any failure leaves the remaining children enumerable for a
    /// retry instead of silently orphaning storage objects.
    pub async fn delete(&self, id: DbId) -> Result<(), WorkflowError> {
        let images = NewsImageRepo::list_by_post(self.pool, id).await?;

        for image in images {
            match self.store.delete(&image.storage_key).await {
                Ok(()) => {}
                // Already gone (e.g. an earlier partial delete); the row
                // still has to go.
                Err(StorageError::NotFound(_)) => {
                    tracing::warn!(
                        post_id = id,
                        key = %image.storage_key,
                        "Storage object already absent during delete"
                    );
                }
                Err(source) => {
                    return Err(WorkflowError::Storage {
                        key: image.storage_key,
                        source,
                    });
                }
            }
            NewsImageRepo::delete(self.pool, image.id).await?;
        }

        if !NewsRepo::delete(self.pool, id).await? {
            return Err(WorkflowError::NotFound(id));
        }

        tracing::info!(post_id = id, "News post deleted");
        Ok(())
    }

    fn validate(input: &NewSubmission) -> Result<(), WorkflowError> {
        validate_title(&input.title).map_err(WorkflowError::Invalid)?;
        validate_body(&input.body).map_err(WorkflowError::Invalid)?;
        validate_media_count(input.media.len()).map_err(WorkflowError::Invalid)?;
        Ok(())
    }

    /// Shared tail of submit/resubmit: media processing and the optional
    /// feed publish, both fail-soft.
    async fn finish(
        &self,
        actor: DbId,
        mut post: NewsPost,
        input: &NewSubmission,
    ) -> Result<SubmissionOutcome, WorkflowError> {
        let mut stored_keys = Vec::new();
        let mut media_skipped = 0;

        for upload in &input.media {
            match self.process_media(actor, post.id, upload).await {
                Ok(key) => stored_keys.push(key),
                Err(err) => {
                    media_skipped += 1;
                    tracing::warn!(
                        post_id = post.id,
                        position = upload.position,
                        error = %err,
                        "Image skipped"
                    );
                }
            }
        }

        if input.publish_to_feed {
            if let Some(url) = self.publish(&post, input, &stored_keys).await {
                // Best-effort as well: the post already exists, a lost
                // link must not fail the submit.
                match NewsRepo::set_feed_post_url(self.pool, post.id, &url).await {
                    Ok(Some(updated)) => post = updated,
                    Ok(None) => {}
                    Err(err) => {
                        tracing::warn!(post_id = post.id, error = %err, "Feed URL not recorded");
                    }
                }
            }
        }

        Ok(SubmissionOutcome {
            media_stored: stored_keys.len(),
            media_skipped,
            post,
        })
    }

    /// Normalize, upload, and record one image.
    async fn process_media(
        &self,
        actor: DbId,
        post_id: DbId,
        upload: &MediaUpload,
    ) -> Result<String, MediaStepError> {
        let jpeg = normalize_image(&upload.bytes, NEWS_IMAGE_PX)?;

        let key = format!("news/{actor}/{}.jpg", uuid::Uuid::new_v4());
        self.store
            .put(&key, jpeg, NORMALIZED_CONTENT_TYPE)
            .await?;

        NewsImageRepo::create(
            self.pool,
            &CreateNewsImage {
                news_id: post_id,
                storage_key: key.clone(),
                sort_order: upload.position,
            },
        )
        .await?;

        Ok(key)
    }

    /// Post to the social feed, returning the post URL on success.
    async fn publish(
        &self,
        post: &NewsPost,
        input: &NewSubmission,
        stored_keys: &[String],
    ) -> Option<String> {
        let Some(feed) = self.feed else {
            tracing::warn!(post_id = post.id, "Feed publish requested but not configured");
            return None;
        };

        let message = compose_feed_message(input.title.trim(), input.body.trim());
        let link = stored_keys.first().map(|key| self.store.public_url(key));

        match feed.publish(&message, link.as_deref()).await {
            Ok(url) => Some(url),
            Err(err) => {
                tracing::warn!(post_id = post.id, error = %err, "Feed publish failed");
                None
            }
        }
    }
}

/// Feed message: the submitted original title and body, blank-line
/// separated.
fn compose_feed_message(title: &str, body: &str) -> String {
    format!("{title}\n\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_message_is_title_blank_line_body() {
        assert_eq!(
            compose_feed_message("Ny kursusstart", "Vi har ledige pladser"),
            "Ny kursusstart\n\nVi har ledige pladser"
        );
    }

    #[test]
    fn validation_rejects_before_anything_else() {
        let input = NewSubmission {
            title: "  ".into(),
            body: "tekst".into(),
            media: vec![],
            publish_to_feed: false,
        };
        let err = ContentWorkflow::validate(&input).unwrap_err();
        assert!(matches!(err, WorkflowError::Invalid(CoreError::Validation(_))));
    }

    #[test]
    fn validation_caps_media_count() {
        let media = (0..11)
            .map(|position| MediaUpload {
                bytes: vec![],
                position,
            })
            .collect();
        let input = NewSubmission {
            title: "Titel".into(),
            body: "Tekst".into(),
            media,
            publish_to_feed: false,
        };
        assert!(ContentWorkflow::validate(&input).is_err());
    }
}
