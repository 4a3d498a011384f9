//! The bilingual content workflow.
//!
//! Orchestrates create/update/delete of news posts: validates input,
//! derives the missing language variant through the translation client,
//! normalizes and stores attached images, persists the rows, and
//! optionally announces the post on the social feed.
//!
//! Failure policy: everything before the post row exists fails fast;
//! everything after it fails soft (the post is the operation's success
//! criterion). The one exception is the delete path, where a storage
//! failure is surfaced so the remaining child state stays enumerable for
//! a retry.

mod bilingual;
mod workflow;

pub use bilingual::{translate_pair, BilingualText};
pub use workflow::{
    ContentWorkflow, MediaUpload, NewSubmission, SubmissionOutcome, WorkflowError,
};
