//! Diagnostics sink injected into the form controller.
//!
//! The controller reports what happened (including the underlying error
//! text the user never sees) through a [`FormObserver`]. Production code logs
//! via `tracing`; tests swap in [`RecordingObserver`](crate::testing::RecordingObserver)
//! and assert on the recorded values.

/// Something worth logging about the form's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    CategoriesLoaded { count: usize },
    CategoriesFailed { error: String },
    SubmitStarted { title: String },
    PostCreated { id: Option<String> },
    SubmitFailed { error: String },
    SubmitRejected { reason: String },
    /// Submit called while another submission was in flight
    SubmitIgnored,
    /// A result arrived after teardown and was dropped
    Discarded { operation: &'static str },
}

pub trait FormObserver {
    fn record(&self, diagnostic: &Diagnostic);
}

impl<O: FormObserver + ?Sized> FormObserver for std::rc::Rc<O> {
    fn record(&self, diagnostic: &Diagnostic) {
        (**self).record(diagnostic)
    }
}

impl<O: FormObserver + ?Sized> FormObserver for std::sync::Arc<O> {
    fn record(&self, diagnostic: &Diagnostic) {
        (**self).record(diagnostic)
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FormObserver for TracingObserver {
    fn record(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::CategoriesLoaded { count } => {
                tracing::info!(count, "Categories loaded");
            }
            Diagnostic::CategoriesFailed { error } => {
                tracing::error!(error = %error, "Failed to load categories");
            }
            Diagnostic::SubmitStarted { title } => {
                tracing::info!(title = %title, "Submitting post");
            }
            Diagnostic::PostCreated { id } => {
                tracing::info!(id = ?id, "Post created");
            }
            Diagnostic::SubmitFailed { error } => {
                tracing::error!(error = %error, "Failed to create post");
            }
            Diagnostic::SubmitRejected { reason } => {
                tracing::warn!(reason = %reason, "Submission rejected");
            }
            Diagnostic::SubmitIgnored => {
                tracing::debug!("Submission already in flight, ignoring");
            }
            Diagnostic::Discarded { operation } => {
                tracing::debug!(operation, "Form torn down, discarding result");
            }
        }
    }
}
