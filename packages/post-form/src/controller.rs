//! The form controller.
//!
//! [`PostForm`] owns every piece of state the form needs and publishes it on
//! a `watch` channel. Each mutation replaces the published [`FormSnapshot`],
//! so a UI only has to redraw from the latest one.
//!
//! Submission lifecycle:
//!
//! ```text
//! Idle --submit()--> Submitting --ok--> Idle (form reset)
//!                               \--err-> Idle (error slot set, form kept)
//! ```
//!
//! Network calls race against [`PostForm::teardown`]; once torn down, late
//! results are dropped instead of being applied.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::client::PostApi;
use crate::error::ValidationError;
use crate::form::{FormField, FormState, PostSubmission};
use crate::observer::{Diagnostic, FormObserver, TracingObserver};
use crate::types::{Category, CategoryId, CreatedPost};

pub const CATEGORIES_FAILED_MESSAGE: &str = "Failed to load categories";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to create post. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryStatus {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Which operation filled the error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    Categories,
    Submission,
}

/// User-facing error shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub source: ErrorSource,
    pub message: String,
}

impl ErrorNotice {
    pub fn categories() -> Self {
        Self {
            source: ErrorSource::Categories,
            message: CATEGORIES_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn submission() -> Self {
        Self {
            source: ErrorSource::Submission,
            message: SUBMIT_FAILED_MESSAGE.to_string(),
        }
    }

    /// Whether retrying can do more than clear the banner.
    pub fn is_retryable(&self) -> bool {
        self.source == ErrorSource::Categories
    }
}

/// Consistent view of all form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    pub form: FormState,
    /// Most recent successful fetch, in server order
    pub categories: Vec<Category>,
    pub category_status: CategoryStatus,
    pub phase: SubmitPhase,
    pub error: Option<ErrorNotice>,
    /// Post from the last successful submit, until the form is edited or
    /// submitted again
    pub last_created: Option<CreatedPost>,
}

impl FormSnapshot {
    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}

/// What a call to [`PostForm::submit`] ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(CreatedPost),
    /// The request was made and failed; the detail went to the observer
    Failed(String),
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    /// Another submission is still running; nothing was sent
    AlreadyInFlight,
    /// The form was torn down before or during the request
    Discarded,
}

/// Post creation form controller.
pub struct PostForm<A, O = TracingObserver> {
    api: A,
    observer: O,
    state: watch::Sender<FormSnapshot>,
    mounted: AtomicBool,
    lifetime: CancellationToken,
}

impl<A: PostApi> PostForm<A, TracingObserver> {
    /// Controller that logs through `tracing`.
    pub fn with_tracing(api: A) -> Self {
        Self::new(api, TracingObserver)
    }
}

impl<A: PostApi, O: FormObserver> PostForm<A, O> {
    pub fn new(api: A, observer: O) -> Self {
        let (state, _) = watch::channel(FormSnapshot::default());
        Self {
            api,
            observer,
            state,
            mounted: AtomicBool::new(false),
            lifetime: CancellationToken::new(),
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.state.subscribe()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // =========================================================================
    // Field updates
    // =========================================================================

    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| {
            s.form.set(field, value);
            s.last_created = None;
        });
    }

    /// Update a field by its input name.
    pub fn update_named(&self, name: &str, value: impl Into<String>) -> Result<(), ValidationError> {
        let field: FormField = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Select one of the loaded categories.
    pub fn select_category(&self, id: CategoryId) -> Result<(), ValidationError> {
        let mut result = Ok(());
        self.state.send_if_modified(|s| {
            if s.categories.iter().any(|c| c.id == id) {
                s.form.category = Some(id);
                s.last_created = None;
                true
            } else {
                result = Err(ValidationError::UnknownCategory(id));
                false
            }
        });
        result
    }

    pub fn clear_category(&self) {
        self.state.send_if_modified(|s| {
            let created = s.last_created.take().is_some();
            s.form.category.take().is_some() || created
        });
    }

    // =========================================================================
    // Category loading
    // =========================================================================

    /// Load categories the first time the form is shown.
    ///
    /// Later calls do nothing; use [`retry`](Self::retry) or
    /// [`load_categories`](Self::load_categories) to fetch again.
    pub async fn mount(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return;
        }
        self.load_categories().await;
    }

    /// Fetch the category list, replacing whatever was loaded before.
    ///
    /// Returns whether the fetch succeeded.
    pub async fn load_categories(&self) -> bool {
        if self.lifetime.is_cancelled() {
            self.discard("load_categories");
            return false;
        }

        self.state
            .send_modify(|s| s.category_status = CategoryStatus::Loading);

        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => None,
            result = self.api.list_categories() => Some(result),
        };

        match result {
            None => {
                self.discard("load_categories");
                false
            }
            Some(Ok(categories)) => {
                let count = categories.len();
                self.state.send_modify(|s| {
                    let still_listed = s
                        .form
                        .category
                        .as_ref()
                        .map_or(true, |selected| categories.iter().any(|c| &c.id == selected));
                    if !still_listed {
                        s.form.category = None;
                    }
                    s.categories = categories;
                    s.category_status = CategoryStatus::Loaded;
                    if s.error.as_ref().is_some_and(|e| e.source == ErrorSource::Categories) {
                        s.error = None;
                    }
                });
                self.observer.record(&Diagnostic::CategoriesLoaded { count });
                true
            }
            Some(Err(e)) => {
                self.state.send_modify(|s| {
                    s.category_status = CategoryStatus::Failed;
                    s.error = Some(ErrorNotice::categories());
                });
                self.observer.record(&Diagnostic::CategoriesFailed {
                    error: e.to_string(),
                });
                false
            }
        }
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validate, transform and send the current form values.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.lifetime.is_cancelled() {
            self.discard("submit");
            return SubmitOutcome::Discarded;
        }

        let form = self.state.borrow().form.clone();
        if let Err(reason) = form.validate() {
            self.observer.record(&Diagnostic::SubmitRejected {
                reason: reason.to_string(),
            });
            return SubmitOutcome::Rejected(reason);
        }

        let started = self.state.send_if_modified(|s| {
            if s.phase == SubmitPhase::Submitting {
                return false;
            }
            s.phase = SubmitPhase::Submitting;
            s.error = None;
            s.last_created = None;
            true
        });
        if !started {
            self.observer.record(&Diagnostic::SubmitIgnored);
            return SubmitOutcome::AlreadyInFlight;
        }

        let submission = PostSubmission::from_form(&form);
        self.observer.record(&Diagnostic::SubmitStarted {
            title: submission.title.clone(),
        });

        let result = tokio::select! {
            biased;
            _ = self.lifetime.cancelled() => None,
            result = self.api.create_post(&submission) => Some(result),
        };

        match result {
            None => {
                self.discard("submit");
                SubmitOutcome::Discarded
            }
            Some(Ok(post)) => {
                let id = post.id.clone();
                self.state.send_modify(|s| {
                    s.phase = SubmitPhase::Idle;
                    s.form = FormState::default();
                    s.last_created = Some(post.clone());
                });
                self.observer.record(&Diagnostic::PostCreated { id });
                SubmitOutcome::Created(post)
            }
            Some(Err(e)) => {
                let error = e.to_string();
                self.state.send_modify(|s| {
                    s.phase = SubmitPhase::Idle;
                    s.error = Some(ErrorNotice::submission());
                });
                self.observer.record(&Diagnostic::SubmitFailed {
                    error: error.clone(),
                });
                SubmitOutcome::Failed(error)
            }
        }
    }

    // =========================================================================
    // Error slot
    // =========================================================================

    pub fn dismiss_error(&self) {
        self.state.send_if_modified(|s| s.error.take().is_some());
    }

    /// Clear the error slot and, for a category failure, fetch again.
    pub async fn retry(&self) {
        let mut cleared = None;
        self.state.send_if_modified(|s| {
            cleared = s.error.take();
            cleared.is_some()
        });

        if cleared.is_some_and(|notice| notice.is_retryable()) {
            self.load_categories().await;
        }
    }

    // =========================================================================
    // Lifetime
    // =========================================================================

    /// Stop applying results; in-flight requests are abandoned.
    pub fn teardown(&self) {
        self.lifetime.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    fn discard(&self, operation: &'static str) {
        self.observer.record(&Diagnostic::Discarded { operation });
    }
}
