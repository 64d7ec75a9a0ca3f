//! Testing utilities including mock implementations.
//!
//! Useful for exercising the form controller without a running backend.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};
use tokio::sync::Notify;

use crate::client::PostApi;
use crate::error::{ApiError, Result};
use crate::form::PostSubmission;
use crate::observer::{Diagnostic, FormObserver};
use crate::types::{Category, CreatedPost};

/// Canned reply for one mock call.
#[derive(Debug, Clone)]
pub enum MockReply<T> {
    Ok(T),
    /// Respond as if the server returned this non-2xx status
    Status(u16),
}

impl<T> MockReply<T> {
    fn into_result(self) -> Result<T> {
        match self {
            MockReply::Ok(value) => Ok(value),
            MockReply::Status(status) => Err(ApiError::Status {
                status,
                body: format!("mock status {status}"),
            }),
        }
    }
}

/// Mock `PostApi` for testing.
///
/// Replies are queued per operation and consumed in order. When the queue is
/// empty, `list_categories` returns an empty list and `create_post` echoes
/// the submission back with a generated id.
///
/// # Example
///
/// ```rust
/// use post_form::testing::MockPostApi;
/// use post_form::Category;
///
/// let api = MockPostApi::new()
///     .with_categories(vec![Category::new("c1", "News")])
///     .with_post_status(500);
/// ```
#[derive(Default, Clone)]
pub struct MockPostApi {
    category_replies: Arc<RwLock<VecDeque<MockReply<Vec<Category>>>>>,
    post_replies: Arc<RwLock<VecDeque<MockReply<CreatedPost>>>>,
    category_calls: Arc<RwLock<usize>>,
    submissions: Arc<RwLock<Vec<PostSubmission>>>,
    category_gate: Option<Arc<Notify>>,
    post_gate: Option<Arc<Notify>>,
}

impl MockPostApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful category list.
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.push_categories(MockReply::Ok(categories));
        self
    }

    /// Queue a failed category fetch.
    pub fn with_categories_status(self, status: u16) -> Self {
        self.push_categories(MockReply::Status(status));
        self
    }

    /// Queue a successful create-post reply.
    pub fn with_post(self, post: CreatedPost) -> Self {
        self.push_post(MockReply::Ok(post));
        self
    }

    /// Queue a failed create-post reply.
    pub fn with_post_status(self, status: u16) -> Self {
        self.push_post(MockReply::Status(status));
        self
    }

    /// Hold every category fetch until the gate is notified.
    pub fn with_category_gate(mut self, gate: Arc<Notify>) -> Self {
        self.category_gate = Some(gate);
        self
    }

    /// Hold every create-post call until the gate is notified.
    pub fn with_post_gate(mut self, gate: Arc<Notify>) -> Self {
        self.post_gate = Some(gate);
        self
    }

    pub fn push_categories(&self, reply: MockReply<Vec<Category>>) {
        self.category_replies.write().unwrap().push_back(reply);
    }

    pub fn push_post(&self, reply: MockReply<CreatedPost>) {
        self.post_replies.write().unwrap().push_back(reply);
    }

    /// Number of times `list_categories` was called.
    pub fn category_call_count(&self) -> usize {
        *self.category_calls.read().unwrap()
    }

    /// Every submission received by `create_post`, in order.
    pub fn submissions(&self) -> Vec<PostSubmission> {
        self.submissions.read().unwrap().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.read().unwrap().len()
    }
}

#[async_trait(?Send)]
impl PostApi for MockPostApi {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        *self.category_calls.write().unwrap() += 1;

        if let Some(gate) = &self.category_gate {
            gate.notified().await;
        }

        let reply = self.category_replies.write().unwrap().pop_front();
        reply.unwrap_or(MockReply::Ok(Vec::new())).into_result()
    }

    async fn create_post(&self, submission: &PostSubmission) -> Result<CreatedPost> {
        let number = {
            let mut submissions = self.submissions.write().unwrap();
            submissions.push(submission.clone());
            submissions.len()
        };

        if let Some(gate) = &self.post_gate {
            gate.notified().await;
        }

        let reply = self.post_replies.write().unwrap().pop_front();
        reply
            .unwrap_or_else(|| {
                MockReply::Ok(CreatedPost {
                    id: Some(format!("post-{number}")),
                    title: submission.title.clone(),
                    content: submission.content.clone(),
                    tags: submission.tags.clone(),
                    extra: Default::default(),
                })
            })
            .into_result()
    }
}

/// Observer that keeps every diagnostic for later assertions.
#[derive(Default, Clone)]
pub struct RecordingObserver {
    recorded: Arc<RwLock<Vec<Diagnostic>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.recorded.read().unwrap().clone()
    }

    /// Whether any recorded diagnostic matches the predicate.
    pub fn contains(&self, predicate: impl Fn(&Diagnostic) -> bool) -> bool {
        self.recorded.read().unwrap().iter().any(predicate)
    }

    pub fn clear(&self) {
        self.recorded.write().unwrap().clear();
    }
}

impl FormObserver for RecordingObserver {
    fn record(&self, diagnostic: &Diagnostic) {
        self.recorded.write().unwrap().push(diagnostic.clone());
    }
}
