//! Headless post creation form.
//!
//! Owns the state behind a "create a post" form: the field values, the
//! category list fetched from the Category Directory Service, a single shared
//! error slot and the submission lifecycle against the Post Storage Service.
//! Rendering lives elsewhere; a UI subscribes to [`PostForm::subscribe`] and
//! redraws from each [`FormSnapshot`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use post_form::{ApiConfig, FormField, HttpPostApi, PostForm, SubmitOutcome, TracingObserver};
//!
//! let api = HttpPostApi::new(ApiConfig::from_env()?);
//! let form = PostForm::new(api, TracingObserver);
//!
//! form.mount().await;
//! form.update_field(FormField::Title, "Hello");
//! form.update_field(FormField::Content, "First post");
//! form.update_field(FormField::Tags, "intro-rust");
//!
//! match form.submit().await {
//!     SubmitOutcome::Created(post) => println!("created {:?}", post.id),
//!     other => println!("not created: {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`form`] - Field values, validation and the submission transform
//! - [`controller`] - The form controller and its state machine
//! - [`client`] - `PostApi` trait and the reqwest implementation
//! - [`observer`] - Injectable diagnostics sink
//! - [`testing`] - Mock API and recording observer

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod observer;
pub mod testing;
pub mod types;

pub use client::{HttpPostApi, PostApi};
pub use config::ApiConfig;
pub use controller::{
    CategoryStatus, ErrorNotice, ErrorSource, FormSnapshot, PostForm, SubmitOutcome, SubmitPhase,
    CATEGORIES_FAILED_MESSAGE, SUBMIT_FAILED_MESSAGE,
};
pub use error::{ApiError, ConfigError, Result, ValidationError};
pub use form::{parse_tags, FormField, FormState, PostSubmission};
pub use observer::{Diagnostic, FormObserver, TracingObserver};
pub use types::{Category, CategoryId, CreatedPost};
