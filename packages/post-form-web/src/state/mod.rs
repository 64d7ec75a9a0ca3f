//! Form state wiring between the controller and Dioxus signals

use std::rc::Rc;

use dioxus::prelude::*;
use post_form::{CategoryId, FormField, FormSnapshot, HttpPostApi, PostForm, TracingObserver};

use crate::config::api_config;

pub type FormController = PostForm<HttpPostApi, TracingObserver>;

/// Handle the page uses to read and drive the form
#[derive(Clone)]
pub struct PostFormHandle {
    controller: Rc<FormController>,
    snapshot: Signal<FormSnapshot>,
}

impl PostFormHandle {
    /// Latest published state
    pub fn snapshot(&self) -> FormSnapshot {
        self.snapshot.read().clone()
    }

    pub fn update(&self, field: FormField, value: String) {
        self.controller.update_field(field, value);
    }

    /// Apply a value from the category `select`; the placeholder option is empty.
    pub fn select_category(&self, value: String) {
        if value.is_empty() {
            self.controller.clear_category();
            return;
        }
        if let Err(e) = self.controller.select_category(CategoryId::from(value)) {
            tracing::warn!(error = %e, "Ignoring category selection");
        }
    }

    pub fn submit(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.submit().await;
        });
    }

    pub fn retry(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.retry().await;
        });
    }

    pub fn dismiss_error(&self) {
        self.controller.dismiss_error();
    }
}

/// Create the form controller for this component and keep a signal in sync with it.
///
/// Categories are requested once when the component first renders; the
/// controller is torn down when the component is dropped so late responses
/// are ignored.
pub fn use_post_form() -> PostFormHandle {
    let controller = use_hook(|| Rc::new(PostForm::with_tracing(HttpPostApi::new(api_config()))));
    let mut snapshot = use_signal(|| controller.snapshot());

    use_hook(|| {
        let mut updates = controller.subscribe();
        spawn(async move {
            while updates.changed().await.is_ok() {
                let latest = updates.borrow_and_update().clone();
                snapshot.set(latest);
            }
        });

        let controller = controller.clone();
        spawn(async move {
            controller.mount().await;
        });
    });

    use_drop({
        let controller = controller.clone();
        move || controller.teardown()
    });

    PostFormHandle {
        controller,
        snapshot,
    }
}
