//! Post creation page

use dioxus::prelude::*;
use post_form::{CategoryStatus, FormField};

use crate::components::{ErrorBanner, LoadingDots};
use crate::state::use_post_form;

const HEADING: &str = "Post creation form";
const SUBTITLE: &str = "Please kindly, fill out these form";
const SUBMIT_LABEL: &str = "Créer";
const SUBMITTING_LABEL: &str = "Création...";

/// Post creation form: title, content, category and dash-separated tags
#[component]
pub fn CreatePost() -> Element {
    let form = use_post_form();
    let state = form.snapshot();

    let is_loading = state.is_loading();
    let selected_category = state
        .form
        .category
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        main {
            class: "page",

            form {
                class: "post-form",
                onsubmit: {
                    let form = form.clone();
                    move |evt: FormEvent| {
                        evt.prevent_default();
                        form.submit();
                    }
                },

                h1 { class: "post-form__heading", "{HEADING}" }
                p { class: "post-form__subtitle", "{SUBTITLE}" }

                if let Some(notice) = state.error.clone() {
                    ErrorBanner {
                        notice,
                        on_retry: {
                            let form = form.clone();
                            move |_| form.retry()
                        },
                        on_dismiss: {
                            let form = form.clone();
                            move |_| form.dismiss_error()
                        }
                    }
                }

                if let Some(post) = &state.last_created {
                    div {
                        class: "post-form__created",
                        "Post created"
                        if let Some(id) = &post.id {
                            span { class: "post-form__created-id", " ({id})" }
                        }
                    }
                }

                input {
                    r#type: "text",
                    name: "title",
                    class: "post-form__input",
                    placeholder: "Title",
                    value: "{state.form.title}",
                    required: true,
                    oninput: {
                        let form = form.clone();
                        move |e: FormEvent| form.update(FormField::Title, e.value())
                    }
                }

                textarea {
                    name: "content",
                    class: "post-form__textarea",
                    placeholder: "Type the post content in here.",
                    rows: "6",
                    value: "{state.form.content}",
                    required: true,
                    oninput: {
                        let form = form.clone();
                        move |e: FormEvent| form.update(FormField::Content, e.value())
                    }
                }

                div {
                    class: "post-form__category",
                    select {
                        name: "category",
                        class: "post-form__select",
                        value: "{selected_category}",
                        disabled: state.categories.is_empty(),
                        onchange: {
                            let form = form.clone();
                            move |e: FormEvent| form.select_category(e.value())
                        },
                        option { value: "", "Select a category" }
                        optgroup {
                            label: "Categories",
                            for category in state.categories.iter() {
                                option {
                                    key: "{category.id}",
                                    value: "{category.id}",
                                    selected: category.id.as_str() == selected_category,
                                    "{category.label}"
                                }
                            }
                        }
                    }
                    if state.category_status == CategoryStatus::Loading {
                        LoadingDots { label: "Loading categories" }
                    }
                }

                input {
                    r#type: "text",
                    name: "tags",
                    class: "post-form__input",
                    placeholder: "Separate each tag with a dash (-)",
                    value: "{state.form.tags}",
                    oninput: {
                        let form = form.clone();
                        move |e: FormEvent| form.update(FormField::Tags, e.value())
                    }
                }

                button {
                    r#type: "submit",
                    class: "post-form__submit",
                    disabled: is_loading,
                    if is_loading {
                        "{SUBMITTING_LABEL}"
                    } else {
                        "{SUBMIT_LABEL}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keeps_original_copy() {
        assert_eq!(HEADING, "Post creation form");
        assert_eq!(SUBTITLE, "Please kindly, fill out these form");
        assert_eq!(SUBMIT_LABEL, "Créer");
        assert_ne!(SUBMITTING_LABEL, SUBMIT_LABEL);
    }
}
