//! Field values, validation and the submission transform.

use serde::Serialize;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::CategoryId;

/// Separator between tags in the raw tags input.
pub const TAG_SEPARATOR: char = '-';

/// In-progress values of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub title: String,
    pub content: String,
    pub category: Option<CategoryId>,
    /// Raw dash-delimited tags, exactly as typed
    pub tags: String,
}

/// Settable fields of [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Content,
    Category,
    Tags,
}

impl FormField {
    /// Name of the matching HTML input.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Content => "content",
            FormField::Category => "category",
            FormField::Tags => "tags",
        }
    }

    pub fn variants() -> &'static [FormField] {
        &[
            FormField::Title,
            FormField::Content,
            FormField::Category,
            FormField::Tags,
        ]
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FormField::variants()
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| ValidationError::UnknownField(name.to_string()))
    }
}

impl FormState {
    /// Set a field. No validation happens here.
    ///
    /// An empty value for [`FormField::Category`] clears the selection.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Content => self.content = value,
            FormField::Category => {
                self.category = if value.is_empty() {
                    None
                } else {
                    Some(CategoryId::from(value))
                }
            }
            FormField::Tags => self.tags = value,
        }
    }

    /// Title and content must be non-empty, the same check as the inputs'
    /// `required` attribute. Whitespace counts as a value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.content.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }

    pub fn is_pristine(&self) -> bool {
        *self == FormState::default()
    }
}

/// Split a raw tags string on dashes.
///
/// Tokens are trimmed and empty tokens dropped, so an empty input yields no
/// tags rather than a single blank one.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Body sent to the Post Storage Service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSubmission {
    pub title: String,
    pub content: String,
    /// Selected category id, sent under the server's field name
    pub categories: Option<CategoryId>,
    pub tags: Vec<String>,
    /// Never filled in by the form
    pub author: Option<String>,
}

impl PostSubmission {
    /// Build the payload from the current form values.
    pub fn from_form(form: &FormState) -> Self {
        Self {
            title: form.title.clone(),
            content: form.content.clone(),
            categories: form.category.clone(),
            tags: parse_tags(&form.tags),
            author: None,
        }
    }
}
