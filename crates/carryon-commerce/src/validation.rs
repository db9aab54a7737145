//! Form validation for the contact, review and login forms.
//!
//! Fields are checked one at a time while the shopper types
//! ([`validate_field`]) and all together on submit ([`validate_form`]).

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

/// Message for a required field left blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";

/// Login message for a malformed or blank email address.
pub const LOGIN_INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Login message for a blank password.
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required.";

/// Shown after a contact form passes validation.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";

/// Shown after a review form passes validation.
pub const REVIEW_SUCCESS_MESSAGE: &str = "Your review has been submitted successfully!";

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
}

/// `something@domain.tld`, with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_some_and(|re| re.is_match(value))
}

/// How a field's value is checked beyond the required rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
}

/// One input on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub kind: FieldKind,
}

impl<'a> Field<'a> {
    /// A required field.
    pub fn required(name: &'a str, value: &'a str, kind: FieldKind) -> Self {
        Self {
            name,
            value,
            required: true,
            kind,
        }
    }

    /// An optional field.
    pub fn optional(name: &'a str, value: &'a str, kind: FieldKind) -> Self {
        Self {
            name,
            value,
            required: false,
            kind,
        }
    }
}

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a single field, the way it is checked while typing.
///
/// A blank required field reports [`REQUIRED_MESSAGE`]. A non-blank email
/// field that doesn't look like an address reports
/// [`INVALID_EMAIL_MESSAGE`]. Optional blank fields always pass.
///
/// Only the blank check trims; the email pattern sees the raw value, so
/// surrounding whitespace makes an address invalid.
pub fn validate_field(field: &Field<'_>) -> Option<FieldError> {
    if field.value.trim().is_empty() {
        return field
            .required
            .then(|| FieldError::new(field.name, REQUIRED_MESSAGE));
    }
    email_error(field)
}

fn email_error(field: &Field<'_>) -> Option<FieldError> {
    (field.kind == FieldKind::Email && !is_valid_email(field.value))
        .then(|| FieldError::new(field.name, INVALID_EMAIL_MESSAGE))
}

/// Check a single field the way submit does: the required rule first, then
/// the email rule, with the later message winning. A blank required email
/// therefore reports [`INVALID_EMAIL_MESSAGE`].
pub fn validate_field_on_submit(field: &Field<'_>) -> Option<FieldError> {
    let blank = field.value.trim().is_empty();
    if blank && !field.required {
        return None;
    }
    email_error(field).or_else(|| blank.then(|| FieldError::new(field.name, REQUIRED_MESSAGE)))
}

/// Check every field, in order, reporting every failing field with one
/// message each (see [`validate_field_on_submit`]).
pub fn validate_form(fields: &[Field<'_>]) -> Result<(), CommerceError> {
    let errors: Vec<FieldError> = fields
        .iter()
        .filter_map(validate_field_on_submit)
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(errors = errors.len(), "form rejected");
        Err(CommerceError::Validation(errors))
    }
}

/// "Get in touch" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("name", &self.name, FieldKind::Text),
            Field::required("email", &self.email, FieldKind::Email),
            Field::required("message", &self.message, FieldKind::Text),
        ]
    }

    /// Validate and return the confirmation message.
    pub fn submit(&self) -> Result<&'static str, CommerceError> {
        validate_form(&self.fields())?;
        tracing::info!(email = %self.email.trim(), "contact message accepted");
        Ok(CONTACT_SUCCESS_MESSAGE)
    }
}

/// Product review form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewForm {
    pub name: String,
    pub email: String,
    pub review: String,
}

impl ReviewForm {
    pub fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("name", &self.name, FieldKind::Text),
            Field::required("email", &self.email, FieldKind::Email),
            Field::required("review", &self.review, FieldKind::Text),
        ]
    }

    /// Validate and return the confirmation message.
    pub fn submit(&self) -> Result<&'static str, CommerceError> {
        validate_form(&self.fields())?;
        tracing::info!(email = %self.email.trim(), "review accepted");
        Ok(REVIEW_SUCCESS_MESSAGE)
    }
}

/// Sign-in form. Only the shape of the input is checked; there is no
/// account backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("email", &self.email, FieldKind::Email),
            Field::required("password", &self.password, FieldKind::Password),
        ]
    }

    /// First failing field, if any. The email pattern runs first, on the
    /// raw value, so a blank email reports [`LOGIN_INVALID_EMAIL_MESSAGE`].
    pub fn first_error(&self) -> Option<FieldError> {
        if !is_valid_email(&self.email) {
            return Some(FieldError::new("email", LOGIN_INVALID_EMAIL_MESSAGE));
        }
        self.password
            .trim()
            .is_empty()
            .then(|| FieldError::new("password", PASSWORD_REQUIRED_MESSAGE))
    }

    pub fn validate(&self) -> Result<(), CommerceError> {
        match self.first_error() {
            Some(error) => Err(CommerceError::Validation(vec![error])),
            None => Ok(()),
        }
    }
}
