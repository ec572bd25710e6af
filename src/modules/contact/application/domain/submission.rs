use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// Fields and rules
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

const NAME_MIN_LEN: usize = 2;
const SUBJECT_MIN_LEN: usize = 5;
const MESSAGE_MIN_LEN: usize = 10;
const TLD_MIN_LEN: usize = 2;

/// Form length: UTF-16 code units, the unit browser-side validation counts.
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// A dotted host name whose last label is at least two letters. No bare hosts, no IP literals.
fn is_valid_email(value: &str) -> bool {
    let options = Options::default()
        .with_required_tld()
        .without_domain_literal();
    match EmailAddress::parse_with_options(value, options) {
        Ok(address) => address.domain().rsplit_once('.').is_some_and(|(_, tld)| {
            tld.len() >= TLD_MIN_LEN && tld.chars().all(|c| c.is_ascii_alphabetic())
        }),
        Err(_) => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Every field that failed, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Contact form has {} invalid field(s)", .0.len())]
pub struct ContactValidationError(pub Vec<FieldError>);

impl ContactValidationError {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has(&self, field: ContactField) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

/// Where a submission stands from the visitor's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Success,
    Error,
}

//
// ──────────────────────────────────────────────────────────
// Validated submission
// ──────────────────────────────────────────────────────────
//

/// A contact message that passed every field rule.
///
/// Lengths count UTF-16 code units, so an astral character such as an emoji
/// counts twice. Values are kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn parse(
        name: String,
        email: String,
        subject: String,
        message: String,
    ) -> Result<Self, ContactValidationError> {
        let mut errors = Vec::new();

        if form_len(&name) < NAME_MIN_LEN {
            errors.push(FieldError {
                field: ContactField::Name,
                message: "Nama harus minimal 2 karakter",
            });
        }

        if !is_valid_email(&email) {
            errors.push(FieldError {
                field: ContactField::Email,
                message: "Email tidak valid",
            });
        }

        if form_len(&subject) < SUBJECT_MIN_LEN {
            errors.push(FieldError {
                field: ContactField::Subject,
                message: "Subjek harus minimal 5 karakter",
            });
        }

        if form_len(&message) < MESSAGE_MIN_LEN {
            errors.push(FieldError {
                field: ContactField::Message,
                message: "Pesan harus minimal 10 karakter",
            });
        }

        if !errors.is_empty() {
            return Err(ContactValidationError(errors));
        }

        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
