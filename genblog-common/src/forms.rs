//! Contact and subscribe form state.
//!
//! There is no backend: submitting only records the values and flips the
//! form into its confirmation state. Submission cannot fail.

use serde::{Deserialize, Serialize};

/// Lifecycle of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

/// Editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// The contact page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub status: FormStatus,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            status: FormStatus::Editing,
        }
    }

    /// Update one field. Editing after a submission starts a new draft.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self.status = FormStatus::Editing;
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Accept the current values. No network call is made.
    pub fn submit(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.status = FormStatus::Submitted;
        tracing::info!(
            name = %self.name,
            email = %self.email,
            message_len = self.message.len(),
            "contact form accepted"
        );
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    /// Confirmation line shown after submitting.
    pub fn confirmation(&self) -> String {
        if self.name.is_empty() {
            "Mesajınız alındı, teşekkürler!".to_string()
        } else {
            format!("Teşekkürler {}, mesajınız alındı!", self.name)
        }
    }

    /// Back to an empty draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The footer RSS/e-mail subscription form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
    #[serde(default)]
    pub status: FormStatus,
}

impl SubscribeForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.status = FormStatus::Editing;
    }

    /// Accept the address. No network call is made.
    pub fn submit(&mut self) {
        self.email = self.email.trim().to_string();
        self.status = FormStatus::Submitted;
        tracing::info!(email = %self.email, "subscription accepted");
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    pub fn confirmation(&self) -> String {
        if self.email.is_empty() {
            "Aboneliğiniz alındı.".to_string()
        } else {
            format!("{} adresi abone listesine eklendi.", self.email)
        }
    }
}
