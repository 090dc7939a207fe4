use serde::{Deserialize, Serialize};

/// One inquiry as submitted from the portal's contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// Validation errors raised before an inquiry reaches the sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("name must not be blank")]
    BlankName,
    #[error("email must not be blank")]
    BlankEmail,
    #[error("email address looks invalid")]
    MalformedEmail,
    #[error("message must not be blank")]
    BlankMessage,
}

impl ContactInquiry {
    /// Validate the inquiry, returning it with surrounding whitespace
    /// trimmed from every field.
    pub fn validated(self) -> Result<Self, ContactValidationError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ContactValidationError::BlankName);
        }

        let email = self.email.trim().to_string();
        if email.is_empty() {
            return Err(ContactValidationError::BlankEmail);
        }
        let mut parts = email.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let host = parts.next().unwrap_or_default();
        if local.is_empty() || host.is_empty() {
            return Err(ContactValidationError::MalformedEmail);
        }

        let message = self.message.trim().to_string();
        if message.is_empty() {
            return Err(ContactValidationError::BlankMessage);
        }

        let phone = self
            .phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }
}
