use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::{Validate, ValidationErrors};

/// The four contact form fields.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// True when every field holds a value, mirroring the form's `required` inputs.
    pub fn is_complete(&self) -> bool {
        Field::VARIANTS.iter().all(|field| !self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Payload accepted by `POST /api/contact`.
///
/// Fields are optional so that a missing key, `null` and `""` all end up as
/// the same validation failure instead of a deserialization error.
#[derive(Deserialize, Validate, Default, Clone, Debug)]
pub struct ContactRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Parses a request body. Only the keys of a JSON object are read: any
    /// other value (array, string, number, bool) carries no fields and fails
    /// validation later. `null` and invalid JSON are parse errors.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice(body)? {
            Value::Object(fields) => serde_json::from_value(Value::Object(fields)),
            Value::Null => Err(serde::de::Error::custom("expected a JSON object, found null")),
            _ => Ok(Self::default()),
        }
    }

    pub fn into_submission(self) -> Result<ContactSubmission, ValidationErrors> {
        self.validate()?;

        Ok(ContactSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

impl From<ContactSubmission> for ContactRequest {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: Some(value.name),
            email: Some(value.email),
            subject: Some(value.subject),
            message: Some(value.message),
        }
    }
}
