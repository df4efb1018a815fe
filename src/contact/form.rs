use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Service, UnknownService};
use crate::store::{KeyValueStore, StoreError};

use super::keys::KeyGenerator;

/// A control on the contact form. `id()` matches the form control id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Service,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Service];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Service => "service",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL.into_iter().find(|f| f.id() == s).ok_or(())
    }
}

/// The not-yet-submitted form state. Owned by whoever is editing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Option<Service>,
}

impl Draft {
    /// Replace one field with the given text.
    ///
    /// For [`Field::Service`] the text must be a catalog title; empty text
    /// clears the selection.
    pub fn update(&mut self, field: Field, value: &str) -> Result<(), UnknownService> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Service if value.is_empty() => self.service = None,
            Field::Service => self.service = Some(value.parse()?),
        }
        Ok(())
    }

    pub fn select(&mut self, service: Service) {
        self.service = Some(service);
    }

    /// Fields that are empty after trimming, in form order.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| match field {
                Field::Name => self.name.trim().is_empty(),
                Field::Phone => self.phone.trim().is_empty(),
                Field::Email => self.email.trim().is_empty(),
                Field::Service => self.service.is_none(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}

/// The persisted shape of one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: Service,
}

impl SubmissionRecord {
    /// `None` unless every field is filled in.
    pub fn from_draft(draft: &Draft) -> Option<Self> {
        if !draft.missing().is_empty() {
            return None;
        }
        Some(Self {
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            service: draft.service?,
        })
    }
}

#[derive(Debug)]
pub enum SubmitError {
    /// At least one required field is empty.
    Incomplete { missing: Vec<Field> },
    Store(StoreError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Incomplete { missing } => {
                let ids: Vec<&str> = missing.iter().map(|field| field.id()).collect();
                write!(f, "Missing required fields: {}", ids.join(", "))
            }
            SubmitError::Store(err) => write!(f, "Failed to store submission: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::Store(err) => Some(err),
            SubmitError::Incomplete { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Accepted {
    pub key: String,
    pub record: SubmissionRecord,
    /// The draft to continue editing with: always empty.
    pub draft: Draft,
}

#[derive(Debug)]
pub struct Rejected {
    /// The submitted draft, untouched.
    pub draft: Draft,
    pub reason: SubmitError,
}

/// Validate the draft and, when complete, write it under a fresh key.
///
/// Nothing is written on rejection.
pub async fn submit(
    draft: Draft,
    store: &dyn KeyValueStore,
    keys: &KeyGenerator,
) -> Result<Accepted, Rejected> {
    let Some(record) = SubmissionRecord::from_draft(&draft) else {
        let missing = draft.missing();
        tracing::debug!("Contact submission rejected, missing: {missing:?}");
        return Err(Rejected {
            draft,
            reason: SubmitError::Incomplete { missing },
        });
    };

    let value = match serde_json::to_string(&record) {
        Ok(value) => value,
        Err(e) => {
            return Err(Rejected {
                draft,
                reason: SubmitError::Store(StoreError::Backend(format!(
                    "Failed to serialize record: {e}"
                ))),
            });
        }
    };

    let key = keys.next();
    if let Err(e) = store.put(&key, &value).await {
        tracing::error!("Failed to store contact submission {key}: {e}");
        return Err(Rejected {
            draft,
            reason: SubmitError::Store(e),
        });
    }

    tracing::info!("Contact submission stored as {key}");

    Ok(Accepted {
        key,
        record,
        draft: Draft::default(),
    })
}
