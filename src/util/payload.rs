//! Profile form values and the cleaning step that turns them into a request body.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use crate::net::types::{Sex, UpdatePayload};

/// Raw values from the profile form or one of its sub-forms.
///
/// Each form fills only the fields it owns; everything else stays `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub sex: Option<Sex>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

impl ProfileFields {
    pub fn phone(value: impl Into<String>) -> Self {
        Self { phone: Some(value.into()), ..Self::default() }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self { email: Some(value.into()), ..Self::default() }
    }

    pub fn address(value: impl Into<String>) -> Self {
        Self { address: Some(value.into()), ..Self::default() }
    }
}

/// Drop absent, empty and whitespace-only values.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Like `non_blank`, then strip surrounding whitespace.
fn trimmed(value: Option<String>) -> Option<String> {
    non_blank(value).map(|v| v.trim().to_owned())
}

/// Build the update body from raw form values.
///
/// `last_name`, `first_name`, `address` and `password` are trimmed; `phone`
/// and `email` are sent as typed.
pub fn clean_payload(fields: ProfileFields) -> UpdatePayload {
    UpdatePayload {
        last_name: trimmed(fields.last_name),
        first_name: trimmed(fields.first_name),
        sex: fields.sex,
        phone: non_blank(fields.phone),
        email: non_blank(fields.email),
        address: trimmed(fields.address),
        password: trimmed(fields.password),
    }
}
