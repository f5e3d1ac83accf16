//! Contact submission boundary. The real endpoint does not exist yet; the
//! stub validates the draft and acknowledges locally.
use std::time::Duration;

use thiserror::Error;

/// Unsent contact form state. Lives only while the contact page is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    /// All three fields populated and the email shaped like one.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.message.trim().is_empty()
        {
            return Err(ContactError::MissingFields);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local-part@domain` with a dot somewhere in the domain. The eventual
/// backend owns real validation.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ContactError {
    #[error("all fields are required")]
    MissingFields,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl ContactError {
    /// Translation key of the inline message shown for this failure.
    pub fn message_key(&self) -> &'static str {
        match self {
            ContactError::MissingFields => "error.contact.missing_fields",
            ContactError::InvalidEmail => "error.contact.invalid_email",
            ContactError::Rejected(_) => "error.contact.rejected",
        }
    }
}

/// Acknowledgement from the (future) submission endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ack;

/// Submit a contact draft. Currently a stub: nothing leaves the machine.
/// The short sleep stands in for the round trip so the pending state in
/// the form is observable.
pub async fn submit_contact_form(draft: &ContactDraft) -> Result<Ack, ContactError> {
    draft.validate()?;
    tokio::time::sleep(Duration::from_millis(250)).await;
    println!("[CONTACT] draft from `{}` acknowledged locally (no backend)", draft.email.trim());
    Ok(Ack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Sara Ahmadi".into(),
            email: "sara@example.com".into(),
            message: "How long does a gift card order take?".into(),
        }
    }

    #[test]
    fn new_draft_starts_empty() {
        assert!(ContactDraft::default().is_empty());
        assert!(!filled().is_empty());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut draft = filled();
        draft.message = "   ".into();
        assert_eq!(draft.validate(), Err(ContactError::MissingFields));
        assert_eq!(ContactDraft::default().validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["sara", "sara@", "@example.com", "sara@examplecom", "sara@.com", "sara@example."] {
            let mut draft = filled();
            draft.email = bad.into();
            assert_eq!(draft.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn failures_map_to_table_keys() {
        use crate::lang;
        use crate::types::Locale;

        let errors = [
            ContactError::MissingFields,
            ContactError::InvalidEmail,
            ContactError::Rejected("quota".into()),
        ];
        for err in &errors {
            for &locale in Locale::ALL {
                assert!(
                    lang::resolve(locale, err.message_key()).is_ok(),
                    "`{}` missing for `{locale}`",
                    err.message_key()
                );
            }
        }
    }

    #[tokio::test]
    async fn valid_draft_is_acknowledged() {
        assert_eq!(submit_contact_form(&filled()).await, Ok(Ack));
    }

    #[tokio::test]
    async fn invalid_draft_fails_without_acknowledgment() {
        let err = submit_contact_form(&ContactDraft::default()).await.unwrap_err();
        assert_eq!(err, ContactError::MissingFields);
    }
}
