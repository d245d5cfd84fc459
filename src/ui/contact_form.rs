//! Contact form state: what the visitor typed and where the submission
//! stands.

use serde::{Deserialize, Serialize};

/// Field names on the wire are the Spanish ones the backend expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "empresa", default)]
    pub company: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "mensaje", default)]
    pub message: String,
}

impl ContactFields {
    /// Wire names of required fields left blank. Company is optional.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("nombre", &self.name),
            ("email", &self.email),
            ("mensaje", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    status: FormStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Moves to `Loading` and hands back the payload to send. Returns `None`
    /// while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.status == FormStatus::Loading {
            return None;
        }
        self.status = FormStatus::Loading;
        Some(self.fields.clone())
    }

    /// Settles an in-flight submission. Success clears the fields so the form
    /// is ready for a new message; failure keeps them for a retry.
    pub fn finish(&mut self, delivered: bool) {
        if self.status != FormStatus::Loading {
            return;
        }
        if delivered {
            self.fields = ContactFields::default();
            self.status = FormStatus::Success;
        } else {
            self.status = FormStatus::Error;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ana".to_owned(),
            company: "Acme".to_owned(),
            email: "ana@acme.com".to_owned(),
            message: "Hola".to_owned(),
        }
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "Ana",
                "empresa": "Acme",
                "email": "ana@acme.com",
                "mensaje": "Hola",
            })
        );
    }

    #[test]
    fn company_is_optional() {
        let fields = ContactFields {
            company: String::new(),
            ..filled()
        };
        assert!(fields.missing_required().is_empty());
        assert_eq!(
            ContactFields::default().missing_required(),
            vec!["nombre", "email", "mensaje"]
        );
    }

    #[test]
    fn success_clears_fields() {
        let mut form = ContactForm::with_fields(filled());
        assert_eq!(form.begin_submit(), Some(filled()));
        assert_eq!(form.status(), FormStatus::Loading);
        form.finish(true);
        assert_eq!(form.status(), FormStatus::Success);
        assert_eq!(form.fields, ContactFields::default());
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = ContactForm::with_fields(filled());
        form.begin_submit();
        form.finish(false);
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.fields, filled());

        assert_eq!(form.begin_submit(), Some(filled()));
        assert_eq!(form.status(), FormStatus::Loading);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut form = ContactForm::with_fields(filled());
        form.begin_submit();
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), FormStatus::Loading);
    }

    #[test]
    fn finish_without_submission_does_nothing() {
        let mut form = ContactForm::with_fields(filled());
        form.finish(true);
        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.fields, filled());
    }
}
