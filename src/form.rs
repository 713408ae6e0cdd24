//! Contact form definition and the request it produces.
//!
//! The form on the page is a plain `<form method="POST">` pointed at a
//! third-party relay. The page never intercepts submission: the browser
//! validates `required` and `type="email"` fields itself, then sends an
//! `application/x-www-form-urlencoded` body.
//!
//! [`CONTACT_FIELDS`] drives the rendered inputs. [`Submission`] reproduces
//! what the browser does with them (native validation plus body encoding),
//! which is what the integration tests compare the relay's received body
//! against.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Input control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u32 },
}

/// One form control.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    /// Submitted field name.
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    /// Decorative text drawn inside the input, never submitted.
    pub prefix: Option<&'static str>,
}

/// The four contact fields, in document order. All are required.
pub const CONTACT_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Your Full Name",
        placeholder: "Hardik",
        kind: FieldKind::Text,
        prefix: None,
    },
    FormField {
        name: "email",
        label: "Email Address",
        placeholder: "hardik@example.com",
        kind: FieldKind::Email,
        prefix: None,
    },
    FormField {
        name: "handle",
        label: "Instagram Handle",
        placeholder: "growthwithhardik",
        kind: FieldKind::Text,
        prefix: Some("@"),
    },
    FormField {
        name: "message",
        label: "Your Growth Goals",
        placeholder: "I want to hit 10k followers and automate my reels workflow...",
        kind: FieldKind::TextArea { rows: 4 },
        prefix: None,
    },
];

// "valid email address" from the HTML living standard, as used by
// <input type="email">.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern must compile")
});

/// Why the browser would refuse to submit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Invalid {
    /// A required field is empty (`valueMissing`).
    #[error("field '{0}' is required")]
    Missing(&'static str),
    /// The email field does not hold a valid address (`typeMismatch`).
    #[error("field 'email' is not a valid email address")]
    BadEmail,
}

/// A contact form that passed native validation, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pairs: Vec<(&'static str, String)>,
}

impl Submission {
    /// Apply native validation to user input, looked up by field name.
    ///
    /// Values go through the browser's sanitization first: email inputs
    /// drop leading and trailing whitespace, textareas normalize line
    /// breaks to CRLF. A value that is empty after sanitization is missing.
    pub fn validate<'a>(
        value_of: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, Invalid> {
        let mut pairs = Vec::with_capacity(CONTACT_FIELDS.len());
        for field in CONTACT_FIELDS {
            let raw = value_of(field.name).unwrap_or("");
            let value = match field.kind {
                FieldKind::Email => raw.trim().to_string(),
                FieldKind::TextArea { .. } => normalize_newlines(raw),
                FieldKind::Text => raw.replace(['\r', '\n'], ""),
            };
            if value.is_empty() {
                return Err(Invalid::Missing(field.name));
            }
            if field.kind == FieldKind::Email && !EMAIL.is_match(&value) {
                return Err(Invalid::BadEmail);
            }
            pairs.push((field.name, value));
        }
        Ok(Self { pairs })
    }

    /// Convenience for tests and callers holding `(name, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, Invalid> {
        Self::validate(|name| pairs.iter().find(|(n, _)| *n == name).map(|(_, v)| *v))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The request body, as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.pairs {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

fn normalize_newlines(raw: &str) -> String {
    raw.replace("\r\n", "\n").replace('\r', "\n").replace('\n', "\r\n")
}

/// Decode a URL-encoded body into `(name, value)` pairs.
pub fn decode_body(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}
