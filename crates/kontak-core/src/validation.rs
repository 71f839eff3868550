//! Field validation for contact submissions.
//!
//! Rules are an ordered table of `(field, predicate, message)` entries.
//! Every rule runs on every submission and failures are collected, so a
//! form can show all of its problems at once.
//!
//! The name-uniqueness rule needs a store lookup. The caller performs that
//! lookup once and passes the outcome in through [`RuleContext`], which keeps
//! the rules themselves synchronous and pure.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::domain::ContactInput;

/// Message used when a name belongs to another contact.
pub const NAME_TAKEN: &str = "Contact name is already in use.";

const MAX_EMAIL_LEN: usize = 254;
const MAX_EMAIL_LOCAL_LEN: usize = 64;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .expect("email pattern is valid")
});

// Indonesian mobile numbers: country/trunk prefix, an 8, a two-digit
// operator code, then the subscriber number.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1235-9]|7[78]|9[5-9]|8[1-9])[\s\d]{5,11}$")
        .expect("phone pattern is valid")
});

/// Form field a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// Name of the HTML form input carrying this field.
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::Name => "nama",
            Self::Email => "email",
            Self::Phone => "nohp",
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Ordered collection of field errors. Empty means the submission is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A single error on one field.
    pub fn single(field: Field, message: &'static str) -> Self {
        Self(vec![FieldError { field, message }])
    }

    pub fn push(&mut self, field: Field, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// First error recorded against `field`, if any.
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}: {}", err.field.form_name(), err.message)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Facts gathered from the store before the rules run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleContext {
    /// The submitted name belongs to a contact other than the one being edited.
    pub name_taken: bool,
}

struct Rule {
    field: Field,
    check: fn(&ContactInput, &RuleContext) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: Field::Name,
        check: name_present,
        message: "Name is required.",
    },
    Rule {
        field: Field::Name,
        check: name_available,
        message: NAME_TAKEN,
    },
    Rule {
        field: Field::Email,
        check: email_valid,
        message: "Invalid email address.",
    },
    Rule {
        field: Field::Phone,
        check: phone_valid,
        message: "Invalid phone number.",
    },
];

fn name_present(input: &ContactInput, _: &RuleContext) -> bool {
    !input.name.trim().is_empty()
}

fn name_available(_: &ContactInput, ctx: &RuleContext) -> bool {
    !ctx.name_taken
}

fn email_valid(input: &ContactInput, _: &RuleContext) -> bool {
    is_valid_email(&input.email)
}

fn phone_valid(input: &ContactInput, _: &RuleContext) -> bool {
    is_valid_phone(&input.phone)
}

/// Run every rule against `input` and collect the failures in rule order.
pub fn validate(input: &ContactInput, ctx: &RuleContext) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in RULES {
        if !(rule.check)(input, ctx) {
            errors.push(rule.field, rule.message);
        }
    }
    errors
}

/// Check an email address against the usual `local@domain.tld` grammar.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_EMAIL_LOCAL_LEN => EMAIL_RE.is_match(email),
        _ => false,
    }
}

/// Check a phone number against the Indonesian mobile numbering plan.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
