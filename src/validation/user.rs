use crate::models::user::{EditDraft, Field, UserDraft};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX is a valid regex pattern")
});

/// Exactly ten ASCII digits
static PHONE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[0-9]{10}$").expect("PHONE_REGEX is a valid regex pattern")
});

/// Optional scheme, a lowercase host with at least one dot, optional path
static WEBSITE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(https?://)?[0-9a-z.-]+\.[a-z.]{2,6}[/0-9A-Za-z_ .-]*/?$")
        .expect("WEBSITE_REGEX is a valid regex pattern")
});

const MIN_NAME_LENGTH: usize = 3;
const MIN_COMPANY_NAME_LENGTH: usize = 3;

/// Field-level validation failures, keyed and iterated in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.errors.iter().map(|(field, message)| (field.as_str(), message)))
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate a creation-form draft.
///
/// Every rule runs independently; an empty result means the draft may be
/// submitted. Pure: the same draft always yields the same map.
pub fn validate_user(draft: &UserDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if char_len(&draft.name) < MIN_NAME_LENGTH {
        errors.insert(Field::Name, "Name must be at least 3 characters long");
    }

    if !EMAIL_REGEX.is_match(&draft.email) {
        errors.insert(Field::Email, "Invalid email address");
    }

    if !PHONE_REGEX.is_match(&draft.phone) {
        errors.insert(Field::Phone, "Phone number must be 10 digits long");
    }

    if draft.street.is_empty() {
        errors.insert(Field::Street, "Street is required");
    }
    if draft.city.is_empty() {
        errors.insert(Field::City, "City is required");
    }
    if draft.zipcode.is_empty() {
        errors.insert(Field::Zipcode, "Zipcode is required");
    }

    if !draft.company_name.is_empty() && char_len(&draft.company_name) < MIN_COMPANY_NAME_LENGTH {
        errors.insert(
            Field::CompanyName,
            "Company name must be at least 3 characters long",
        );
    }

    if !draft.website.is_empty() && !WEBSITE_REGEX.is_match(&draft.website) {
        errors.insert(Field::Website, "Website must be a valid URL");
    }

    errors
}

/// Required-field check applied before an edited record is sent back
///
/// Suite is the only optional field of the edit dialog.
pub fn validate_required(draft: &EditDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in EditDraft::FIELDS {
        if field == Field::Suite {
            continue;
        }
        if draft.get(field).is_some_and(str::is_empty) {
            errors.insert(
                field,
                format!("Please input the {}!", required_noun(field)),
            );
        }
    }

    errors
}

fn required_noun(field: Field) -> &'static str {
    match field {
        Field::Phone => "phone number",
        other => match other.as_str().rsplit_once('.') {
            Some((_, leaf)) => leaf,
            None => other.as_str(),
        },
    }
}
