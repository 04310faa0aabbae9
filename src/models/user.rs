use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a user record
///
/// Opaque: any JSON number or string the service hands out. The JSON type is
/// kept, so `1` and `"1"` are different ids that render the same.
/// Records created from this client carry a UUID string until the server says
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(Number),
    Text(String),
}

impl UserId {
    /// Fresh client-side identifier. Advisory only, the server may replace it.
    pub fn generate() -> Self {
        UserId::Text(Uuid::new_v4().to_string())
    }

    /// Whether this id renders as `segment`, the decoded form used in URLs
    pub fn matches_segment(&self, segment: &str) -> bool {
        match self {
            UserId::Number(n) => n.to_string() == segment,
            UserId::Text(s) => s == segment,
        }
    }
}

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        UserId::Number(n.into())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    /// Members this client does not edit (e.g. `geo`), sent back as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Address {
    /// One-line rendering used by the listing table
    pub fn summary(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.suite, self.city, self.zipcode)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A user record as exchanged with the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(rename = "companyName", default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl User {
    /// Company shown in the listing: nested company record first, then the flat field
    pub fn company_display(&self) -> &str {
        self.company
            .as_ref()
            .map(|c| c.name.as_str())
            .or(self.company_name.as_deref())
            .unwrap_or("")
    }
}

/// Leaf fields of a user record addressable by their form name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Username,
    Street,
    Suite,
    City,
    Zipcode,
    CompanyName,
    Website,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Username,
        Field::Street,
        Field::Suite,
        Field::City,
        Field::Zipcode,
        Field::CompanyName,
        Field::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Username => "username",
            Field::Street => "address.street",
            Field::Suite => "address.suite",
            Field::City => "address.city",
            Field::Zipcode => "address.zipcode",
            Field::CompanyName => "companyName",
            Field::Website => "website",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Username => "Username",
            Field::Street => "Street",
            Field::Suite => "Suite",
            Field::City => "City",
            Field::Zipcode => "Zipcode",
            Field::CompanyName => "Company Name",
            Field::Website => "Website",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// In-progress record behind the creation form; empty text means absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub company_name: String,
    pub website: String,
}

impl UserDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Username => &self.username,
            Field::Street => &self.street,
            Field::Suite => &self.suite,
            Field::City => &self.city,
            Field::Zipcode => &self.zipcode,
            Field::CompanyName => &self.company_name,
            Field::Website => &self.website,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Username => &mut self.username,
            Field::Street => &mut self.street,
            Field::Suite => &mut self.suite,
            Field::City => &mut self.city,
            Field::Zipcode => &mut self.zipcode,
            Field::CompanyName => &mut self.company_name,
            Field::Website => &mut self.website,
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub address: Address,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub website: String,
}

impl NewUser {
    pub fn from_draft(id: UserId, draft: &UserDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            username: draft.username.clone(),
            address: Address {
                street: draft.street.clone(),
                suite: draft.suite.clone(),
                city: draft.city.clone(),
                zipcode: draft.zipcode.clone(),
                extra: Map::new(),
            },
            company_name: draft.company_name.clone(),
            website: draft.website.clone(),
        }
    }
}

/// Editable copy of a listed record behind the edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

impl EditDraft {
    pub const FIELDS: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Username,
        Field::Phone,
        Field::Street,
        Field::Suite,
        Field::City,
        Field::Zipcode,
    ];

    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            phone: user.phone.clone(),
            street: user.address.street.clone(),
            suite: user.address.suite.clone(),
            city: user.address.city.clone(),
            zipcode: user.address.zipcode.clone(),
        }
    }

    /// Value of an editable field, `None` for fields the dialog does not expose
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Username => Some(&self.username),
            Field::Phone => Some(&self.phone),
            Field::Street => Some(&self.street),
            Field::Suite => Some(&self.suite),
            Field::City => Some(&self.city),
            Field::Zipcode => Some(&self.zipcode),
            Field::CompanyName | Field::Website => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Username => Some(&mut self.username),
            Field::Phone => Some(&mut self.phone),
            Field::Street => Some(&mut self.street),
            Field::Suite => Some(&mut self.suite),
            Field::City => Some(&mut self.city),
            Field::Zipcode => Some(&mut self.zipcode),
            Field::CompanyName | Field::Website => None,
        }
    }
}
