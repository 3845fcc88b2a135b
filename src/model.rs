//! User records as exchanged with the remote API.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier assigned by the remote API.
///
/// Backends emit either JSON numbers or strings here; both are kept as text
/// so lookups and URL building never depend on the wire representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// Editable part of a user: everything except the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl UserFields {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(flatten)]
    pub fields: UserFields,
}

impl User {
    pub fn new(id: impl Into<UserId>, fields: UserFields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_decode_to_same_text() {
        let numeric: User =
            serde_json::from_str(r#"{"id": 7, "name": "A", "email": "a@b.co"}"#).unwrap();
        let text: User = serde_json::from_str(r#"{"id": "7", "name": "A"}"#).unwrap();

        assert_eq!(numeric.id, text.id);
        assert_eq!(numeric.id.as_str(), "7");
        assert_eq!(numeric.fields.email, "a@b.co");
        assert_eq!(text.fields.phone, "");
    }

    #[test]
    fn user_serializes_flat() {
        let user = User::new(
            3,
            UserFields {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "0123456789".to_string(),
                address: "1 Loop Rd".to_string(),
            },
        );
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], "3");
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["address"], "1 Loop Rd");
    }

    #[test]
    fn trimmed_strips_every_field() {
        let fields = UserFields {
            name: "  Ada ".to_string(),
            email: " ada@example.com".to_string(),
            phone: "0123456789 ".to_string(),
            address: "\t1 Loop Rd\n".to_string(),
        };
        let trimmed = fields.trimmed();
        assert_eq!(trimmed.name, "Ada");
        assert_eq!(trimmed.email, "ada@example.com");
        assert_eq!(trimmed.phone, "0123456789");
        assert_eq!(trimmed.address, "1 Loop Rd");
    }
}
