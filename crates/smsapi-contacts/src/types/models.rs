/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{FieldType, Gender};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "serde_helpers::deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub birthday_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub idx: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
    /// Custom field values and anything else the server adds
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Contact {
    /// Value of a custom field
    pub fn custom_field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(deserialize_with = "serde_helpers::deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub idx: Option<String>,
    #[serde(default)]
    pub contacts_count: Option<u64>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_updated: Option<String>,
}

/// A user's access grant on a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_opt_id")]
    pub group_id: Option<String>,
    pub username: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_flag")]
    pub read: bool,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_flag")]
    pub write: bool,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_flag")]
    pub send: bool,
}

/// Custom contact field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(deserialize_with = "serde_helpers::deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}

/// Group as returned by the legacy `phonebook.do` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyGroup {
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default)]
    pub numbers_count: u64,
}

/// Sub-user as returned by `user.do`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_or_zero")]
    pub limit: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_or_zero")]
    pub month_limit: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_flag")]
    pub senders: bool,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_flag")]
    pub phonebook: bool,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_flag")]
    pub active: bool,
    #[serde(default)]
    pub info: Option<String>,
}

/// Balance details returned by a password login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal_or_zero")]
    pub points: Decimal,
    #[serde(rename = "proCount", default)]
    pub pro_count: Option<u64>,
    #[serde(rename = "ecoCount", default)]
    pub eco_count: Option<u64>,
    #[serde(rename = "mmsCount", default)]
    pub mms_count: Option<u64>,
    #[serde(rename = "vmsGsmCount", default)]
    pub vms_gsm_count: Option<u64>,
    #[serde(rename = "vmsLandCount", default)]
    pub vms_land_count: Option<u64>,
}

/// Account profile returned for OAuth sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub username: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_decimal_or_zero")]
    pub points: Decimal,
}

mod serde_helpers {
    use super::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::str::FromStr;

    fn id_from_value<E: serde::de::Error>(value: Value) -> Result<String, E> {
        match value {
            Value::String(id) => Ok(id),
            Value::Number(id) => Ok(id.to_string()),
            other => Err(E::custom(format!("invalid id: {other}"))),
        }
    }

    /// Ids arrive as strings or numbers depending on the endpoint
    pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        id_from_value(Value::deserialize(deserializer)?)
    }

    pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            value => id_from_value(value).map(Some),
        }
    }

    /// Accepts `true`/`false`, `0`/`1` and their string forms
    pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(false),
            Value::Bool(flag) => Ok(flag),
            Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
            Value::String(raw) => match raw.trim() {
                "" | "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                other => Err(serde::de::Error::custom(format!("invalid flag: {other}"))),
            },
            other => Err(serde::de::Error::custom(format!("invalid flag: {other}"))),
        }
    }

    pub fn deserialize_decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Decimal::ZERO);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(Decimal::ZERO);
            }
            return Decimal::from_str(raw.trim()).map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string()).map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }
}
