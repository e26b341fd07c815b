//! Wire envelope types for the accounts API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crestbank_types::{AccountAttributes, RecordId};

/// The resource type tag carried in the envelope's `data.type`.
pub const ACCOUNTS_TYPE: &str = "accounts";

/// The envelope wrapping a single account record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub data: Data,
    #[serde(default)]
    pub links: Links,
}

/// A single account record: identity, versioning and the attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub organisation_id: RecordId,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attributes: AccountAttributes,
}

/// Self link on a single-record envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: String,
}

/// Traversal links on a list envelope. Empty strings mean the service did
/// not provide that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(rename = "self", default)]
    pub self_link: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub next: String,
    #[serde(default)]
    pub prev: String,
}

/// The envelope wrapping one page of account records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountPage {
    #[serde(default)]
    pub data: Vec<Data>,
    #[serde(default)]
    pub links: PageLinks,
}

/// The structured error body a 400 response carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadRequestBody {
    pub error_code: String,
    pub error_message: String,
}
