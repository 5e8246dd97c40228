//! DNS record types and field validation

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Maximum accepted length of a record name in bytes (RFC 1035 limit for a
/// full domain name).
pub const MAX_NAME_LENGTH: usize = 253;

// ============ Record Type ============

/// DNS record type identifier.
///
/// Closed set: values outside the four variants are rejected, both by serde
/// (JSON bodies) and by [`FromStr`] (URL path segments).
///
/// Serialized as uppercase DNS mnemonics (`"A"`, `"AAAA"`, `"CNAME"`, `"NS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Name server record.
    Ns,
}

impl RecordType {
    /// The uppercase DNS mnemonic for this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Ns => "NS",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CoreError;

    /// Parse an uppercase DNS mnemonic. Matching is exact: `"a"` and `"MX"`
    /// are both rejected, consistent with the serde representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "NS" => Ok(Self::Ns),
            other => Err(CoreError::ValidationError(format!(
                "Unknown record type: '{other}' (expected one of A, AAAA, CNAME, NS)"
            ))),
        }
    }
}

// ============ Record Key ============

/// Composite record identity: the (name, type) pair.
///
/// At most one record exists per key at any time; this is the uniqueness
/// invariant every repository implementation enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordKey {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

impl RecordKey {
    /// Create a new record key.
    #[must_use]
    pub fn new(name: String, record_type: RecordType) -> Self {
        Self { name, record_type }
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.record_type)
    }
}

// ============ Record ============

/// A DNS resource record held by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Domain name (e.g. `"example.com"`). Stored verbatim: comparisons are
    /// case-sensitive and no trailing-dot normalization is applied.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record data. Shape depends on the type (IPv4 literal for A, IPv6
    /// literal for AAAA, domain name for CNAME/NS) but the directory accepts
    /// any non-empty string.
    pub value: String,
    /// Time to live in seconds. Stored field only; the directory does not
    /// expire records.
    pub ttl: u32,
    /// When the record was created.
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// When the record was last updated.
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl DnsRecord {
    /// The (name, type) identity of this record.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(self.name.clone(), self.record_type)
    }

    /// Whether this record is identified by `key`, without allocating.
    #[must_use]
    pub fn matches_key(&self, key: &RecordKey) -> bool {
        self.name == key.name && self.record_type == key.record_type
    }
}

// ============ Request Types ============

/// Request to create a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordRequest {
    /// Record name.
    pub name: String,
    /// Record type.
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record data.
    pub value: String,
    /// TTL in seconds.
    pub ttl: u32,
}

impl CreateRecordRequest {
    /// Validate the request fields.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the name is empty or longer
    /// than [`MAX_NAME_LENGTH`] bytes, or the value is empty.
    pub fn validate(&self) -> CoreResult<()> {
        validate_name(&self.name)?;
        validate_value(&self.value)
    }
}

/// Request to update an existing record's data in place.
///
/// Carries only the mutable fields: the (name, type) key is taken from the
/// operation arguments and is immutable during update. Unknown fields are
/// ignored on deserialization, so clients that re-submit the whole record
/// on edit still parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordRequest {
    /// New record data.
    pub value: String,
    /// New TTL in seconds.
    pub ttl: u32,
}

impl UpdateRecordRequest {
    /// Validate the request fields.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the value is empty.
    pub fn validate(&self) -> CoreResult<()> {
        validate_value(&self.value)
    }
}

fn validate_name(name: &str) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "Record name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(CoreError::ValidationError(format!(
            "Record name exceeds {MAX_NAME_LENGTH} bytes"
        )));
    }
    Ok(())
}

fn validate_value(value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::ValidationError(
            "Record value must not be empty".to_string(),
        ));
    }
    Ok(())
}
