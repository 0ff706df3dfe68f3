//! Restaurant record data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Record::try_from_strings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyId,
    PaddedId,
    EmptyName,
    EmptyDescription,
    EmptyOwner,
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "record id must not be empty"),
            Self::PaddedId => write!(f, "record id must not carry surrounding whitespace"),
            Self::EmptyName => write!(f, "record name must not be empty"),
            Self::EmptyDescription => write!(f, "record description must not be empty"),
            Self::EmptyOwner => write!(f, "owner handle must not be empty"),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Opaque record identifier assigned by the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Validate and construct a [`RecordId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, RecordValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, RecordValidationError> {
        if id.is_empty() {
            return Err(RecordValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(RecordValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// User-supplied restaurant name.
///
/// Stored verbatim; validation only requires a non-blank value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordName(String);

impl RecordName {
    /// Validate and construct a [`RecordName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, RecordValidationError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, RecordValidationError> {
        if name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecordName> for String {
    fn from(value: RecordName) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordName {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// User-supplied restaurant description.
///
/// Stored verbatim; validation only requires a non-blank value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordDescription(String);

impl RecordDescription {
    /// Validate and construct a [`RecordDescription`] from owned input.
    pub fn new(description: impl Into<String>) -> Result<Self, RecordValidationError> {
        Self::from_owned(description.into())
    }

    fn from_owned(description: String) -> Result<Self, RecordValidationError> {
        if description.trim().is_empty() {
            return Err(RecordValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for RecordDescription {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<RecordDescription> for String {
    fn from(value: RecordDescription) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordDescription {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Opaque identity handle stamped onto records at creation time.
///
/// Trimmed on construction so identity comparisons ignore caller padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserHandle(String);

impl UserHandle {
    /// Validate and construct a [`UserHandle`] from borrowed input.
    pub fn new(handle: impl AsRef<str>) -> Result<Self, RecordValidationError> {
        Self::from_owned(handle.as_ref().to_owned())
    }

    fn from_owned(handle: String) -> Result<Self, RecordValidationError> {
        let normalized = handle.trim();
        if normalized.is_empty() {
            return Err(RecordValidationError::EmptyOwner);
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for UserHandle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserHandle> for String {
    fn from(value: UserHandle) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserHandle {
    type Error = RecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// One restaurant entry in the shared board.
///
/// ## Invariants
/// - `id` is assigned by the remote store and never minted locally.
/// - `name` and `description` are non-blank; caller whitespace is preserved.
/// - `owner` is the identity that created the record.
///
/// Local state holds records as a cache of the last successful round trip;
/// it may go stale between refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "RecordDto", into = "RecordDto")]
pub struct Record {
    id: RecordId,
    name: RecordName,
    description: RecordDescription,
    owner: UserHandle,
}

impl Record {
    /// Build a new [`Record`] from validated components.
    pub fn new(
        id: RecordId,
        name: RecordName,
        description: RecordDescription,
        owner: UserHandle,
    ) -> Self {
        Self {
            id,
            name,
            description,
            owner,
        }
    }

    /// Fallible constructor enforcing every field invariant.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        name: impl Into<String>,
        description: impl Into<String>,
        owner: impl AsRef<str>,
    ) -> Result<Self, RecordValidationError> {
        let id = RecordId::new(id)?;
        let name = RecordName::new(name)?;
        let description = RecordDescription::new(description)?;
        let owner = UserHandle::new(owner)?;

        Ok(Self::new(id, name, description, owner))
    }

    /// Store-assigned record identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Restaurant name shown on the board.
    pub fn name(&self) -> &RecordName {
        &self.name
    }

    /// Restaurant description shown on the board.
    pub fn description(&self) -> &RecordDescription {
        &self.description
    }

    /// Identity that created the record.
    pub fn owner(&self) -> &UserHandle {
        &self.owner
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct RecordDto {
    id: String,
    name: String,
    description: String,
    owner: String,
}

impl From<Record> for RecordDto {
    fn from(value: Record) -> Self {
        let Record {
            id,
            name,
            description,
            owner,
        } = value;
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            owner: owner.into(),
        }
    }
}

impl TryFrom<RecordDto> for Record {
    type Error = RecordValidationError;

    fn try_from(value: RecordDto) -> Result<Self, Self::Error> {
        Record::try_from_strings(value.id, value.name, value.description, value.owner)
    }
}
