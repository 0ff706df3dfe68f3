//! Draft buffer and validated creation input for new records.
//!
//! The draft mirrors the two-field submission form: raw strings that accept
//! any input while the user types. Validation happens in one place, when a
//! draft and the resolved session are combined into a [`CreateRecordInput`].

use std::fmt;

use crate::domain::record::{Record, RecordDescription, RecordId, RecordName, UserHandle};
use crate::domain::session::Session;

/// Domain error returned when a draft cannot become a creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftValidationError {
    /// Draft name was missing or blank once trimmed.
    EmptyName,
    /// Draft description was missing or blank once trimmed.
    EmptyDescription,
    /// No authenticated session was available for owner stamping.
    MissingSession,
}

impl fmt::Display for DraftValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "draft name must not be empty"),
            Self::EmptyDescription => write!(f, "draft description must not be empty"),
            Self::MissingSession => {
                write!(f, "an authenticated session is required to create records")
            }
        }
    }
}

impl std::error::Error for DraftValidationError {}

/// Transient form buffer for the next record submission.
///
/// Holds whatever the user typed; never validated until submission and never
/// persisted. Cleared after a successful create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    name: String,
    description: String,
}

impl RecordDraft {
    /// Raw name field as typed.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Raw description field as typed.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Replace the name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the description field.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Reset both fields to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
    }

    /// Whether both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty()
    }
}

/// Validated submission built from a draft plus the resolved session.
///
/// ## Invariants
/// - `name` and `description` satisfy record validation.
/// - `owner` is stamped from the session; construction fails without one.
///
/// # Examples
/// ```
/// use client::domain::{CreateRecordInput, RecordDraft, Session};
///
/// let mut draft = RecordDraft::default();
/// draft.set_name("Mesob");
/// draft.set_description("Ethiopian sharing plates");
/// let session = Session::try_from_parts("ada", None).unwrap();
///
/// let input = CreateRecordInput::try_from_draft(&draft, Some(&session)).unwrap();
/// assert_eq!(input.owner().as_ref(), "ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordInput {
    name: RecordName,
    description: RecordDescription,
    owner: UserHandle,
}

impl CreateRecordInput {
    /// Validate a draft against the session and build the submission.
    ///
    /// Field checks run before the session check, matching the submission
    /// form: an unauthenticated user with a blank draft learns about the
    /// blank fields first.
    pub fn try_from_draft(
        draft: &RecordDraft,
        session: Option<&Session>,
    ) -> Result<Self, DraftValidationError> {
        let name =
            RecordName::new(draft.name()).map_err(|_| DraftValidationError::EmptyName)?;
        let description = RecordDescription::new(draft.description())
            .map_err(|_| DraftValidationError::EmptyDescription)?;
        let session = session.ok_or(DraftValidationError::MissingSession)?;

        Ok(Self {
            name,
            description,
            owner: session.username().clone(),
        })
    }

    /// Validated restaurant name.
    pub fn name(&self) -> &RecordName {
        &self.name
    }

    /// Validated restaurant description.
    pub fn description(&self) -> &RecordDescription {
        &self.description
    }

    /// Identity stamped onto the created record.
    pub fn owner(&self) -> &UserHandle {
        &self.owner
    }

    /// Materialise the record this input describes, under a store-assigned id.
    pub fn to_record(&self, id: RecordId) -> Record {
        Record::new(
            id,
            self.name.clone(),
            self.description.clone(),
            self.owner.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> Session {
        Session::try_from_parts("ada", Some("ada@example.test")).expect("valid session")
    }

    fn draft(name: &str, description: &str) -> RecordDraft {
        let mut draft = RecordDraft::default();
        draft.set_name(name);
        draft.set_description(description);
        draft
    }

    #[rstest]
    #[case("", "good", DraftValidationError::EmptyName)]
    #[case("   ", "good", DraftValidationError::EmptyName)]
    #[case("good", "", DraftValidationError::EmptyDescription)]
    #[case("good", "   ", DraftValidationError::EmptyDescription)]
    fn blank_fields_fail_before_any_session_check(
        #[case] name: &str,
        #[case] description: &str,
        #[case] expected: DraftValidationError,
    ) {
        let result = CreateRecordInput::try_from_draft(&draft(name, description), None);
        assert_eq!(result.expect_err("blank drafts fail"), expected);
    }

    #[rstest]
    fn missing_session_fails_after_field_checks() {
        let result = CreateRecordInput::try_from_draft(&draft("Mesob", "Sharing plates"), None);
        assert_eq!(
            result.expect_err("sessionless submissions fail"),
            DraftValidationError::MissingSession
        );
    }

    #[rstest]
    fn valid_draft_stamps_the_session_owner(session: Session) {
        let input =
            CreateRecordInput::try_from_draft(&draft("Mesob", "Sharing plates"), Some(&session))
                .expect("valid draft");
        assert_eq!(input.name().as_ref(), "Mesob");
        assert_eq!(input.description().as_ref(), "Sharing plates");
        assert_eq!(input.owner().as_ref(), "ada");
    }

    #[rstest]
    fn to_record_carries_every_field(session: Session) {
        let input =
            CreateRecordInput::try_from_draft(&draft("Mesob", "Sharing plates"), Some(&session))
                .expect("valid draft");
        let id = RecordId::new("rest-1").expect("valid id");
        let record = input.to_record(id.clone());
        assert_eq!(record.id(), &id);
        assert_eq!(record.owner().as_ref(), "ada");
    }

    #[rstest]
    fn clear_resets_both_fields() {
        let mut buffer = draft("Mesob", "Sharing plates");
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.name(), "");
        assert_eq!(buffer.description(), "");
    }
}
