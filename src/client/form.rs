//! Add/edit draft state for the champion editor.
//!
//! A small state machine: `Idle` until the user opens the editor, then
//! `Composing` with a draft and, when editing, the target record's id. A
//! submission is a single validated write; both outcomes reset to `Idle`.

use std::fmt;

use base64::Engine;

use crate::model::champion::{Category, ChampionDto, ChampionForm, MAX_IMAGE_BYTES};

/// In-progress, unsaved field values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChampionDraft {
    pub tournament: String,
    pub date: String,
    pub winner: String,
    pub category: Category,
    /// Inline-encoded payload shown in the preview and persisted as-is.
    pub image: String,
}

impl From<&ChampionDto> for ChampionDraft {
    fn from(record: &ChampionDto) -> Self {
        Self {
            tournament: record.tournament.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            winner: record.winner.clone(),
            category: record.category,
            image: record.image.clone(),
        }
    }
}

/// Why a draft action was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is empty; submission silently no-ops.
    MissingField(&'static str),
    /// The selected file exceeds the size cap; the prior image is kept.
    OversizedImage { size: usize },
    /// No live identity; writes are blocked entirely.
    IdentityRequired,
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingField(field) => write!(f, "{field} is required"),
            DraftError::OversizedImage { size } => write!(
                f,
                "Image is {size} bytes; the limit is {MAX_IMAGE_BYTES} bytes"
            ),
            DraftError::IdentityRequired => f.write_str("Sign in before saving"),
        }
    }
}

/// A validated submission ready to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub form: ChampionForm,
    /// Target record for an overwrite; `None` inserts a new record.
    pub editing_id: Option<i32>,
}

/// Editor state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormState {
    #[default]
    Idle,
    Composing {
        draft: ChampionDraft,
        editing_id: Option<i32>,
    },
}

impl FormState {
    /// "Add" action: open with an empty draft.
    pub fn open_add(&mut self) {
        *self = FormState::Composing {
            draft: ChampionDraft::default(),
            editing_id: None,
        };
    }

    /// "Edit" action: open with a copy of the existing record.
    pub fn open_edit(&mut self, record: &ChampionDto) {
        *self = FormState::Composing {
            draft: ChampionDraft::from(record),
            editing_id: Some(record.id),
        };
    }

    /// Cancel: discard the draft.
    pub fn cancel(&mut self) {
        *self = FormState::Idle;
    }

    /// Successful submit: reset the draft and return to idle.
    pub fn finish(&mut self) {
        *self = FormState::Idle;
    }

    pub fn is_composing(&self) -> bool {
        matches!(self, FormState::Composing { .. })
    }

    pub fn draft(&self) -> Option<&ChampionDraft> {
        match self {
            FormState::Composing { draft, .. } => Some(draft),
            FormState::Idle => None,
        }
    }

    /// Mutates a draft field; no-op while idle.
    pub fn with_draft(&mut self, apply: impl FnOnce(&mut ChampionDraft)) {
        if let FormState::Composing { draft, .. } = self {
            apply(draft);
        }
    }

    /// Embeds a selected file into the draft, replacing any prior image.
    ///
    /// Files over the cap are refused with no state change so the previous
    /// draft image survives a bad selection.
    pub fn attach_image(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), DraftError> {
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(DraftError::OversizedImage { size: bytes.len() });
        }

        if let FormState::Composing { draft, .. } = self {
            let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
            draft.image = format!("data:{};base64,{encoded}", mime_from_name(file_name));
        }

        Ok(())
    }

    /// Explicit "clear" action for the draft image.
    pub fn clear_image(&mut self) {
        self.with_draft(|draft| draft.image.clear());
    }

    /// Validates the draft for submission.
    ///
    /// Identity is checked first: without one, writes are blocked entirely.
    /// The caller keeps the Composing state on any error.
    pub fn validate(&self, has_identity: bool) -> Result<Submission, DraftError> {
        let FormState::Composing { draft, editing_id } = self else {
            return Err(DraftError::MissingField("draft"));
        };

        if !has_identity {
            return Err(DraftError::IdentityRequired);
        }

        if draft.tournament.is_empty() {
            return Err(DraftError::MissingField("tournament"));
        }
        if draft.date.is_empty() {
            return Err(DraftError::MissingField("date"));
        }
        if draft.winner.is_empty() {
            return Err(DraftError::MissingField("winner"));
        }

        Ok(Submission {
            form: ChampionForm {
                tournament: draft.tournament.clone(),
                date: draft.date.clone(),
                winner: draft.winner.clone(),
                category: draft.category,
                image: draft.image.clone(),
            },
            editing_id: *editing_id,
        })
    }
}

fn mime_from_name(file_name: &str) -> &'static str {
    match file_name.rsplit('.').next().map(str::to_ascii_lowercase) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "gif" => "image/gif",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "image/png",
    }
}
