//! Editable field controller for the asset overview form.

use crate::model::{AssetRecord, FieldId};

/// Edit-session state: at most one field is ever being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No field in edit mode.
    #[default]
    Viewing,
    /// `field` is being edited with an uncommitted `draft` value.
    Editing { field: FieldId, draft: String },
}

/// Field editor wrapping a committed [`AssetRecord`].
///
/// Transitions:
/// - `start_edit(f)`: Viewing → Editing(f, committed value of f). Starting
///   an edit while another field is editing drops that field's draft
///   without committing it.
/// - `save()`: Editing → Viewing, draft overwrites the committed value.
/// - `cancel()`: Editing → Viewing, draft dropped.
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    record: AssetRecord,
    state: EditorState,
}

impl FieldEditor {
    #[must_use]
    pub fn new(record: AssetRecord) -> Self {
        Self {
            record,
            state: EditorState::Viewing,
        }
    }

    /// The committed record (reads always see committed values, never drafts).
    #[must_use]
    pub fn record(&self) -> &AssetRecord {
        &self.record
    }

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// The field currently in edit mode, if any.
    #[must_use]
    pub fn editing_field(&self) -> Option<FieldId> {
        match &self.state {
            EditorState::Viewing => None,
            EditorState::Editing { field, .. } => Some(*field),
        }
    }

    /// The in-flight draft value, if a field is being edited.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditorState::Viewing => None,
            EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Enter edit mode on `field`, initializing the draft from the
    /// committed value. Any other in-flight draft is discarded.
    pub fn start_edit(&mut self, field: FieldId) {
        let draft = self.record.value(field).to_string();
        self.state = EditorState::Editing { field, draft };
    }

    /// Commit the draft. No-op in Viewing.
    pub fn save(&mut self) {
        if let EditorState::Editing { field, draft } = std::mem::take(&mut self.state) {
            self.record.set_value(field, draft);
        }
    }

    /// Drop the draft, leaving the committed value unchanged. No-op in
    /// Viewing; idempotent.
    pub fn cancel(&mut self) {
        self.state = EditorState::Viewing;
    }

    /// Replace the draft wholesale. No-op in Viewing.
    pub fn set_draft(&mut self, value: impl Into<String>) {
        if let EditorState::Editing { draft, .. } = &mut self.state {
            *draft = value.into();
        }
    }

    /// Append a character to the draft. No-op in Viewing.
    pub fn push_char(&mut self, c: char) {
        if let EditorState::Editing { draft, .. } = &mut self.state {
            draft.push(c);
        }
    }

    /// Remove the last character of the draft. No-op in Viewing.
    pub fn pop_char(&mut self) {
        if let EditorState::Editing { draft, .. } = &mut self.state {
            draft.pop();
        }
    }
}
