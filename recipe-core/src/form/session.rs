//! Session-scoped state of one recipe form.
//!
//! [`RecipeForm`] owns the draft, the error set, the selected section and the
//! submission status. Every user action is a method that mutates that state
//! and returns the events a host has to render. Nothing in here touches a
//! clock; the deferred save is completed by feeding its [`SaveTicket`] back
//! through [`RecipeForm::finish_save`].

use tracing::{debug, info, warn};

use super::{
    filter::{Admission, filter_write},
    percentages::PercentageSummary,
    progress::progress,
    timer::SaveTicket,
    validation::{ErrorSet, validate},
};
use crate::{
    error::FormError,
    models::{RecipeDraft, RecipeField, RecipeRecord, Section},
};

/// Toast text for a completed save.
pub const SAVED_MESSAGE: &str = "Recipe saved successfully!";

/// Toast text for a submit blocked by validation.
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fill all required fields";

/// Where the submission state machine currently is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// A save is scheduled. `record` is the draft as it was when submitted.
    Submitting {
        ticket: SaveTicket,
        record: RecipeRecord,
    },
}

/// The two outcomes a host notification area must show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Success(&'static str),
    ValidationFailure(&'static str),
}

/// Observable effects of a form command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Submit was blocked; `invalid` fields need input.
    ValidationFailed {
        message: &'static str,
        invalid: usize,
    },
    /// Host should scroll to and focus this field.
    FocusField(RecipeField),
    /// Validation passed and a save was scheduled.
    SubmissionStarted(SaveTicket),
    /// The scheduled save completed and the form was cleared.
    Saved { message: &'static str },
}

impl FormEvent {
    /// The toast this event maps to, if any.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Self::ValidationFailed { message, .. } => {
                Some(Notification::ValidationFailure(*message))
            }
            Self::Saved { message } => Some(Notification::Success(*message)),
            _ => None,
        }
    }
}

/// Result of offering user input to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The value was stored.
    Stored,
    /// The input filter refused the value; the field keeps its last value.
    Rejected,
}

/// Result of a cancel request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Draft and errors were cleared.
    Reset,
    /// The user declined the discard confirmation.
    Declined,
    /// A save is in flight; cancel is unavailable.
    Ignored,
}

/// A finished deferred save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCompletion {
    pub ticket: SaveTicket,
    /// What was submitted, for the persistence collaborator.
    pub record: RecipeRecord,
    pub events: Vec<FormEvent>,
}

/// State of one recipe-entry session.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    draft: RecipeDraft,
    errors: ErrorSet,
    section: Section,
    status: SubmitStatus,
    last_ticket: Option<SaveTicket>,
}

impl RecipeForm {
    /// A fresh session: empty draft, no errors, all sections shown.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── queries ─────────────────────────────────────────────────────────

    pub fn draft(&self) -> &RecipeDraft {
        &self.draft
    }

    pub fn value(
        &self,
        field: RecipeField,
    ) -> &str {
        self.draft.get(field)
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting { .. })
    }

    /// Ticket of the save in flight, if any.
    pub fn pending_ticket(&self) -> Option<SaveTicket> {
        match &self.status {
            SubmitStatus::Submitting { ticket, .. } => Some(*ticket),
            SubmitStatus::Idle => None,
        }
    }

    /// Snapshot of the draft that is being saved.
    pub fn submitted_record(&self) -> Option<&RecipeRecord> {
        match &self.status {
            SubmitStatus::Submitting { record, .. } => Some(record),
            SubmitStatus::Idle => None,
        }
    }

    /// Completion percentage of the current draft.
    pub fn progress(&self) -> u8 {
        progress(&self.draft)
    }

    /// Fields rendered under the current section.
    pub fn visible_fields(&self) -> Vec<RecipeField> {
        self.section.visible_fields()
    }

    /// Invalid fields the current section does not render. Hosts use this to
    /// point the user at errors on another tab.
    pub fn hidden_errors(&self) -> Vec<RecipeField> {
        self.errors
            .fields()
            .filter(|field| !self.section.shows(*field))
            .collect()
    }

    pub fn percentage_summary(&self) -> PercentageSummary {
        PercentageSummary::from_draft(&self.draft)
    }

    // ─── commands ────────────────────────────────────────────────────────

    /// Offers user input to `field`.
    ///
    /// Accepted input replaces the stored value and drops any error shown for
    /// that field, whether or not the new value would pass validation.
    /// Edits are allowed while a save is in flight.
    pub fn edit_field(
        &mut self,
        field: RecipeField,
        raw: &str,
    ) -> WriteOutcome {
        let Admission::Accepted(value) = filter_write(field, raw) else {
            return WriteOutcome::Rejected;
        };

        self.draft.set(field, value);
        if self.errors.clear_field(field) {
            debug!(%field, "stale error cleared");
        }
        debug!(%field, progress = self.progress(), "field updated");
        WriteOutcome::Stored
    }

    /// [`edit_field`](Self::edit_field) addressed by wire name.
    pub fn edit_field_by_name(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<WriteOutcome, FormError> {
        let field =
            RecipeField::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        Ok(self.edit_field(field, raw))
    }

    /// Switches the rendered section. Draft and errors are untouched.
    pub fn select_section(
        &mut self,
        section: Section,
    ) {
        if self.section != section {
            debug!(from = %self.section, to = %section, "section changed");
        }
        self.section = section;
    }

    /// Validates the whole draft and, when it passes, schedules the save.
    ///
    /// * Already submitting: no-op, no events.
    /// * Invalid: stays idle, stores the error set, emits
    ///   [`FormEvent::ValidationFailed`] then [`FormEvent::FocusField`] for the
    ///   first invalid field in canonical order.
    /// * Valid: enters `Submitting` and emits [`FormEvent::SubmissionStarted`]
    ///   carrying the ticket the host must schedule.
    pub fn submit(&mut self) -> Vec<FormEvent> {
        if let Some(ticket) = self.pending_ticket() {
            debug!(%ticket, "submit ignored while saving");
            return Vec::new();
        }

        self.errors = validate(&self.draft);

        if let Some(first) = self.errors.first_invalid() {
            info!(
                invalid = self.errors.len(),
                focus = %first,
                "submit blocked by validation"
            );
            return vec![
                FormEvent::ValidationFailed {
                    message: VALIDATION_FAILED_MESSAGE,
                    invalid: self.errors.len(),
                },
                FormEvent::FocusField(first),
            ];
        }

        let summary = self.percentage_summary();
        if !summary.is_balanced() {
            debug!(total = ?summary.total, "percentages do not total 100; not enforced");
        }

        let ticket = self
            .last_ticket
            .map_or_else(|| SaveTicket::new(1), SaveTicket::next);
        self.last_ticket = Some(ticket);
        self.status = SubmitStatus::Submitting {
            ticket,
            record: RecipeRecord::from(&self.draft),
        };
        info!(%ticket, "recipe submitted");
        vec![FormEvent::SubmissionStarted(ticket)]
    }

    /// Completes the save for `ticket`: clears draft and errors, returns to
    /// idle and emits [`FormEvent::Saved`].
    ///
    /// Returns `None` for a ticket that is not the one in flight.
    pub fn finish_save(
        &mut self,
        ticket: SaveTicket,
    ) -> Option<SaveCompletion> {
        if self.pending_ticket() != Some(ticket) {
            warn!(%ticket, "ignoring stale save ticket");
            return None;
        }

        let SubmitStatus::Submitting { record, .. } = std::mem::take(&mut self.status) else {
            return None;
        };
        self.draft.reset();
        self.errors.clear();
        info!(%ticket, "recipe saved; form reset");

        Some(SaveCompletion {
            ticket,
            record,
            events: vec![FormEvent::Saved {
                message: SAVED_MESSAGE,
            }],
        })
    }

    /// Discards the draft.
    ///
    /// Unavailable while submitting. An empty draft resets without asking;
    /// otherwise `confirm` decides.
    pub fn cancel(
        &mut self,
        confirm: impl FnOnce(&RecipeDraft) -> bool,
    ) -> CancelOutcome {
        if self.is_submitting() {
            debug!("cancel ignored while saving");
            return CancelOutcome::Ignored;
        }
        if !self.draft.is_empty() && !confirm(&self.draft) {
            debug!("cancel declined");
            return CancelOutcome::Declined;
        }

        self.draft.reset();
        self.errors.clear();
        info!("recipe draft discarded");
        CancelOutcome::Reset
    }
}
