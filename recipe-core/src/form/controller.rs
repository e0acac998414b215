//! Binds a [`RecipeForm`] to a [`SaveTimer`].

use std::time::Duration;

use tracing::debug;

use super::{
    session::{CancelOutcome, FormEvent, RecipeForm, SaveCompletion, WriteOutcome},
    timer::{DEFAULT_SAVE_DELAY, ManualTimer, SaveTicket, SaveTimer},
};
use crate::{
    error::FormError,
    models::{RecipeDraft, RecipeField, Section},
};

/// A form session together with the timer that completes its saves.
///
/// Dropping the controller cancels a save still in flight, so a torn-down
/// session is never mutated by a late timer.
#[derive(Debug)]
pub struct FormController<T: SaveTimer> {
    form: RecipeForm,
    timer: T,
    save_delay: Duration,
}

impl<T: SaveTimer> FormController<T> {
    pub fn new(
        timer: T,
        save_delay: Duration,
    ) -> Self {
        Self {
            form: RecipeForm::new(),
            timer,
            save_delay,
        }
    }

    pub fn with_default_delay(timer: T) -> Self {
        Self::new(timer, DEFAULT_SAVE_DELAY)
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn save_delay(&self) -> Duration {
        self.save_delay
    }

    pub fn edit_field(
        &mut self,
        field: RecipeField,
        raw: &str,
    ) -> WriteOutcome {
        self.form.edit_field(field, raw)
    }

    pub fn edit_field_by_name(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<WriteOutcome, FormError> {
        self.form.edit_field_by_name(name, raw)
    }

    pub fn select_section(
        &mut self,
        section: Section,
    ) {
        self.form.select_section(section);
    }

    /// Submits the form and schedules the save when validation passes.
    pub fn submit(&mut self) -> Vec<FormEvent> {
        let events = self.form.submit();
        for event in &events {
            if let FormEvent::SubmissionStarted(ticket) = event {
                self.timer.schedule(*ticket, self.save_delay);
            }
        }
        events
    }

    pub fn cancel(
        &mut self,
        confirm: impl FnOnce(&RecipeDraft) -> bool,
    ) -> CancelOutcome {
        self.form.cancel(confirm)
    }

    /// Handles a timer firing for `ticket`.
    pub fn fire(
        &mut self,
        ticket: SaveTicket,
    ) -> Option<SaveCompletion> {
        self.form.finish_save(ticket)
    }
}

impl FormController<ManualTimer> {
    /// Controller on a virtual clock.
    pub fn manual(save_delay: Duration) -> Self {
        Self::new(ManualTimer::new(), save_delay)
    }

    /// Advances virtual time and completes every save that came due.
    pub fn advance(
        &mut self,
        by: Duration,
    ) -> Vec<SaveCompletion> {
        let due = self.timer.advance(by);
        due.into_iter().filter_map(|ticket| self.fire(ticket)).collect()
    }
}

impl<T: SaveTimer> Drop for FormController<T> {
    fn drop(&mut self) {
        if let Some(ticket) = self.form.pending_ticket() {
            debug!(%ticket, "form torn down; cancelling pending save");
            self.timer.cancel(ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::session::{SAVED_MESSAGE, SubmitStatus};

    fn fill(controller: &mut FormController<impl SaveTimer>) {
        for field in RecipeField::ALL {
            let value = if field.is_percentage() { "25" } else { "v" };
            controller.edit_field(field, value);
        }
    }

    /// Timer that records calls so tests can observe cancellation on drop.
    #[derive(Default, Clone)]
    struct SpyTimer {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl SaveTimer for SpyTimer {
        fn schedule(
            &mut self,
            ticket: SaveTicket,
            delay: Duration,
        ) {
            self.log
                .borrow_mut()
                .push(format!("schedule {ticket} {}ms", delay.as_millis()));
        }

        fn cancel(
            &mut self,
            ticket: SaveTicket,
        ) {
            self.log.borrow_mut().push(format!("cancel {ticket}"));
        }
    }

    #[test]
    fn valid_submit_schedules_with_configured_delay() {
        let mut controller = FormController::manual(Duration::from_millis(1500));
        fill(&mut controller);

        controller.submit();

        assert!(controller.timer().is_pending(SaveTicket::new(1)));
    }

    #[test]
    fn invalid_submit_schedules_nothing() {
        let mut controller = FormController::manual(DEFAULT_SAVE_DELAY);

        controller.submit();

        assert_eq!(controller.timer().pending_count(), 0);
    }

    #[test]
    fn save_completes_only_after_the_delay() {
        let mut controller = FormController::manual(Duration::from_millis(1500));
        fill(&mut controller);
        controller.submit();

        assert!(controller.advance(Duration::from_millis(1000)).is_empty());
        assert!(controller.form().is_submitting());

        let completed = controller.advance(Duration::from_millis(500));

        assert_eq!(completed.len(), 1);
        assert_eq!(
            completed[0].events,
            vec![FormEvent::Saved {
                message: SAVED_MESSAGE
            }]
        );
        assert_eq!(controller.form().status(), &SubmitStatus::Idle);
        assert!(controller.form().draft().is_empty());
    }

    #[test]
    fn resubmit_during_save_does_not_schedule_twice() {
        let mut controller = FormController::manual(DEFAULT_SAVE_DELAY);
        fill(&mut controller);
        controller.submit();

        assert!(controller.submit().is_empty());
        assert_eq!(controller.timer().pending_count(), 1);
    }

    #[test]
    fn edits_during_save_are_accepted_then_discarded_by_reset() {
        let mut controller = FormController::manual(DEFAULT_SAVE_DELAY);
        fill(&mut controller);
        controller.submit();

        assert_eq!(
            controller.edit_field(RecipeField::Remarks, "late note"),
            WriteOutcome::Stored
        );
        let completed = controller.advance(DEFAULT_SAVE_DELAY);

        assert_eq!(completed[0].record.remarks, "v");
        assert_eq!(controller.form().value(RecipeField::Remarks), "");
    }

    #[test]
    fn dropping_controller_cancels_pending_save() {
        let spy = SpyTimer::default();
        let log = spy.log.clone();
        {
            let mut controller = FormController::new(spy, Duration::from_millis(1500));
            fill(&mut controller);
            controller.submit();
        }

        assert_eq!(
            *log.borrow(),
            vec!["schedule save#1 1500ms".to_string(), "cancel save#1".to_string()]
        );
    }

    #[test]
    fn dropping_idle_controller_cancels_nothing() {
        let spy = SpyTimer::default();
        let log = spy.log.clone();

        drop(FormController::with_default_delay(spy));

        assert!(log.borrow().is_empty());
    }
}
