//! Async driver around a [`FormController`].
//!
//! The controller decides what happens; this type owns the tokio timer's
//! receiving end, hands completed records to the repository and turns form
//! events into toasts.

use std::{sync::Arc, time::Duration};

use recipe_core::{
    FormError, RecipeField, RecipeRepository, Section,
    form::{
        CancelOutcome, FormController, FormEvent, RecipeForm, SaveCompletion, SaveTicket,
        WriteOutcome,
    },
    models::RecipeDraft,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use crate::{notify::Notifier, timer::TokioSaveTimer};

pub struct RecipeSession {
    controller: FormController<TokioSaveTimer>,
    due: UnboundedReceiver<SaveTicket>,
    repository: Arc<dyn RecipeRepository>,
    notifier: Arc<dyn Notifier>,
}

impl RecipeSession {
    pub fn new(
        save_delay: Duration,
        repository: Arc<dyn RecipeRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let (timer, due) = TokioSaveTimer::new();
        Self {
            controller: FormController::new(timer, save_delay),
            due,
            repository,
            notifier,
        }
    }

    pub fn form(&self) -> &RecipeForm {
        self.controller.form()
    }

    pub fn edit_field(
        &mut self,
        field: RecipeField,
        raw: &str,
    ) -> WriteOutcome {
        self.controller.edit_field(field, raw)
    }

    pub fn edit_field_by_name(
        &mut self,
        name: &str,
        raw: &str,
    ) -> Result<WriteOutcome, FormError> {
        self.controller.edit_field_by_name(name, raw)
    }

    pub fn select_section(
        &mut self,
        section: Section,
    ) {
        self.controller.select_section(section);
    }

    pub fn submit(&mut self) -> Vec<FormEvent> {
        let events = self.controller.submit();
        self.announce(&events);
        events
    }

    pub fn cancel(
        &mut self,
        confirm: impl FnOnce(&RecipeDraft) -> bool,
    ) -> CancelOutcome {
        self.controller.cancel(confirm)
    }

    /// Waits for the save in flight to finish and persists it. Returns
    /// `None` straight away when nothing is being saved.
    pub async fn wait_for_save(&mut self) -> Option<SaveCompletion> {
        while self.controller.form().is_submitting() {
            let ticket = self.due.recv().await?;
            if let Some(done) = self.complete(ticket).await {
                return Some(done);
            }
        }
        None
    }

    /// Completes saves whose timer already fired, without waiting.
    pub async fn process_due(&mut self) -> Vec<SaveCompletion> {
        let mut done = Vec::new();
        while let Ok(ticket) = self.due.try_recv() {
            if let Some(completion) = self.complete(ticket).await {
                done.push(completion);
            }
        }
        done
    }

    async fn complete(
        &mut self,
        ticket: SaveTicket,
    ) -> Option<SaveCompletion> {
        let completion = self.controller.fire(ticket)?;

        // The form has already reset; a storage failure only loses the copy.
        match self.repository.save(completion.record.clone()).await {
            Ok(saved) => info!(id = saved.id, %ticket, "recipe stored"),
            Err(e) => error!(%ticket, error = %e, "failed to store recipe"),
        }
        self.announce(&completion.events);
        Some(completion)
    }

    fn announce(
        &self,
        events: &[FormEvent],
    ) {
        for notification in events.iter().filter_map(FormEvent::notification) {
            self.notifier.notify(notification);
        }
    }
}
