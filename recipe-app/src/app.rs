//! Top-level state: logged out, or signed in on the home screen.

use std::sync::Arc;

use recipe_core::{RecipeRepository, form::SaveCompletion};
use tracing::info;

use crate::{
    config::AppConfig,
    home::{Home, Services},
    login::{Credentials, LoginError, LoginGate},
    notify::Notifier,
};

enum AppState {
    LoggedOut,
    LoggedIn(Home),
}

pub struct App {
    gate: LoginGate,
    services: Services,
    breakpoint: u32,
    state: AppState,
}

impl App {
    pub fn new(
        config: &AppConfig,
        repository: Arc<dyn RecipeRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gate: LoginGate::new(config.login_delay()),
            services: Services {
                repository,
                notifier,
                save_delay: config.save_delay(),
            },
            breakpoint: config.narrow_viewport_px,
            state: AppState::LoggedOut,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, AppState::LoggedIn(_))
    }

    pub fn home(&self) -> Option<&Home> {
        match &self.state {
            AppState::LoggedIn(home) => Some(home),
            AppState::LoggedOut => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut Home> {
        match &mut self.state {
            AppState::LoggedIn(home) => Some(home),
            AppState::LoggedOut => None,
        }
    }

    /// True while the open recipe page has a save in flight.
    pub fn is_saving(&self) -> bool {
        self.home()
            .and_then(Home::recipe)
            .is_some_and(|session| session.form().is_submitting())
    }

    /// Resolves when the open recipe page's pending save completes. Returns
    /// `None` at once when nothing is being saved.
    pub async fn finish_pending_save(&mut self) -> Option<SaveCompletion> {
        self.home_mut()?.recipe_mut()?.wait_for_save().await
    }

    /// Signs in and opens the home screen. A failed attempt leaves the
    /// current state alone.
    pub async fn login(
        &mut self,
        credentials: Credentials,
    ) -> Result<(), LoginError> {
        let user = self.gate.authenticate(credentials).await?;
        self.state = AppState::LoggedIn(Home::new(user, self.breakpoint, self.services.clone()));
        Ok(())
    }

    /// Drops the home screen together with any unsaved draft.
    pub fn logout(&mut self) {
        if let AppState::LoggedIn(home) = &self.state {
            info!(username = %home.user().username, "signed out");
        }
        self.state = AppState::LoggedOut;
    }
}
