use std::{sync::Arc, time::Duration};

use recipe_core::RecipeRepository;
use tracing::debug;

use crate::{
    login::UserSession,
    navigation::{MenuItem, Sidebar},
    notify::Notifier,
    session::RecipeSession,
};

/// Collaborators every recipe session is built with.
#[derive(Clone)]
pub struct Services {
    pub repository: Arc<dyn RecipeRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub save_delay: Duration,
}

impl Services {
    pub fn new_session(&self) -> RecipeSession {
        RecipeSession::new(
            self.save_delay,
            self.repository.clone(),
            self.notifier.clone(),
        )
    }
}

/// What the main area shows.
pub enum Page {
    Recipe(RecipeSession),
    Placeholder(MenuItem),
}

impl Page {
    pub fn item(&self) -> MenuItem {
        match self {
            Self::Recipe(_) => MenuItem::LabRecipe,
            Self::Placeholder(item) => *item,
        }
    }
}

/// The signed-in screen: sidebar plus one page.
pub struct Home {
    user: UserSession,
    sidebar: Sidebar,
    page: Page,
    services: Services,
}

impl Home {
    /// Opens on the recipe form with a fresh session.
    pub fn new(
        user: UserSession,
        breakpoint: u32,
        services: Services,
    ) -> Self {
        Self {
            user,
            sidebar: Sidebar::new(breakpoint),
            page: Page::Recipe(services.new_session()),
            services,
        }
    }

    pub fn user(&self) -> &UserSession {
        &self.user
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    /// Navigates to `item`. Staying on Lab Recipe keeps the session;
    /// leaving it drops the session and any save still pending.
    pub fn select(
        &mut self,
        item: MenuItem,
        viewport_width: u32,
    ) {
        self.sidebar.select(item, viewport_width);
        if self.page.item() == item {
            return;
        }

        debug!(from = %self.page.item(), to = %item, "page changed");
        self.page = match item {
            MenuItem::LabRecipe => Page::Recipe(self.services.new_session()),
            other => Page::Placeholder(other),
        };
    }

    /// The live recipe session, when the recipe page is showing.
    pub fn recipe(&self) -> Option<&RecipeSession> {
        match &self.page {
            Page::Recipe(session) => Some(session),
            Page::Placeholder(_) => None,
        }
    }

    pub fn recipe_mut(&mut self) -> Option<&mut RecipeSession> {
        match &mut self.page {
            Page::Recipe(session) => Some(session),
            Page::Placeholder(_) => None,
        }
    }
}
