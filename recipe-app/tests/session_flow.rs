//! Shell-level flows on tokio's paused clock: login, recipe save through the
//! tokio timer, and teardown of a session with a save still pending.

use std::{sync::Arc, time::Duration};

use pretty_assertions::assert_eq;
use recipe_app::{
    app::App,
    config::AppConfig,
    home::Page,
    login::{Credentials, LoginError},
    navigation::MenuItem,
    notify::RecordingNotifier,
    session::RecipeSession,
};
use recipe_core::{
    RecipeField, RecipeRepository,
    db::InMemoryRecipeRepository,
    form::{CancelOutcome, Notification, SAVED_MESSAGE, VALIDATION_FAILED_MESSAGE},
};

const SAVE_DELAY: Duration = Duration::from_millis(1500);

fn fill(session: &mut RecipeSession) {
    for field in RecipeField::ALL {
        let value = if field.is_percentage() { "25" } else { "x" };
        session.edit_field(field, value);
    }
}

struct Harness {
    repo: Arc<InMemoryRecipeRepository>,
    notifier: Arc<RecordingNotifier>,
}

impl Harness {
    fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryRecipeRepository::new()),
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    fn session(&self) -> RecipeSession {
        RecipeSession::new(SAVE_DELAY, self.repo.clone(), self.notifier.clone())
    }

    fn app(&self) -> App {
        App::new(&AppConfig::default(), self.repo.clone(), self.notifier.clone())
    }
}

// ─── RecipeSession ───────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn valid_submit_is_stored_and_announced() {
    let harness = Harness::new();
    let mut session = harness.session();
    fill(&mut session);

    session.submit();
    let started = tokio::time::Instant::now();
    let completion = session.wait_for_save().await.unwrap();

    assert!(started.elapsed() >= SAVE_DELAY);
    assert_eq!(completion.record.lot_no, "x");
    assert_eq!(harness.repo.count().await.unwrap(), 1);
    assert_eq!(harness.notifier.seen(), vec![Notification::Success(SAVED_MESSAGE)]);
    assert!(session.form().draft().is_empty());
}

#[tokio::test(start_paused = true)]
async fn invalid_submit_only_notifies() {
    let harness = Harness::new();
    let mut session = harness.session();

    session.submit();

    assert_eq!(session.wait_for_save().await, None);
    assert_eq!(
        harness.notifier.seen(),
        vec![Notification::ValidationFailure(VALIDATION_FAILED_MESSAGE)]
    );
    assert_eq!(harness.repo.count().await.unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn process_due_completes_fired_saves_without_blocking() {
    let harness = Harness::new();
    let mut session = harness.session();
    fill(&mut session);
    session.submit();

    assert!(session.process_due().await.is_empty());
    tokio::time::sleep(SAVE_DELAY + Duration::from_millis(1)).await;
    let done = session.process_due().await;

    assert_eq!(done.len(), 1);
    assert!(!session.form().is_submitting());
}

#[tokio::test(start_paused = true)]
async fn cancel_is_ignored_while_saving() {
    let harness = Harness::new();
    let mut session = harness.session();
    fill(&mut session);
    session.submit();

    assert_eq!(session.cancel(|_| true), CancelOutcome::Ignored);
    assert!(session.wait_for_save().await.is_some());
}

#[tokio::test(start_paused = true)]
async fn dropped_session_never_saves() {
    let harness = Harness::new();
    {
        let mut session = harness.session();
        fill(&mut session);
        session.submit();
    }

    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(harness.repo.count().await.unwrap(), 0);
    assert!(harness.notifier.seen().is_empty());
}

// ─── App / Home ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn login_opens_the_recipe_page() {
    let harness = Harness::new();
    let mut app = harness.app();

    assert_eq!(
        app.login(Credentials::new("", "pw")).await,
        Err(LoginError::MissingCredentials)
    );
    assert!(!app.is_logged_in());

    app.login(Credentials::new("chemist", "pw")).await.unwrap();

    let home = app.home().unwrap();
    assert_eq!(home.user().username, "chemist");
    assert_eq!(home.sidebar().active(), MenuItem::LabRecipe);
    assert!(!home.sidebar().is_open());
    assert!(home.recipe().is_some());
}

#[tokio::test(start_paused = true)]
async fn navigating_away_drops_the_pending_save() {
    let harness = Harness::new();
    let mut app = harness.app();
    app.login(Credentials::new("chemist", "pw")).await.unwrap();
    let home = app.home_mut().unwrap();
    let session = home.recipe_mut().unwrap();
    fill(session);
    session.submit();

    home.select(MenuItem::Inventory, 1280);
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(matches!(home.page(), Page::Placeholder(MenuItem::Inventory)));
    assert_eq!(harness.repo.count().await.unwrap(), 0);

    home.select(MenuItem::LabRecipe, 1280);
    let fresh = home.recipe().unwrap();
    assert!(fresh.form().draft().is_empty());
    assert!(!fresh.form().is_submitting());
}

#[tokio::test(start_paused = true)]
async fn reselecting_lab_recipe_keeps_the_draft() {
    let harness = Harness::new();
    let mut app = harness.app();
    app.login(Credentials::new("chemist", "pw")).await.unwrap();
    let home = app.home_mut().unwrap();
    home.recipe_mut().unwrap().edit_field(RecipeField::Shade, "Navy");
    home.toggle_sidebar();
    assert!(home.sidebar().is_open());

    home.select(MenuItem::LabRecipe, 500);

    assert!(!home.sidebar().is_open());
    assert_eq!(home.recipe().unwrap().form().value(RecipeField::Shade), "Navy");
}

#[tokio::test(start_paused = true)]
async fn logout_discards_everything() {
    let harness = Harness::new();
    let mut app = harness.app();
    app.login(Credentials::new("chemist", "pw")).await.unwrap();
    let session = app.home_mut().unwrap().recipe_mut().unwrap();
    fill(session);
    session.submit();

    app.logout();
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert!(app.home().is_none());
    assert_eq!(harness.repo.count().await.unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn pending_save_completes_without_further_input() {
    let harness = Harness::new();
    let mut app = harness.app();
    app.login(Credentials::new("chemist", "pw")).await.unwrap();
    assert!(!app.is_saving());
    assert_eq!(app.finish_pending_save().await, None);

    let session = app.home_mut().unwrap().recipe_mut().unwrap();
    fill(session);
    session.submit();
    assert!(app.is_saving());

    let started = tokio::time::Instant::now();
    let done = tokio::time::timeout(SAVE_DELAY * 2, app.finish_pending_save())
        .await
        .expect("save should finish on its own");

    assert!(done.is_some());
    assert!(started.elapsed() >= SAVE_DELAY);
    assert!(!app.is_saving());
    assert_eq!(harness.notifier.seen(), vec![Notification::Success(SAVED_MESSAGE)]);
    assert_eq!(harness.repo.count().await.unwrap(), 1);
}
