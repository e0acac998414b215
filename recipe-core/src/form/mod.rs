//! The recipe form engine.
//!
//! Input flows through the [`filter`] into the draft; [`validation`] runs on
//! submit; [`progress`] and section visibility are side-effect-free reads.
//! [`session::RecipeForm`] ties them together as one state machine and
//! [`controller::FormController`] attaches a [`timer::SaveTimer`].

pub mod controller;
pub mod filter;
pub mod percentages;
pub mod progress;
pub mod session;
pub mod timer;
pub mod validation;

pub use controller::FormController;
pub use filter::{Admission, filter_write, is_percentage_input};
pub use percentages::PercentageSummary;
pub use progress::progress;
pub use session::{
    CancelOutcome, FormEvent, Notification, RecipeForm, SAVED_MESSAGE, SaveCompletion,
    SubmitStatus, VALIDATION_FAILED_MESSAGE, WriteOutcome,
};
pub use timer::{DEFAULT_SAVE_DELAY, ManualTimer, SaveTicket, SaveTimer};
pub use validation::{ErrorSet, FieldViolation, REQUIRED_MESSAGE, ViolationKind, validate};
