//! Host shell for the recipe form: login, navigation, the tokio-backed save
//! timer and the console front end.

pub mod app;
pub mod config;
pub mod console;
pub mod home;
pub mod logging;
pub mod login;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod timer;
