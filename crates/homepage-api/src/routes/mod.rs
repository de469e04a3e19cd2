//! Route modules. Each exposes a `router()` merged into the application
//! in [`crate::app`].

pub mod health;
pub mod home;
