// src/models.rs
mod action;
mod progress;

pub use action::Action;
pub use progress::Progress;
