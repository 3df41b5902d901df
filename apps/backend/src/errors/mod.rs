//! Error handling for the FireFight backend.

pub mod domain;

pub use domain::GameError;
