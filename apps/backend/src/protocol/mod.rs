//! Wire types for the Slack transport.

pub mod slack;

pub use slack::{SlackResponse, SlashCommand};
