//! Slack slash-command wire types and message formatting.

use serde::{Deserialize, Serialize};

use crate::domain::Participant;

/// Payload Slack posts to a slash-command endpoint
/// (`application/x-www-form-urlencoded`).
///
/// Every field is optional on the wire; `user_id` and `channel_id` are the
/// only ones gameplay relies on. The `token` field is Slack's deprecated
/// verification token and is deliberately ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlashCommand {
    pub token: String,
    pub team_id: String,
    pub team_domain: String,
    pub enterprise_id: String,
    pub enterprise_name: String,
    pub channel_id: String,
    pub channel_name: String,
    pub user_id: String,
    pub user_name: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
    pub trigger_id: String,
}

/// Response body for a slash command.
///
/// `ephemeral` is shown only to the caller; `in_channel` is visible to the
/// whole channel. Game rule violations always come back ephemeral.
#[derive(Debug, Clone, Serialize)]
pub struct SlackResponse {
    pub response_type: &'static str,
    pub text: String,
}

impl SlackResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: "ephemeral",
            text: text.into(),
        }
    }

    pub fn in_channel(text: impl Into<String>) -> Self {
        Self {
            response_type: "in_channel",
            text: text.into(),
        }
    }
}

/// Slack mention markup for a user id.
pub fn mention(id: &str) -> String {
    format!("<@{id}>")
}

/// Final scoreboard announcement, posted to the channel when a round ends.
pub fn final_scoreboard(entries: &[Participant]) -> String {
    let mut text = String::from("[FireFight Scoreboard]\n");
    for (rank, p) in entries.iter().enumerate() {
        text.push_str(&format!(
            "#{}: {:>2}pts - {}\n",
            rank + 1,
            p.score,
            mention(&p.id)
        ));
    }
    text
}

/// Mid-game scoreboard, shown only to the caller; annotates each entry with
/// its current status.
pub fn live_scoreboard(entries: &[Participant]) -> String {
    let mut text = String::from("[FireFight Scoreboard]\n");
    for (rank, p) in entries.iter().enumerate() {
        let status = if p.eliminated { "fragged" } else { "active" };
        text.push_str(&format!(
            "#{}: {:>2}pts - {} ({})\n",
            rank + 1,
            p.score,
            mention(&p.id),
            status
        ));
    }
    text
}
