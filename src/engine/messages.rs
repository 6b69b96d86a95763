//! Game messages to one player or to the table.

use im::Vector;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::Game;

/// Who a message is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    Player(PlayerId),
    Table,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub audience: Audience,
    pub text: String,
}

impl Game {
    /// Send a private message.
    pub fn whisper(&mut self, player: PlayerId, text: impl Into<String>) {
        let text = text.into();
        info!("[to {}] {}", self.player_name(player), text);
        self.messages.push_back(Message {
            audience: Audience::Player(player),
            text,
        });
    }

    /// Send a message to everyone.
    pub fn yell(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("{}", text);
        self.messages.push_back(Message {
            audience: Audience::Table,
            text,
        });
    }

    #[must_use]
    pub fn messages(&self) -> &Vector<Message> {
        &self.messages
    }

    /// Private messages sent to `player`, oldest first.
    pub fn whispers_for(&self, player: PlayerId) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(move |m| m.audience == Audience::Player(player))
            .map(|m| m.text.as_str())
    }
}
