use serde::{Deserialize, Serialize};

use crate::core::{Amount, ProgressCard};

/// An inbound channel message, as delivered by whatever platform the
/// bot is connected to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MessageEvent {
    /// Who wrote the message. Carried for logging and for a future
    /// contribution gate; amounts are never attributed to it.
    pub author: String,
    /// Channel the message arrived in.
    pub channel: String,
    /// True for messages written by this bot or any other bot account.
    #[serde(default)]
    pub author_is_bot: bool,
    /// Raw message text.
    pub content: String,
}

/// What became of an inbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum MessageOutcome {
    /// Bot author; dropped before parsing.
    Ignored,
    /// The text is not a contribution. Not an error; the routing
    /// collaborator should try command dispatch instead.
    NotAContribution,
    /// A contribution went into the ledger.
    Recorded {
        amount: Amount,
        /// Short acknowledgement line to post alongside the card.
        confirmation: String,
        card: ProgressCard,
    },
}
