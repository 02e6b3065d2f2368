mod event;
mod handler;

pub use event::{MessageEvent, MessageOutcome};
pub use handler::{Bot, BotError, BotResult};
