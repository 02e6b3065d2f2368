use log::{debug, info};
use thiserror::Error;

use crate::backend::{BackendError, LedgerStore};
use crate::bot::event::{MessageEvent, MessageOutcome};
use crate::core::{parse_contribution, Amount, Goal, Ledger, LedgerError, ProgressCard};

#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Store(#[from] BackendError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub type BotResult<T> = Result<T, BotError>;

/// The application context: one goal, one ledger store. Platform
/// glue constructs this once and passes events and commands in.
///
/// Operations run load-mutate-save to completion against the store,
/// which assumes sequential message handling. A host that handles
/// messages concurrently must serialize calls with a mutual-exclusion
/// guard around this context to avoid lost updates.
pub struct Bot<S: LedgerStore> {
    store: S,
    goal: Goal,
}

impl<S: LedgerStore> Bot<S> {
    pub fn new(store: S, goal: Goal) -> Bot<S> {
        return Bot { store, goal };
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    /// Handles a channel message end to end. Bot authors are dropped
    /// before parsing; text that is not a contribution is left for
    /// command routing; everything else goes into the ledger.
    pub fn handle_message(&self, event: &MessageEvent) -> BotResult<MessageOutcome> {
        if event.author_is_bot {
            return Ok(MessageOutcome::Ignored);
        }

        let amount = match parse_contribution(&event.content) {
            Some(amount) => amount,
            None => return Ok(MessageOutcome::NotAContribution),
        };

        let card = self.contribute(amount)?;
        debug!("contribution from {} in {}", event.author, event.channel);

        return Ok(MessageOutcome::Recorded {
            amount,
            confirmation: self.goal.confirmation(amount),
            card,
        });
    }

    /// Records one contribution (load, deposit, save) and renders
    /// the updated progress.
    pub fn contribute(&self, amount: Amount) -> BotResult<ProgressCard> {
        let mut ledger = self.store.load()?;
        let total = ledger.deposit(amount)?;
        self.store.save(&ledger)?;

        info!("recorded contribution {}, saved total now {}", amount, total);
        return Ok(self.goal.card(total));
    }

    /// The `balance` command: current progress, no mutation.
    pub fn balance(&self) -> BotResult<ProgressCard> {
        let ledger = self.store.load()?;
        return Ok(self.goal.card(ledger.saved()));
    }

    /// The `reset` command: empties the ledger and renders the zero
    /// state. Deciding who may invoke this is the command router's
    /// job; the core applies it unconditionally.
    pub fn reset(&self) -> BotResult<ProgressCard> {
        let ledger = Ledger::new();
        self.store.save(&ledger)?;
        info!("ledger reset to zero");
        return Ok(self.goal.card(ledger.saved()));
    }
}
