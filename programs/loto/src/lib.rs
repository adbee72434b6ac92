use anchor_lang::prelude::*;
use instructions::*;

/// Session limits, number range and the prize table.
pub mod constants;

/// `LotoError`, the error codes every operation returns.
pub mod error;

/// Signals the presentation layer renders for each outcome.
pub mod feedback;

/// The input source trait and the scripted and console sources.
pub mod input;

/// One handler per session operation.
mod instructions;

/// Payout amounts and the match-count lookup.
pub mod prize;

/// Draw, ticket and session state, including their Borsh encoding.
pub mod state;

/// Per-number checks applied while a set is being entered.
pub mod validator;

pub use error::LotoError;
pub use feedback::Feedback;
pub use input::{InputSource, NumberSet, Prompt, ScriptedInput, TokenReader};
pub use prize::{Payout, PrizeTable};
pub use state::{LotterySession, Summary, Ticket, WinningNumbers};

/// Session operations. Each one runs to completion, including any
/// re-prompting, before returning.
impl LotterySession {
    pub fn declare_winning_numbers(
        &mut self,
        input: &mut dyn InputSource,
    ) -> Result<WinningNumbers> {
        process_declare_winning_numbers(self, input)
    }

    pub fn register_ticket(&mut self, input: &mut dyn InputSource) -> Result<Ticket> {
        process_register_ticket(self, input)
    }

    pub fn register_batch(
        &mut self,
        requested: usize,
        input: &mut dyn InputSource,
    ) -> Result<Vec<Ticket>> {
        process_register_batch(self, requested, input)
    }

    pub fn summarize(&self) -> Result<Summary> {
        process_summarize(self)
    }
}
