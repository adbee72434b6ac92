use anchor_lang::prelude::*;

use crate::state::Ticket;

/// Signal category attached to every outcome. The presentation layer picks
/// how to render each one (color, tone or nothing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Info,
    Success,
    Error,
    Jackpot,
}

impl Feedback {
    pub fn for_ticket(ticket: &Ticket) -> Self {
        if ticket.is_jackpot() {
            Feedback::Jackpot
        } else if ticket.is_winner() {
            Feedback::Success
        } else {
            Feedback::Info
        }
    }

    /// Maps an operation result to its signal. Every error is `Error`.
    pub fn for_result<T>(result: &Result<T>, on_ok: impl FnOnce(&T) -> Feedback) -> Self {
        match result {
            Ok(value) => on_ok(value),
            Err(_) => Feedback::Error,
        }
    }
}
