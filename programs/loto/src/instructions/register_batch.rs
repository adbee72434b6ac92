use anchor_lang::prelude::*;

use crate::error::LotoError;
use crate::input::InputSource;
use crate::state::{LotterySession, Ticket};

use super::process_register_ticket;

/// Registers up to `requested` tickets in a row.
///
/// After each ticket but the last, `input.continue_batch` decides whether
/// to keep going. Tickets completed before an error stay registered; the
/// error is returned as is.
pub fn process_register_batch(
    session: &mut LotterySession,
    requested: usize,
    input: &mut dyn InputSource,
) -> Result<Vec<Ticket>> {
    require!(
        session.winning_numbers.is_some(),
        LotoError::WinningNumbersNotDeclared
    );
    require!(
        session.remaining_capacity() > 0,
        LotoError::CapacityExceeded
    );
    if requested < 1 || requested > session.remaining_capacity() {
        msg!(
            "Requested {} tickets, allowed 1 to {}",
            requested,
            session.remaining_capacity()
        );
        return err!(LotoError::InvalidBatchSize);
    }

    let mut registered = Vec::with_capacity(requested);
    for n in 0..requested {
        let ticket = process_register_ticket(session, input)?;
        registered.push(ticket);

        if n + 1 < requested && !input.continue_batch(&ticket) {
            msg!("Batch stopped after {} of {} tickets", n + 1, requested);
            break;
        }
    }

    Ok(registered)
}
