use anchor_lang::prelude::*;

use crate::constants::MAX_TICKETS;
use crate::error::LotoError;
use crate::input::{InputSource, NumberSet};
use crate::state::{LotterySession, Ticket};

use super::collect_numbers;

/// Reads one ticket, scores it against the draw and appends it.
///
/// Checks, in order:
/// 1. The draw has been declared.
/// 2. Fewer than `MAX_TICKETS` tickets are registered.
///
/// The ticket is appended only after all six numbers are accepted.
pub fn process_register_ticket(
    session: &mut LotterySession,
    input: &mut dyn InputSource,
) -> Result<Ticket> {
    let winning = session
        .winning_numbers
        .ok_or(LotoError::WinningNumbersNotDeclared)?;
    require!(
        session.tickets.len() < MAX_TICKETS,
        LotoError::CapacityExceeded
    );

    let index = session.tickets.len();
    let numbers = collect_numbers(input, NumberSet::Ticket(index))?;
    let ticket = Ticket::score(numbers, &winning)?;
    session.tickets.push(ticket);

    msg!(
        "Ticket {}/{}: {} matches: {} prize: {}",
        index + 1,
        MAX_TICKETS,
        ticket,
        ticket.match_count(),
        ticket.payout()
    );
    if ticket.is_jackpot() {
        msg!("Jackpot on ticket {}", index + 1);
    }

    Ok(ticket)
}
