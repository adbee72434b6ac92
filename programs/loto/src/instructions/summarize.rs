use anchor_lang::prelude::*;

use crate::error::LotoError;
use crate::state::{LotterySession, Summary};

pub fn process_summarize(session: &LotterySession) -> Result<Summary> {
    let winning_numbers = session
        .winning_numbers
        .ok_or(LotoError::WinningNumbersNotDeclared)?;

    let tickets = session.tickets.clone();
    let tickets_won = tickets.iter().filter(|t| t.is_winner()).count() as u8;
    let total_payout = tickets.iter().map(|t| t.payout()).sum();

    Ok(Summary {
        winning_numbers,
        tickets_played: tickets.len() as u8,
        tickets_won,
        total_payout,
        tickets,
    })
}
