use anchor_lang::prelude::*;

use crate::error::LotoError;
use crate::input::{InputSource, NumberSet};
use crate::state::{LotterySession, WinningNumbers};

use super::collect_numbers;

/// Reads and stores the draw.
///
/// A session holds a single draw: once declared it can not be replaced, so
/// the scores of registered tickets always refer to it. Nothing is stored
/// unless all six numbers are accepted.
pub fn process_declare_winning_numbers(
    session: &mut LotterySession,
    input: &mut dyn InputSource,
) -> Result<WinningNumbers> {
    require!(
        session.winning_numbers.is_none(),
        LotoError::WinningNumbersAlreadyDeclared
    );

    let numbers = collect_numbers(input, NumberSet::Winning)?;
    let winning = WinningNumbers::new(numbers)?;
    session.winning_numbers = Some(winning);

    msg!("Winning numbers declared: {}", winning);

    Ok(winning)
}
