use anchor_lang::prelude::*;

use crate::constants::NUMBERS_PER_SET;
use crate::error::LotoError;
use crate::input::{InputSource, NumberSet, Prompt};
use crate::validator;

pub mod declare_winning_numbers;
pub mod register_batch;
pub mod register_ticket;
pub mod summarize;

pub use declare_winning_numbers::*;
pub use register_batch::*;
pub use register_ticket::*;
pub use summarize::*;

/// Fills one six-number set from `input`, asking again for the same position
/// until a token is accepted. Earlier positions are never revisited.
pub(crate) fn collect_numbers(
    input: &mut dyn InputSource,
    set: NumberSet,
) -> Result<[u8; NUMBERS_PER_SET]> {
    let mut numbers = [0u8; NUMBERS_PER_SET];
    for position in 0..NUMBERS_PER_SET {
        let prompt = Prompt { set, position };
        loop {
            let token = input.next_token(prompt).ok_or(LotoError::InputExhausted)?;
            match validator::accept(&token, &numbers[..position]) {
                Ok(number) => {
                    numbers[position] = number;
                    input.accepted(prompt, number);
                    break;
                }
                Err(e) => {
                    msg!("Rejected {:?} at position {}: {}", token, position + 1, e);
                    input.rejected(prompt, &e);
                }
            }
        }
    }
    Ok(numbers)
}
