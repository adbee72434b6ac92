use std::num::IntErrorKind;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::LotoError;

/// Checks a candidate against the range and the numbers already chosen
/// for the same set. Other tickets and the draw are never consulted.
pub fn validate(candidate: i64, already_chosen: &[u8]) -> Result<()> {
    require!(
        (NUMBER_MIN..=NUMBER_MAX).contains(&candidate),
        LotoError::OutOfRange
    );
    require!(
        !already_chosen.iter().any(|&n| i64::from(n) == candidate),
        LotoError::Duplicate
    );
    Ok(())
}

/// Parses one raw token. Integers too wide for `i64` are still integers,
/// so they are reported as out of range.
pub fn parse(token: &str) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => LotoError::OutOfRange.into(),
        _ => LotoError::NotANumber.into(),
    })
}

/// Parses and validates a token, returning the accepted number.
pub fn accept(token: &str, already_chosen: &[u8]) -> Result<u8> {
    let candidate = parse(token)?;
    validate(candidate, already_chosen)?;
    u8::try_from(candidate).map_err(|_| LotoError::OutOfRange.into())
}
