use std::fmt;
use std::io;

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::prize::{Payout, PrizeTable};
use crate::validator;

/// The drawn set a session scores tickets against.
#[derive(AnchorSerialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningNumbers {
    /// The six numbers in the order they were declared.
    numbers: [u8; NUMBERS_PER_SET],
}

impl WinningNumbers {
    /// Builds a draw from numbers that were already collected, applying the
    /// same checks as the interactive declaration.
    pub fn new(numbers: [u8; NUMBERS_PER_SET]) -> Result<Self> {
        check_set(&numbers)?;
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u8; NUMBERS_PER_SET] {
        &self.numbers
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }
}

impl fmt::Display for WinningNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_numbers(f, &self.numbers)
    }
}

/// Decoding applies the same checks as `WinningNumbers::new`.
impl AnchorDeserialize for WinningNumbers {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let numbers = <[u8; NUMBERS_PER_SET]>::deserialize_reader(reader)?;
        WinningNumbers::new(numbers).map_err(invalid_data)
    }
}

/// A scored player ticket.
#[derive(AnchorSerialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    /// The six numbers in the order they were entered.
    numbers: [u8; NUMBERS_PER_SET],

    /// How many of `numbers` appear in the draw, 0 to 6.
    match_count: u8,

    /// Prize for `match_count`, in cents.
    payout: Payout,
}

impl Ticket {
    /// Scores `numbers` against the draw. Each number is distinct within its
    /// set, so counting membership gives the size of the intersection.
    pub fn score(numbers: [u8; NUMBERS_PER_SET], winning: &WinningNumbers) -> Result<Self> {
        check_set(&numbers)?;
        let match_count = numbers.iter().filter(|&&n| winning.contains(n)).count() as u8;
        Ok(Self {
            numbers,
            match_count,
            payout: PrizeTable::payout(match_count),
        })
    }

    pub fn numbers(&self) -> &[u8; NUMBERS_PER_SET] {
        &self.numbers
    }

    pub fn match_count(&self) -> u8 {
        self.match_count
    }

    pub fn payout(&self) -> Payout {
        self.payout
    }

    pub fn is_winner(&self) -> bool {
        self.payout.is_prize()
    }

    pub fn is_jackpot(&self) -> bool {
        PrizeTable::is_jackpot(self.match_count)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_numbers(f, &self.numbers)
    }
}

/// A ticket decoded on its own has no draw to be scored against, so the
/// stored score is only accepted when it agrees with the prize table.
impl AnchorDeserialize for Ticket {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let numbers = <[u8; NUMBERS_PER_SET]>::deserialize_reader(reader)?;
        let match_count = u8::deserialize_reader(reader)?;
        let payout = Payout::deserialize_reader(reader)?;

        check_set(&numbers).map_err(invalid_data)?;
        if usize::from(match_count) > NUMBERS_PER_SET || payout != PrizeTable::payout(match_count) {
            return Err(invalid_data(format!(
                "ticket {:?} has match count {} with payout {}",
                numbers,
                match_count,
                payout
            )));
        }
        Ok(Self {
            numbers,
            match_count,
            payout,
        })
    }
}

/// State of one simulator run: at most one draw and up to `MAX_TICKETS`
/// tickets. Tickets are only ever appended.
#[derive(AnchorSerialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct LotterySession {
    /// The declared draw, `None` until declaration completes.
    pub(crate) winning_numbers: Option<WinningNumbers>,

    /// Registered tickets in registration order.
    #[max_len(10)]
    pub(crate) tickets: Vec<Ticket>,
}

impl LotterySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_winning_numbers(&self) -> bool {
        self.winning_numbers.is_some()
    }

    pub fn winning_numbers(&self) -> Option<&WinningNumbers> {
        self.winning_numbers.as_ref()
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_TICKETS.saturating_sub(self.tickets.len())
    }
}

/// Decoding re-scores every ticket against the decoded draw and rejects
/// anything a live session could not have reached.
impl AnchorDeserialize for LotterySession {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let winning_numbers = Option::<WinningNumbers>::deserialize_reader(reader)?;

        let len = u32::deserialize_reader(reader)? as usize;
        if len > MAX_TICKETS {
            return Err(invalid_data(format!(
                "{} tickets exceed the limit of {}",
                len, MAX_TICKETS
            )));
        }
        let winning = match winning_numbers {
            Some(winning) => winning,
            None if len == 0 => return Ok(Self::default()),
            None => return Err(invalid_data("tickets without winning numbers")),
        };

        let mut tickets = Vec::with_capacity(len);
        for _ in 0..len {
            let stored = Ticket::deserialize_reader(reader)?;
            let scored = Ticket::score(stored.numbers, &winning).map_err(invalid_data)?;
            if scored != stored {
                return Err(invalid_data(format!(
                    "ticket {} does not match its score against {}",
                    scored, winning
                )));
            }
            tickets.push(scored);
        }

        Ok(Self {
            winning_numbers: Some(winning),
            tickets,
        })
    }
}

/// Aggregated results returned by `summarize`.
#[derive(AnchorSerialize, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub winning_numbers: WinningNumbers,
    pub tickets: Vec<Ticket>,
    pub tickets_played: u8,
    pub tickets_won: u8,
    pub total_payout: Payout,
}

fn check_set(numbers: &[u8]) -> Result<()> {
    for (position, &number) in numbers.iter().enumerate() {
        validator::validate(i64::from(number), &numbers[..position])?;
    }
    Ok(())
}

fn invalid_data<E: ToString>(err: E) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err.to_string())
}

fn write_numbers(f: &mut fmt::Formatter<'_>, numbers: &[u8]) -> fmt::Result {
    write!(f, "[")?;
    for (i, n) in numbers.iter().enumerate() {
        if i > 0 {
            write!(f, "-")?;
        }
        write!(f, "{:02}", n)?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LotoError;

    fn draw() -> WinningNumbers {
        WinningNumbers::new([5, 12, 18, 25, 31, 37]).unwrap()
    }

    #[test]
    fn test_winning_numbers_keep_order() {
        assert_eq!(draw().numbers(), &[5, 12, 18, 25, 31, 37]);
        assert_eq!(draw().to_string(), "[05-12-18-25-31-37]");
    }

    #[test]
    fn test_winning_numbers_rejects_bad_sets() {
        let err = WinningNumbers::new([5, 12, 18, 25, 31, 39]).unwrap_err();
        assert!(LotoError::OutOfRange.is(&err));
        let err = WinningNumbers::new([5, 12, 18, 25, 12, 37]).unwrap_err();
        assert!(LotoError::Duplicate.is(&err));
    }

    #[test]
    fn test_ticket_scoring() {
        let ticket = Ticket::score([5, 12, 18, 1, 2, 3], &draw()).unwrap();
        assert_eq!(ticket.match_count(), 3);
        assert_eq!(ticket.payout(), Payout::from_cents(500));
        assert!(ticket.is_winner());
        assert!(!ticket.is_jackpot());

        let ticket = Ticket::score([37, 31, 25, 18, 12, 5], &draw()).unwrap();
        assert_eq!(ticket.match_count(), 6);
        assert_eq!(ticket.payout(), Payout::from_cents(50_000_000));
        assert!(ticket.is_jackpot());

        let ticket = Ticket::score([1, 2, 3, 4, 6, 7], &draw()).unwrap();
        assert_eq!(ticket.match_count(), 0);
        assert_eq!(ticket.payout(), Payout::ZERO);
        assert!(!ticket.is_winner());
    }

    #[test]
    fn test_session_fits_init_space() {
        let winning = draw();
        let session = LotterySession {
            winning_numbers: Some(winning),
            tickets: vec![Ticket::score([1, 2, 3, 4, 5, 6], &winning).unwrap(); MAX_TICKETS],
        };
        let mut encoded = Vec::new();
        session.serialize(&mut encoded).unwrap();
        assert_eq!(encoded.len(), LotterySession::INIT_SPACE);
        assert_eq!(LotterySession::try_from_slice(&encoded).unwrap(), session);
    }

    fn encoded_ticket(numbers: [u8; 6], match_count: u8, cents: u64) -> Vec<u8> {
        let mut bytes = numbers.to_vec();
        bytes.push(match_count);
        bytes.extend_from_slice(&cents.to_le_bytes());
        bytes
    }

    #[test]
    fn test_decode_rejects_overfull_session() {
        let mut bytes = vec![1, 5, 12, 18, 25, 31, 37];
        bytes.extend_from_slice(&11u32.to_le_bytes());
        for _ in 0..11 {
            bytes.extend(encoded_ticket([1, 2, 3, 4, 6, 7], 0, 0));
        }
        let err = LotterySession::try_from_slice(&bytes).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_decode_rejects_invalid_draw() {
        let bytes = [1, 0, 0, 99, 99, 200, 0, 0, 0, 0, 0];
        assert!(LotterySession::try_from_slice(&bytes).is_err());
        assert!(WinningNumbers::try_from_slice(&[5, 12, 18, 25, 12, 37]).is_err());
        assert_eq!(
            WinningNumbers::try_from_slice(&[5, 12, 18, 25, 31, 37]).unwrap(),
            draw()
        );
    }

    #[test]
    fn test_decode_rejects_wrong_scores() {
        // payout that is not the table value for the match count
        let bytes = encoded_ticket([1, 2, 3, 4, 6, 7], 6, 42);
        assert!(Ticket::try_from_slice(&bytes).is_err());

        // consistent with the table but not with the draw
        let mut bytes = vec![1, 5, 12, 18, 25, 31, 37];
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend(encoded_ticket([1, 2, 3, 4, 6, 7], 3, 500));
        assert!(LotterySession::try_from_slice(&bytes).is_err());

        // tickets with no draw to score them
        let mut bytes = vec![0];
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend(encoded_ticket([1, 2, 3, 4, 6, 7], 0, 0));
        assert!(LotterySession::try_from_slice(&bytes).is_err());
    }

    #[test]
    fn test_remaining_capacity_never_underflows() {
        let winning = draw();
        let session = LotterySession {
            winning_numbers: Some(winning),
            tickets: vec![Ticket::score([1, 2, 3, 4, 6, 7], &winning).unwrap(); MAX_TICKETS + 1],
        };
        assert_eq!(session.remaining_capacity(), 0);
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = LotterySession::new();
        assert!(!session.has_winning_numbers());
        assert_eq!(session.ticket_count(), 0);
        assert_eq!(session.remaining_capacity(), MAX_TICKETS);
    }
}
