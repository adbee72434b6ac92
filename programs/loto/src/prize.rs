use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::*;

/// Amount in cents.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Payout {
    cents: u64,
}

impl Payout {
    pub const ZERO: Payout = Payout::from_cents(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(self) -> u64 {
        self.cents
    }

    pub fn is_prize(self) -> bool {
        self.cents > 0
    }
}

impl std::ops::Add for Payout {
    type Output = Payout;

    fn add(self, rhs: Payout) -> Payout {
        Payout::from_cents(self.cents + rhs.cents)
    }
}

impl std::iter::Sum for Payout {
    fn sum<I: Iterator<Item = Payout>>(iter: I) -> Payout {
        iter.fold(Payout::ZERO, |acc, p| acc + p)
    }
}

/// Renders as `$1,500.00`.
impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = (self.cents() / CENTS_PER_UNIT).to_string();
        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, digit) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        write!(f, "${}.{:02}", grouped, self.cents() % CENTS_PER_UNIT)
    }
}

/// Fixed lookup from match count to payout.
pub struct PrizeTable;

impl PrizeTable {
    /// Payout for `match_count` matches. Counts above the set size pay nothing.
    pub fn payout(match_count: u8) -> Payout {
        PRIZE_TABLE
            .get(usize::from(match_count))
            .copied()
            .map(Payout::from_cents)
            .unwrap_or(Payout::ZERO)
    }

    pub fn is_jackpot(match_count: u8) -> bool {
        usize::from(match_count) == NUMBERS_PER_SET
    }

    /// Tiers that pay something, lowest first.
    pub fn winning_tiers() -> impl Iterator<Item = (u8, Payout)> {
        (0..=NUMBERS_PER_SET as u8)
            .map(|count| (count, PrizeTable::payout(count)))
            .filter(|(_, payout)| payout.is_prize())
    }
}
