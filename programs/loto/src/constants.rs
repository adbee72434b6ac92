/// Maximum number of tickets a single session accepts.
pub const MAX_TICKETS: usize = 10;

/// Numbers in the winning set and on every ticket.
pub const NUMBERS_PER_SET: usize = 6;

/// Smallest number that may be drawn or played.
pub const NUMBER_MIN: i64 = 1;

/// Largest number that may be drawn or played.
pub const NUMBER_MAX: i64 = 38;

/// Payout in cents, indexed by match count.
///
/// 3 matches pay $5.00, 4 pay $50.00, 5 pay $1,500.00 and
/// 6 pay the $500,000.00 jackpot.
pub const PRIZE_TABLE: [u64; NUMBERS_PER_SET + 1] = [0, 0, 0, 500, 5_000, 150_000, 50_000_000];

pub const CENTS_PER_UNIT: u64 = 100;
