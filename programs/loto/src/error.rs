use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum LotoError {
    // Per-number validation, the same position is asked for again
    #[msg("Input is not a valid number")]
    NotANumber,
    #[msg("Number out of range (1-38)")]
    OutOfRange,
    #[msg("Number already chosen in this set")]
    Duplicate,

    // Session errors, the requested operation is aborted
    #[msg("Winning numbers have not been declared yet")]
    WinningNumbersNotDeclared,
    #[msg("Winning numbers were already declared for this session")]
    WinningNumbersAlreadyDeclared,
    #[msg("Ticket limit reached")]
    CapacityExceeded,
    #[msg("Requested ticket count is not valid")]
    InvalidBatchSize,
    #[msg("Input source ran out of tokens")]
    InputExhausted,
}

impl LotoError {
    /// Returns true if `err` was raised from this variant.
    pub fn is(self, err: &Error) -> bool {
        error_code_number(err) == Some(u32::from(self))
    }

    /// True for the kinds that only reject one number and keep the set open.
    pub fn is_number_rejection(err: &Error) -> bool {
        [LotoError::NotANumber, LotoError::OutOfRange, LotoError::Duplicate]
            .into_iter()
            .any(|kind| kind.is(err))
    }
}

/// Anchor error code carried by `err`, if it is an Anchor error.
pub fn error_code_number(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(anchor_error) => Some(anchor_error.error_code_number),
        Error::ProgramError(_) => None,
    }
}
