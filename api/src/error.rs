use steel::*;

/// DV-Factor program error codes
/// Range 1000-1999: Game errors
/// Range 2000-2999: Validation errors
/// Range 3000-3999: Configuration and system errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, IntoPrimitive)]
#[repr(u32)]
pub enum DvFactorError {
    // Game Errors (1000-1999)
    #[error("Edition is not open")]
    EditionNotOpen = 1001,

    #[error("Invalid edition status transition")]
    InvalidStatusTransition = 1002,

    #[error("Edition is already finished")]
    EditionFinished = 1003,

    #[error("Participant payment is not confirmed")]
    PaymentNotConfirmed = 1004,

    #[error("Participant payment is already confirmed")]
    PaymentAlreadyConfirmed = 1005,

    #[error("User already joined this edition")]
    AlreadyJoined = 1006,

    #[error("Employee is not active")]
    EmployeeNotActive = 1007,

    #[error("Employee has not resigned")]
    NotResigned = 1008,

    #[error("Resignation has already been settled")]
    AlreadySettled = 1009,

    #[error("No pending winnings to claim")]
    NothingToClaim = 1010,

    // Validation Errors (2000-2999)
    #[error("Signer is not the account authority")]
    InvalidAuthority = 2001,

    #[error("Signer is not the admin")]
    NotAdmin = 2002,

    #[error("Invalid amount")]
    InvalidAmount = 2003,

    #[error("Employee selections must be pairwise distinct")]
    DuplicateSelection = 2004,

    #[error("Bonus selection must be one of the three picks")]
    InvalidBonusSelection = 2005,

    #[error("Resignation date falls outside the edition year")]
    DateOutsideEdition = 2006,

    #[error("Account belongs to a different edition")]
    WrongEdition = 2007,

    #[error("Invalid account provided")]
    InvalidAccount = 2008,

    // Configuration and System Errors (3000-3999)
    #[error("No payout table entry for this month and selector count")]
    PayoutEntryMissing = 3001,

    #[error("Arithmetic operation overflowed")]
    ArithmeticOverflow = 3002,
}

error!(DvFactorError);
