use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::edition_pda;

use super::DvFactorAccount;

/// Accepting participants, payments and bets.
pub const STATUS_OPEN: u8 = 0;

/// Betting deadline passed. No new or modified bets; payments may still be
/// confirmed and resignations settled.
pub const STATUS_CLOSED: u8 = 1;

/// All resignations processed; payouts final.
pub const STATUS_FINISHED: u8 = 2;

/// Edition is one yearly run of the game.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Edition {
    /// The calendar year this edition runs in.
    pub year: u64,

    /// The entry fee in euro cents.
    pub entry_fee: u64,

    /// The jackpot in euro cents, seeded at creation and topped up via
    /// FundJackpot.
    pub jackpot: u64,

    /// Unix timestamp at which the edition starts.
    pub starts_at: i64,

    /// Unix timestamp after which bets may no longer be placed. The cutoff
    /// is enforced through the admin-driven status, not the clock.
    pub betting_deadline: i64,

    /// Unix timestamp at which the edition ends.
    pub ends_at: i64,

    /// Lifecycle status (STATUS_OPEN / STATUS_CLOSED / STATUS_FINISHED).
    /// Transitions are admin-driven and monotonic.
    pub status: u8,

    /// The number of resignations recorded for this edition so far. The
    /// next resignation gets rank resignation_count + 1.
    pub resignation_count: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// The total prize pool in euro cents: jackpot plus every confirmed
    /// payment. Updated synchronously on confirm/cancel and overwritten by
    /// RecalculatePool.
    pub total_pool: u64,

    /// The number of participants enrolled.
    pub participant_count: u64,

    /// The number of participants with a confirmed payment.
    pub confirmed_count: u64,

    /// Total winnings credited across all settlements, in euro cents.
    pub total_distributed: u64,
}

impl Edition {
    pub fn pda(&self) -> (Pubkey, u8) {
        edition_pda(self.year)
    }

    pub fn is_open(&self) -> bool {
        self.status == STATUS_OPEN
    }

    pub fn is_closed(&self) -> bool {
        self.status == STATUS_CLOSED
    }

    pub fn is_finished(&self) -> bool {
        self.status == STATUS_FINISHED
    }
}

account!(DvFactorAccount, Edition);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let mut edition = Edition::zeroed();
        assert!(edition.is_open());
        edition.status = STATUS_CLOSED;
        assert!(edition.is_closed());
        assert!(!edition.is_open());
        edition.status = STATUS_FINISHED;
        assert!(edition.is_finished());
    }
}
