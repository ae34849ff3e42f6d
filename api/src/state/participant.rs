use serde::{Deserialize, Serialize};
use steel::*;

use crate::state::participant_pda;

use super::DvFactorAccount;

/// Participant is a user's enrollment in one edition. The PDA derivation
/// over (edition year, authority) guarantees at most one enrollment per
/// user per edition.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Participant {
    /// The user this enrollment belongs to.
    pub authority: Pubkey,

    /// The edition year this enrollment is for.
    pub edition_year: u64,

    /// The payment amount in euro cents. Defaults to the edition's entry
    /// fee at join time.
    pub payment_amount: u64,

    /// Whether the admin confirmed the payment (0/1). Only confirmed
    /// payments count toward the pool.
    pub payment_confirmed: u8,

    /// Whether the user has placed a bet for this edition (0/1).
    pub has_bet: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// Unix timestamp the payment was confirmed at (0 = not confirmed).
    pub payment_date: i64,

    /// Unix timestamp the enrollment was created at.
    pub created_at: i64,
}

impl Participant {
    pub fn pda(&self) -> (Pubkey, u8) {
        participant_pda(self.edition_year, self.authority)
    }

    pub fn confirmed(&self) -> bool {
        self.payment_confirmed == 1
    }

    pub fn set_confirmed(&mut self, confirmed: bool, date: i64) {
        self.payment_confirmed = if confirmed { 1 } else { 0 };
        self.payment_date = date;
    }
}

account!(DvFactorAccount, Participant);
