use serde::{Deserialize, Serialize};
use steel::*;

use crate::consts::{BONUS_NONE, PICKS_PER_BET};
use crate::error::DvFactorError;
use crate::state::bet_pda;

use super::DvFactorAccount;

/// Bet is a user's single wager for one edition: three distinct employees
/// plus an optional Chiringuito bonus on one of them. The PDA derivation
/// over (edition year, authority) guarantees at most one bet per user per
/// edition; placing again overwrites the stored picks.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Bet {
    /// The user who placed this bet.
    pub authority: Pubkey,

    /// The edition year this bet is for.
    pub edition_year: u64,

    /// The three picked employee roster ids.
    pub picks: [u64; PICKS_PER_BET],

    /// Index into picks the Chiringuito bonus is on (BONUS_NONE = none).
    /// Storing an index keeps the bonus one of the three by construction.
    pub bonus_index: u8,

    /// Whether this bet is visible to other players (0/1). Revealed by the
    /// admin at the end of the game.
    pub is_revealed: u8,

    /// Padding for alignment.
    pub _padding: [u8; 6],

    /// Unix timestamp of the first submission.
    pub created_at: i64,

    /// Unix timestamp of the last overwrite.
    pub updated_at: i64,

    /// Winnings credited by settlements and not yet claimed, in euro cents.
    pub pending_winnings: u64,

    /// Total winnings credited across the edition, in euro cents.
    pub total_won: u64,
}

impl Bet {
    pub fn pda(&self) -> (Pubkey, u8) {
        bet_pda(self.edition_year, self.authority)
    }

    pub fn has_bonus(&self) -> bool {
        self.bonus_index != BONUS_NONE
    }

    pub fn revealed(&self) -> bool {
        self.is_revealed == 1
    }

    /// Whether this bet includes the given employee among its picks.
    pub fn picked(&self, employee_id: u64) -> bool {
        self.picks.contains(&employee_id)
    }

    /// Whether the Chiringuito bonus is on the given employee.
    pub fn bonus_on(&self, employee_id: u64) -> bool {
        match self.picks.get(self.bonus_index as usize) {
            Some(&id) => id == employee_id,
            None => false,
        }
    }
}

/// Validate a set of picks and a bonus index before storing them: the three
/// selections must be pairwise distinct and the bonus, if present, must
/// point at one of them.
pub fn validate_picks(
    picks: &[u64; PICKS_PER_BET],
    bonus_index: u8,
) -> Result<(), ProgramError> {
    for i in 0..PICKS_PER_BET {
        for j in (i + 1)..PICKS_PER_BET {
            if picks[i] == picks[j] {
                return Err(DvFactorError::DuplicateSelection.into());
            }
        }
    }
    if bonus_index != BONUS_NONE && bonus_index as usize >= PICKS_PER_BET {
        return Err(DvFactorError::InvalidBonusSelection.into());
    }
    Ok(())
}

account!(DvFactorAccount, Bet);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_picks_accepts_distinct_selections() {
        assert!(validate_picks(&[1, 2, 3], BONUS_NONE).is_ok());
        assert!(validate_picks(&[1, 2, 3], 2).is_ok());
    }

    #[test]
    fn test_validate_picks_rejects_duplicates() {
        assert!(validate_picks(&[1, 1, 3], BONUS_NONE).is_err());
        assert!(validate_picks(&[1, 2, 1], 0).is_err());
        assert!(validate_picks(&[2, 2, 2], BONUS_NONE).is_err());
    }

    #[test]
    fn test_validate_picks_rejects_bad_bonus_index() {
        assert!(validate_picks(&[1, 2, 3], 3).is_err());
        assert!(validate_picks(&[1, 2, 3], 17).is_err());
    }

    #[test]
    fn test_bonus_is_tied_to_picks() {
        let mut bet = Bet::zeroed();
        bet.picks = [7, 8, 9];
        bet.bonus_index = 1;
        assert!(bet.picked(8));
        assert!(!bet.picked(4));
        assert!(bet.has_bonus());
        assert!(bet.bonus_on(8));
        assert!(!bet.bonus_on(7));

        bet.bonus_index = BONUS_NONE;
        assert!(!bet.has_bonus());
        assert!(!bet.bonus_on(8));
    }
}
