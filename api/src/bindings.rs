//! TypeScript bindings generation for frontend types.
//!
//! This module exports Rust types to TypeScript using ts-rs.
//! Enable with the `ts-bindings` feature flag.

// Re-export types with TS derive when feature is enabled
#[cfg(feature = "ts-bindings")]
mod ts_types {
    use ts_rs::TS;

    /// TypeScript export for the edition lifecycle status
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dvfactor/src/generated/")]
    #[allow(dead_code)]
    pub enum EditionStatusTS {
        Open = 0,
        Closed = 1,
        Finished = 2,
    }

    /// TypeScript export for Edition state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dvfactor/src/generated/")]
    #[allow(dead_code)]
    pub struct EditionTS {
        /// The calendar year this edition runs in
        pub year: u64,
        /// The entry fee in euro cents
        pub entry_fee: u64,
        /// The jackpot in euro cents
        pub jackpot: u64,
        /// Unix timestamp at which the edition starts
        pub starts_at: i64,
        /// Unix timestamp after which bets may no longer be placed
        pub betting_deadline: i64,
        /// Unix timestamp at which the edition ends
        pub ends_at: i64,
        /// Lifecycle status (0 = open, 1 = closed, 2 = finished)
        pub status: u8,
        /// The number of resignations recorded so far
        pub resignation_count: u8,
        /// The total prize pool in euro cents
        pub total_pool: u64,
        /// The number of participants enrolled
        pub participant_count: u64,
        /// The number of participants with a confirmed payment
        pub confirmed_count: u64,
        /// Total winnings credited across all settlements
        pub total_distributed: u64,
    }

    /// TypeScript export for Participant state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dvfactor/src/generated/")]
    #[allow(dead_code)]
    pub struct ParticipantTS {
        /// The user this enrollment belongs to
        pub authority: String, // Pubkey as string
        /// The edition year this enrollment is for
        pub edition_year: u64,
        /// The payment amount in euro cents
        pub payment_amount: u64,
        /// Whether the admin confirmed the payment
        pub payment_confirmed: bool,
        /// Whether the user has placed a bet
        pub has_bet: bool,
        /// Unix timestamp the payment was confirmed at (0 = not confirmed)
        pub payment_date: i64,
        /// Unix timestamp the enrollment was created at
        pub created_at: i64,
    }

    /// TypeScript export for Employee state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dvfactor/src/generated/")]
    #[allow(dead_code)]
    pub struct EmployeeTS {
        /// The roster id
        pub id: u64,
        /// UTF-8 name
        pub name: String,
        /// Unix timestamp of the hire date
        pub hire_date: i64,
        /// Whether the employee is still active
        pub is_active: bool,
        /// Unix timestamp of the resignation date (0 = none)
        pub resignation_date: i64,
        /// Month of the resignation (1-12, 0 = none)
        pub resignation_month: u8,
        /// Order of this resignation within its edition (1 = first, 0 = none)
        pub resignation_rank: u8,
        /// Whether the resignation payout has been settled
        pub is_settled: bool,
    }

    /// TypeScript export for Bet state
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dvfactor/src/generated/")]
    #[allow(dead_code)]
    pub struct BetTS {
        /// The user who placed this bet
        pub authority: String, // Pubkey as string
        /// The edition year this bet is for
        pub edition_year: u64,
        /// The three picked employee roster ids
        pub picks: [u64; 3],
        /// Index into picks the Chiringuito bonus is on (255 = none)
        pub bonus_index: u8,
        /// Whether this bet is visible to other players
        pub is_revealed: bool,
        /// Unix timestamp of the first submission
        pub created_at: i64,
        /// Unix timestamp of the last overwrite
        pub updated_at: i64,
        /// Winnings credited and not yet claimed, in euro cents
        pub pending_winnings: u64,
        /// Total winnings credited across the edition, in euro cents
        pub total_won: u64,
    }

    /// All payout reference data for the frontend quote table
    #[derive(TS)]
    #[ts(export, export_to = "../frontend/dvfactor/src/generated/")]
    #[allow(dead_code)]
    pub struct PayoutTableTS {
        /// Basis points keyed by [month - 1][selectors - 1]
        pub table_bps: Vec<Vec<u64>>,
        /// Pool share of the first, second and third resignation
        pub rank_share_bps: [u64; 3],
        /// Share of a resignation's amount won by Chiringuito activators
        pub bonus_share_bps: u64,
    }
}

#[cfg(feature = "ts-bindings")]
#[cfg(test)]
mod tests {
    use super::ts_types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test generates the TypeScript bindings when run with --features ts-bindings
        EditionStatusTS::export().expect("Failed to export EditionStatusTS");
        EditionTS::export().expect("Failed to export EditionTS");
        ParticipantTS::export().expect("Failed to export ParticipantTS");
        EmployeeTS::export().expect("Failed to export EmployeeTS");
        BetTS::export().expect("Failed to export BetTS");
        PayoutTableTS::export().expect("Failed to export PayoutTableTS");
    }
}
