use steel::*;

use crate::prelude::*;

/// Pad a UTF-8 name into the fixed-size roster field.
fn name_bytes(name: &str) -> [u8; EMPLOYEE_NAME_LEN] {
    let mut bytes = [0u8; EMPLOYEE_NAME_LEN];
    let raw = name.as_bytes();
    let len = raw.len().min(EMPLOYEE_NAME_LEN);
    bytes[..len].copy_from_slice(&raw[..len]);
    bytes
}

pub fn initialize(signer: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: Initialize {}.to_bytes(),
    }
}

pub fn set_admin(signer: Pubkey, new_admin: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(CONFIG_ADDRESS, false),
        ],
        data: SetAdmin { new_admin }.to_bytes(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_edition(
    signer: Pubkey,
    year: u64,
    entry_fee: u64,
    jackpot: u64,
    starts_at: i64,
    betting_deadline: i64,
    ends_at: i64,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: CreateEdition {
            year: year.to_le_bytes(),
            entry_fee: entry_fee.to_le_bytes(),
            jackpot: jackpot.to_le_bytes(),
            starts_at: starts_at.to_le_bytes(),
            betting_deadline: betting_deadline.to_le_bytes(),
            ends_at: ends_at.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn close_edition(signer: Pubkey, year: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(edition_pda(year).0, false),
        ],
        data: CloseEdition {}.to_bytes(),
    }
}

pub fn finish_edition(signer: Pubkey, year: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(edition_pda(year).0, false),
        ],
        data: FinishEdition {}.to_bytes(),
    }
}

pub fn create_employee(signer: Pubkey, id: u64, name: &str, hire_date: i64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(employee_pda(id).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: CreateEmployee {
            id: id.to_le_bytes(),
            name: name_bytes(name),
            hire_date: hire_date.to_le_bytes(),
        }
        .to_bytes(),
    }
}

pub fn confirm_payment(signer: Pubkey, year: u64, user: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new(participant_pda(year, user).0, false),
        ],
        data: ConfirmPayment {}.to_bytes(),
    }
}

pub fn cancel_payment(signer: Pubkey, year: u64, user: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new(participant_pda(year, user).0, false),
        ],
        data: CancelPayment {}.to_bytes(),
    }
}

/// Recompute the pool from the full participant set of the edition. The
/// caller passes every participant account; the handler overwrites the
/// stored total with jackpot + confirmed payments.
pub fn recalculate_pool(signer: Pubkey, year: u64, participants: &[Pubkey]) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(signer, true),
        AccountMeta::new_readonly(CONFIG_ADDRESS, false),
        AccountMeta::new(edition_pda(year).0, false),
    ];
    for participant in participants {
        accounts.push(AccountMeta::new_readonly(*participant, false));
    }
    Instruction {
        program_id: crate::ID,
        accounts,
        data: RecalculatePool {}.to_bytes(),
    }
}

pub fn record_resignation(
    signer: Pubkey,
    year: u64,
    employee_id: u64,
    resignation_date: i64,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(CONFIG_ADDRESS, false),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new(employee_pda(employee_id).0, false),
        ],
        data: RecordResignation {
            resignation_date: resignation_date.to_le_bytes(),
        }
        .to_bytes(),
    }
}

/// Reveal the given bets of an edition to the other players.
pub fn reveal_bets(signer: Pubkey, year: u64, bets: &[Pubkey]) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(signer, true),
        AccountMeta::new_readonly(CONFIG_ADDRESS, false),
        AccountMeta::new_readonly(edition_pda(year).0, false),
    ];
    for bet in bets {
        accounts.push(AccountMeta::new(*bet, false));
    }
    Instruction {
        program_id: crate::ID,
        accounts,
        data: RevealBets {}.to_bytes(),
    }
}

/// Settle one resignation over the full bet set of the edition. The caller
/// passes every bet account; the handler selects the ones that picked the
/// resigned employee.
pub fn settle_resignation(
    signer: Pubkey,
    year: u64,
    employee_id: u64,
    bets: &[Pubkey],
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(signer, true),
        AccountMeta::new_readonly(CONFIG_ADDRESS, false),
        AccountMeta::new(edition_pda(year).0, false),
        AccountMeta::new(employee_pda(employee_id).0, false),
    ];
    for bet in bets {
        accounts.push(AccountMeta::new(*bet, false));
    }
    Instruction {
        program_id: crate::ID,
        accounts,
        data: SettleResignation {}.to_bytes(),
    }
}

pub fn join_edition(signer: Pubkey, year: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new(participant_pda(year, signer).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: JoinEdition {}.to_bytes(),
    }
}

/// Place or overwrite a bet. The three picked employee accounts are passed
/// so the handler can verify the picks exist and are still active.
pub fn place_bet(
    signer: Pubkey,
    year: u64,
    picks: [u64; PICKS_PER_BET],
    bonus_index: u8,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new_readonly(edition_pda(year).0, false),
            AccountMeta::new(participant_pda(year, signer).0, false),
            AccountMeta::new(bet_pda(year, signer).0, false),
            AccountMeta::new_readonly(employee_pda(picks[0]).0, false),
            AccountMeta::new_readonly(employee_pda(picks[1]).0, false),
            AccountMeta::new_readonly(employee_pda(picks[2]).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: PlaceBet {
            picks: [
                picks[0].to_le_bytes(),
                picks[1].to_le_bytes(),
                picks[2].to_le_bytes(),
            ],
            bonus_index,
        }
        .to_bytes(),
    }
}

pub fn claim_winnings(signer: Pubkey, year: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new(bet_pda(year, signer).0, false),
        ],
        data: ClaimWinnings {}.to_bytes(),
    }
}

pub fn fund_jackpot(signer: Pubkey, year: u64, amount: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(edition_pda(year).0, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: FundJackpot {
            amount: amount.to_le_bytes(),
        }
        .to_bytes(),
    }
}
