use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Places or overwrites the signer's bet for an edition: three distinct
/// active employees plus an optional Chiringuito bonus on one of them.
/// Requires an open edition and a confirmed payment. The three picked
/// employee accounts are passed alongside so the picks are checked against
/// the actual roster.
pub fn process_place_bet(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse instruction data.
    let args = PlaceBet::try_from_bytes(data)?;
    let picks = [
        u64::from_le_bytes(args.picks[0]),
        u64::from_le_bytes(args.picks[1]),
        u64::from_le_bytes(args.picks[2]),
    ];
    let bonus_index = args.bonus_index;

    sol_log(&format!(
        "PlaceBet: picks={:?}, bonus_index={}",
        picks, bonus_index
    ));

    // Load accounts.
    let [signer_info, edition_info, participant_info, bet_info, employee_1_info, employee_2_info, employee_3_info, system_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    participant_info.is_writable()?;
    bet_info.is_writable()?;
    system_program.is_program(&system_program::ID)?;

    let edition = edition_info.as_account::<Edition>(&dvfactor_api::ID)?;
    edition_info.has_seeds(&[EDITION, &edition.year.to_le_bytes()], &dvfactor_api::ID)?;

    // Bets are accepted only while the edition is open; the status is the
    // admin-driven cutoff.
    if !edition.is_open() {
        sol_log(&format!("Edition {} is not open for bets", edition.year));
        return Err(DvFactorError::EditionNotOpen.into());
    }

    let participant = participant_info.as_account_mut::<Participant>(&dvfactor_api::ID)?;
    participant_info.has_seeds(
        &[
            PARTICIPANT,
            &edition.year.to_le_bytes(),
            &signer_info.key.to_bytes(),
        ],
        &dvfactor_api::ID,
    )?;
    if participant.authority != *signer_info.key {
        sol_log("Signer is not the participant authority");
        return Err(DvFactorError::InvalidAuthority.into());
    }
    if !participant.confirmed() {
        sol_log(&format!(
            "User {} has no confirmed payment for edition {}",
            signer_info.key, edition.year
        ));
        return Err(DvFactorError::PaymentNotConfirmed.into());
    }

    // Validate selections before touching any account.
    validate_picks(&picks, bonus_index)?;

    // The picks must reference existing, still-active employees.
    let employee_infos = [employee_1_info, employee_2_info, employee_3_info];
    for (i, employee_info) in employee_infos.iter().enumerate() {
        let employee = employee_info.as_account::<Employee>(&dvfactor_api::ID)?;
        if employee.id != picks[i] {
            sol_log(&format!(
                "Employee account {} does not match pick {}",
                employee.id, picks[i]
            ));
            return Err(DvFactorError::InvalidAccount.into());
        }
        if !employee.active() {
            sol_log(&format!("Employee {} is not active", employee.id));
            return Err(DvFactorError::EmployeeNotActive.into());
        }
    }

    let clock = Clock::get()?;

    // Load or create the bet account; one bet per (user, edition), placing
    // again overwrites.
    let bet = if bet_info.data_is_empty() {
        bet_info.has_seeds(
            &[
                BET,
                &edition.year.to_le_bytes(),
                &signer_info.key.to_bytes(),
            ],
            &dvfactor_api::ID,
        )?;
        create_program_account::<Bet>(
            bet_info,
            system_program,
            signer_info,
            &dvfactor_api::ID,
            &[
                BET,
                &edition.year.to_le_bytes(),
                &signer_info.key.to_bytes(),
            ],
        )?;
        let bet = bet_info.as_account_mut::<Bet>(&dvfactor_api::ID)?;
        bet.authority = *signer_info.key;
        bet.edition_year = edition.year;
        bet.created_at = clock.unix_timestamp;
        bet
    } else {
        let bet = bet_info.as_account_mut::<Bet>(&dvfactor_api::ID)?;
        if bet.authority != *signer_info.key {
            sol_log("Signer is not the bet authority");
            return Err(DvFactorError::InvalidAuthority.into());
        }
        if bet.edition_year != edition.year {
            sol_log(&format!(
                "Bet belongs to edition {}, not {}",
                bet.edition_year, edition.year
            ));
            return Err(DvFactorError::WrongEdition.into());
        }
        bet
    };

    bet.picks = picks;
    bet.bonus_index = bonus_index;
    bet.updated_at = clock.unix_timestamp;

    participant.has_bet = 1;

    sol_log(&format!(
        "Bet stored for {} on edition {}",
        signer_info.key, edition.year
    ));

    Ok(())
}
