use dvfactor_api::prelude::*;
use solana_program::log::sol_log;
use steel::*;

/// Admin-only instruction to create a new yearly edition. The edition opens
/// immediately and its pool starts at the seeded jackpot.
pub fn process_create_edition(accounts: &[AccountInfo<'_>], data: &[u8]) -> ProgramResult {
    // Parse args
    let args = CreateEdition::try_from_bytes(data)?;
    let year = u64::from_le_bytes(args.year);
    let entry_fee = u64::from_le_bytes(args.entry_fee);
    let jackpot = u64::from_le_bytes(args.jackpot);
    let starts_at = i64::from_le_bytes(args.starts_at);
    let betting_deadline = i64::from_le_bytes(args.betting_deadline);
    let ends_at = i64::from_le_bytes(args.ends_at);

    // Load accounts
    let [signer_info, config_info, edition_info, system_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    signer_info.is_signer()?;
    config_info.has_seeds(&[CONFIG], &dvfactor_api::ID)?;
    edition_info
        .is_empty()?
        .is_writable()?
        .has_seeds(&[EDITION, &year.to_le_bytes()], &dvfactor_api::ID)?;
    system_program.is_program(&system_program::ID)?;

    let config = config_info.as_account::<Config>(&dvfactor_api::ID)?;

    if config.admin != *signer_info.key {
        sol_log("Error: Only admin can create editions");
        return Err(DvFactorError::NotAdmin.into());
    }

    // Validate args.
    if year == 0 {
        return Err(ProgramError::InvalidArgument);
    }
    if entry_fee == 0 || entry_fee > MAX_PAYMENT_AMOUNT {
        sol_log(&format!("Invalid entry fee: {}", entry_fee));
        return Err(DvFactorError::InvalidAmount.into());
    }
    if jackpot > MAX_PAYMENT_AMOUNT {
        sol_log(&format!("Invalid jackpot: {}", jackpot));
        return Err(DvFactorError::InvalidAmount.into());
    }
    if starts_at > betting_deadline || betting_deadline > ends_at {
        sol_log("Edition dates are out of order");
        return Err(ProgramError::InvalidArgument);
    }

    create_program_account::<Edition>(
        edition_info,
        system_program,
        signer_info,
        &dvfactor_api::ID,
        &[EDITION, &year.to_le_bytes()],
    )?;
    let edition = edition_info.as_account_mut::<Edition>(&dvfactor_api::ID)?;
    edition.year = year;
    edition.entry_fee = entry_fee;
    edition.jackpot = jackpot;
    edition.starts_at = starts_at;
    edition.betting_deadline = betting_deadline;
    edition.ends_at = ends_at;
    edition.status = STATUS_OPEN;
    edition.resignation_count = 0;
    // The pool starts at the jackpot; confirmed payments add to it.
    edition.total_pool = jackpot;
    edition.participant_count = 0;
    edition.confirmed_count = 0;
    edition.total_distributed = 0;

    // Move the seeded jackpot into the edition vault so payouts are covered.
    if jackpot > 0 {
        edition_info.collect(jackpot, signer_info)?;
    }

    sol_log(&format!(
        "Edition {} created: entry fee {}, jackpot {}",
        year, entry_fee, jackpot
    ));

    Ok(())
}
